//! SSD1306 command definitions
//!
//! This module defines the command opcodes used to control the SSD1306 OLED
//! controller. Commands travel over I2C framed by control bytes (see
//! [`crate::packet`]); a command and its parameters are all sent with the
//! command type tag.
//!
//! Opcodes whose low bits carry a parameter (page start, column nibbles,
//! start line, the on/off toggles) are given as the base value; OR in the
//! parameter after masking it to the field width.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_i2c::{command, DisplayInterface, I2cInterface, Packet, PacketKind};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let mut interface = I2cInterface::new(MockI2c, 0x3C);
//! // Turn the panel on
//! if let Ok(packet) = Packet::encode(PacketKind::Command, &[command::DISPLAY_ON], Default::default()) {
//!     let _ = interface.write(packet.as_bytes());
//! }
//! ```

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 byte: contrast level, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display on, following RAM content (0xA4)
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;

/// Entire display on, ignoring RAM content (0xA5)
pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;

/// Normal display, 1 in RAM lights a pixel (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display, 0 in RAM lights a pixel (0xA7)
pub const INVERSE_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Right horizontal scroll setup (0x26)
///
/// Requires 6 bytes: [0x00, start page, interval, end page, 0x00, 0xFF]
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Left horizontal scroll setup (0x27)
///
/// Same parameters as [`RIGHT_HORIZONTAL_SCROLL`].
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Vertical and right horizontal scroll setup (0x29)
///
/// Requires 5 bytes: [0x00, start page, interval, end page, vertical offset]
pub const VERTICAL_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Vertical and left horizontal scroll setup (0x2A)
///
/// Same parameters as [`VERTICAL_RIGHT_HORIZONTAL_SCROLL`].
pub const VERTICAL_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Deactivate scroll (0x2E)
///
/// RAM content must be rewritten after deactivating a running scroll.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
///
/// Starts the scroll configured by the last setup command.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area (0xA3)
///
/// Requires 2 bytes: [rows in top fixed area, rows in scroll area]
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

// Addressing setting commands

/// Set lower column start address for page addressing mode (0x00..=0x0F)
pub const SET_LOWER_COLUMN: u8 = 0x00;

/// Set higher column start address for page addressing mode (0x10..=0x1F)
pub const SET_HIGHER_COLUMN: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Requires 1 byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page
pub const SET_ADDRESSING_MODE: u8 = 0x20;

/// Set column address range (0x21)
///
/// Requires 2 bytes: [start column, end column]. Horizontal/vertical mode only.
pub const SET_COLUMN_ADDRESS: u8 = 0x21;

/// Set page address range (0x22)
///
/// Requires 2 bytes: [start page, end page]. Horizontal/vertical mode only.
pub const SET_PAGE_ADDRESS: u8 = 0x22;

/// Set page start address for page addressing mode (0xB0..=0xB7)
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration commands

/// Set display start line (0x40..=0x7F)
pub const SET_START_LINE: u8 = 0x40;

/// Segment re-map, column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// Segment re-map, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP_REVERSED: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 byte: active rows - 1, 15..=63.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan from COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM output scan from COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_REMAPPED: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 byte: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 byte:
/// - Bit 1: always set
/// - Bit 4: alternative COM pin configuration
/// - Bit 5: COM left/right remap
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio and oscillator frequency (0xD5)
///
/// Requires 1 byte: bits 3:0 = divide ratio - 1, bits 7:4 = oscillator frequency
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 byte: bits 3:0 = phase 1, bits 7:4 = phase 2, in DCLK units.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 byte, see [`crate::VcomhLevel`].
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

/// No operation (0xE3)
pub const NOP: u8 = 0xE3;

// Charge pump

/// Charge pump setting (0x8D)
///
/// Requires 1 byte: [`CHARGE_PUMP_ENABLE`] or [`CHARGE_PUMP_DISABLE`].
/// Must be applied before the display is switched on.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump parameter: enabled
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Charge pump parameter: disabled
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
