//! SSD1306 OLED Display Driver
//!
//! A driver for the SSD1306 monochrome OLED controller (128x64 and 128x32
//! panels) over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 I2C support
//! - Bit-exact command/data framing with configurable continuation flags
//! - Page, horizontal and vertical addressing modes
//! - Bounded retry on NAK
//! - Hardware scrolling, contrast, inversion and rotation
//!
//! The driver does not hold a framebuffer. The caller owns a page-major
//! buffer (one byte per column per 8-row page, LSB on top) and pushes it
//! with [`Display::write`] or [`Display::write_frame`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_i2c::{Builder, Dimensions, Display, I2cInterface, PageRegion, i2c_address};
//!
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
//! # let i2c = MockI2c;
//! let interface = I2cInterface::new(i2c, i2c_address(0));
//! let config = match Builder::new().dimensions(Dimensions::SIZE_128X64).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init().is_err() {
//!     return;
//! }
//! let _ = display.clear();
//!
//! let mut frame = [0u8; 128 * 8];
//! frame[2 * 128..2 * 128 + 8].fill(0xFF);
//! let _ = display.write(&frame, PageRegion::new(2, 1, 0, 8));
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Memory addressing modes and cursor tracking
pub mod addressing;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bring-up command sequence
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// I2C command/data framing
pub mod packet;
/// Orientation commands
pub mod rotation;
/// Hardware scrolling
pub mod scroll;

pub use addressing::{AddressCheck, AddressError, AddressingMode, Cursor};
pub use config::{Builder, Config, Dimensions, MAX_COMMONS, MAX_SEGMENTS, PAGE_HEIGHT, Rotation};
pub use display::{Display, PageRegion, Status, VcomhLevel};
pub use error::{BuilderError, Error};
pub use init::{INIT_STEP_COUNT, InitSequence, InitStep};
pub use interface::{
    DEFAULT_MAX_ATTEMPTS, DisplayInterface, I2C_ADDRESS_BASE, I2cInterface, InterfaceError,
    ReadInterface, RetryPolicy, i2c_address,
};
pub use packet::{ContinuationPolicy, MAX_PAYLOAD_LEN, Packet, PacketError, PacketKind};
pub use scroll::{
    DiagonalScroll, FrameInterval, HorizontalScroll, ScrollDirection, VerticalScrollArea,
};
