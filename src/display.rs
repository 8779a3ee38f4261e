//! Core display operations

use crate::addressing::{AddressCheck, AddressingMode, AddressingState, Cursor, seek_commands};
use crate::command::{
    ACTIVATE_SCROLL, CHARGE_PUMP, DEACTIVATE_SCROLL, DISPLAY_OFF, DISPLAY_ON,
    ENTIRE_DISPLAY_ON, ENTIRE_DISPLAY_RESUME, INVERSE_DISPLAY, NOP, NORMAL_DISPLAY,
    SET_ADDRESSING_MODE, SET_CLOCK_DIV, SET_COLUMN_ADDRESS, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_PAGE_ADDRESS, SET_PRECHARGE, SET_START_LINE, SET_VCOMH_DESELECT,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::init::{InitSequence, charge_pump_byte, clock_byte};
use crate::interface::{DisplayInterface, ReadInterface};
use crate::packet::{MAX_PAYLOAD_LEN, Packet, PacketKind};
use crate::rotation::orientation_commands;
use crate::scroll::{DiagonalScroll, HorizontalScroll, VerticalScrollArea};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

const ZEROS: [u8; MAX_PAYLOAD_LEN] = [0; MAX_PAYLOAD_LEN];

/// Region of display RAM, in pages and columns
///
/// The source buffer for [`Display::write`] is page-major with
/// `column_span` bytes per page, indexed by absolute page number: page `p`
/// is read from `buffer[p * column_span..(p + 1) * column_span]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRegion {
    /// First page written
    pub start_page: u8,
    /// Number of pages written
    pub page_span: u8,
    /// First column written on each page
    pub start_column: u8,
    /// Number of columns written on each page
    pub column_span: u8,
}

impl PageRegion {
    /// Create a new region
    pub fn new(start_page: u8, page_span: u8, start_column: u8, column_span: u8) -> Self {
        Self {
            start_page,
            page_span,
            start_column,
            column_span,
        }
    }

    /// Region covering the whole display
    pub fn full(dims: &Dimensions) -> Self {
        Self::new(0, dims.pages(), 0, dims.cols)
    }

    /// Minimum source buffer length for this region
    pub fn required_buffer_len(&self) -> usize {
        (self.start_page as usize + self.page_span as usize) * self.column_span as usize
    }

    fn is_empty(&self) -> bool {
        self.page_span == 0 || self.column_span == 0
    }
}

/// VCOMH deselect level (parameter of command 0xDB)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum VcomhLevel {
    /// ~0.65 × VCC
    V065 = 0x00,
    /// ~0.77 × VCC (reset value)
    #[default]
    V077 = 0x20,
    /// ~0.83 × VCC
    V083 = 0x30,
}

/// Status byte read back from the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status(pub u8);

impl Status {
    /// Whether the panel is switched off (bit 6)
    pub fn is_display_off(self) -> bool {
        self.0 & 0x40 != 0
    }
}

/// Core display driver for SSD1306
///
/// Owns the bus interface and mirrors the controller's addressing state.
/// Every operation blocks until all of its transactions have completed.
/// The handle is not shareable; wrap it in a lock to use it from more than
/// one context.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Mirror of the controller's addressing registers
    addressing: AddressingState,
    /// Whether the display is switched on
    is_display_on: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            addressing: AddressingState::new(),
            is_display_on: false,
        }
    }

    /// Run the bring-up sequence
    ///
    /// Any failed step aborts the sequence; treat the display as unusable
    /// and do not retry single steps. Running it again is harmless.
    pub fn init(&mut self) -> DisplayResult<I> {
        let sequence = InitSequence::new(&self.config);
        log::debug!(
            "ssd1306: init {}x{}, {} steps",
            self.config.dimensions.cols,
            self.config.dimensions.rows,
            sequence.steps().len()
        );

        self.is_display_on = false;
        for step in sequence.steps() {
            log::trace!("ssd1306: init {}", step.name());
            self.send_commands(step.as_bytes())?;
        }
        self.is_display_on = true;

        Ok(())
    }

    /// Zero the whole display RAM
    ///
    /// In page mode each page gets its own seek. The tracked cursor ends on
    /// the last page; the controller's column has wrapped.
    pub fn clear(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        log::debug!("ssd1306: clear {} pages", dims.pages());

        match self.addressing.mode() {
            AddressingMode::Page => {
                for page in 0..dims.pages() {
                    self.seek(page, 0)?;
                    self.send_zeros(dims.cols as usize)?;
                }
            }
            AddressingMode::Horizontal | AddressingMode::Vertical => {
                self.set_window(&PageRegion::full(&dims))?;
                self.send_zeros(dims.buffer_size())?;
            }
        }

        Ok(())
    }

    /// Write part of a caller-owned framebuffer to display RAM
    ///
    /// Each page of `region` is sent as one data burst of `column_span`
    /// bytes, taken from `buffer` at offset `page * column_span`.
    ///
    /// # Errors
    ///
    /// - `Error::BufferTooSmall` if `buffer` cannot supply the region
    /// - `Error::BufferTooLarge` if `column_span` exceeds one transaction
    /// - `Error::AddressOutOfRange` in strict mode if the region leaves the display
    ///
    /// All three are reported before anything is sent.
    pub fn write(&mut self, buffer: &[u8], region: PageRegion) -> DisplayResult<I> {
        let required = region.required_buffer_len();
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: buffer.len(),
            });
        }

        let max = self.max_payload_len();
        if region.column_span as usize > max {
            return Err(Error::BufferTooLarge {
                provided: region.column_span as usize,
                max,
            });
        }

        if region.is_empty() {
            return Ok(());
        }
        self.check_region(&region)?;

        log::debug!(
            "ssd1306: write pages {}+{}, columns {}+{}",
            region.start_page,
            region.page_span,
            region.start_column,
            region.column_span
        );

        let span = region.column_span as usize;
        let pages = region.start_page as usize..region.start_page as usize + region.page_span as usize;

        match self.addressing.mode() {
            AddressingMode::Page => {
                for page in pages {
                    self.seek(page as u8, region.start_column)?;
                    let offset = page * span;
                    self.send_data(&buffer[offset..offset + span])?;
                }
            }
            AddressingMode::Horizontal => {
                self.set_window(&region)?;
                for page in pages {
                    let offset = page * span;
                    self.send_data(&buffer[offset..offset + span])?;
                }
            }
            AddressingMode::Vertical => {
                self.set_window(&region)?;
                // RAM fills column by column, so gather one byte per page
                let mut scratch = [0u8; MAX_PAYLOAD_LEN];
                let mut len = 0;
                for column in 0..span {
                    for page in pages.clone() {
                        scratch[len] = buffer[page * span + column];
                        len += 1;
                        if len == max {
                            self.send_data(&scratch[..len])?;
                            len = 0;
                        }
                    }
                }
                if len > 0 {
                    self.send_data(&scratch[..len])?;
                }
            }
        }

        Ok(())
    }

    /// Write a full page-major framebuffer (`pages × columns` bytes)
    pub fn write_frame(&mut self, frame: &[u8]) -> DisplayResult<I> {
        let region = PageRegion::full(&self.config.dimensions);
        self.write(frame, region)
    }

    /// Move the RAM write cursor (page addressing mode)
    ///
    /// Out-of-range values are masked to the register widths unless the
    /// configuration uses [`AddressCheck::Strict`].
    pub fn seek(&mut self, page: u8, column: u8) -> DisplayResult<I> {
        let cursor = self.addressing.resolve(
            page,
            column,
            self.config.address_check,
            &self.config.dimensions,
        )?;
        log::trace!("ssd1306: seek page {} column {}", cursor.page, cursor.column);

        self.send_commands(&seek_commands(cursor.page, cursor.column))?;
        self.addressing.moved_to(cursor);

        Ok(())
    }

    /// Set contrast level
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Light every pixel regardless of RAM (true) or follow RAM (false)
    pub fn set_entire_display_on(&mut self, on: bool) -> DisplayResult<I> {
        let cmd = if on {
            ENTIRE_DISPLAY_ON
        } else {
            ENTIRE_DISPLAY_RESUME
        };
        self.send_commands(&[cmd])
    }

    /// Invert pixel polarity
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        let cmd = if inverted {
            INVERSE_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        self.send_commands(&[cmd])
    }

    /// Switch the panel on or off (sleep)
    ///
    /// RAM content is kept while the panel is off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        let cmd = if on { DISPLAY_ON } else { DISPLAY_OFF };
        self.send_commands(&[cmd])?;
        self.is_display_on = on;
        Ok(())
    }

    /// Configure a continuous horizontal scroll
    ///
    /// Deactivate any running scroll first.
    pub fn setup_horizontal_scroll(&mut self, scroll: &HorizontalScroll) -> DisplayResult<I> {
        self.send_commands(&scroll.commands())
    }

    /// Configure a continuous vertical and horizontal scroll
    pub fn setup_diagonal_scroll(&mut self, scroll: &DiagonalScroll) -> DisplayResult<I> {
        self.send_commands(&scroll.commands())
    }

    /// Set the rows affected by vertical scrolling
    pub fn set_vertical_scroll_area(&mut self, area: VerticalScrollArea) -> DisplayResult<I> {
        self.send_commands(&area.commands())
    }

    /// Start the configured scroll
    pub fn activate_scroll(&mut self) -> DisplayResult<I> {
        self.send_commands(&[ACTIVATE_SCROLL])
    }

    /// Stop scrolling
    ///
    /// RAM must be rewritten afterwards.
    pub fn deactivate_scroll(&mut self) -> DisplayResult<I> {
        self.send_commands(&[DEACTIVATE_SCROLL])
    }

    /// Select the memory addressing mode
    ///
    /// The tracked cursor is dropped; [`clear`](Self::clear) and
    /// [`write`](Self::write) adapt to the new mode.
    pub fn set_addressing_mode(&mut self, mode: AddressingMode) -> DisplayResult<I> {
        self.send_commands(&[SET_ADDRESSING_MODE, mode as u8])?;
        self.addressing.set_mode(mode);
        Ok(())
    }

    /// Set the column window (horizontal/vertical mode only)
    pub fn set_column_range(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_COLUMN_ADDRESS, start & 0x7F, end & 0x7F])
    }

    /// Set the page window (horizontal/vertical mode only)
    pub fn set_page_range(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_PAGE_ADDRESS, start & 0x07, end & 0x07])
    }

    /// Set the RAM row shown on the first display line (0..=63)
    pub fn set_start_line(&mut self, line: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_START_LINE | (line & 0x3F)])?;
        self.config.start_line = line & 0x3F;
        Ok(())
    }

    /// Set the vertical shift by COM (0..=63)
    pub fn set_display_offset(&mut self, offset: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_DISPLAY_OFFSET, offset & 0x3F])?;
        self.config.display_offset = offset & 0x3F;
        Ok(())
    }

    /// Change orientation
    ///
    /// Only data written afterwards is mirrored horizontally; rewrite the
    /// frame after calling this.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        let (segment_remap, com_scan) = orientation_commands(rotation);
        self.send_commands(&[segment_remap])?;
        self.send_commands(&[com_scan])?;
        self.config.rotation = rotation;
        Ok(())
    }

    /// Set pre-charge phase lengths in DCLK periods (1..=15 each)
    pub fn set_precharge_period(&mut self, phase1: u8, phase2: u8) -> DisplayResult<I> {
        let period = ((phase2 & 0x0F) << 4) | (phase1 & 0x0F);
        self.send_commands(&[SET_PRECHARGE, period])
    }

    /// Set VCOMH deselect level
    pub fn set_vcomh_deselect(&mut self, level: VcomhLevel) -> DisplayResult<I> {
        self.send_commands(&[SET_VCOMH_DESELECT, level as u8])
    }

    /// Enable or disable the internal charge pump
    ///
    /// Takes effect at the next display on.
    pub fn set_charge_pump(&mut self, enabled: bool) -> DisplayResult<I> {
        self.send_commands(&[CHARGE_PUMP, charge_pump_byte(enabled)])?;
        self.config.charge_pump = enabled;
        Ok(())
    }

    /// Set clock divide ratio minus one and oscillator frequency (0..=15 each)
    pub fn set_clock(&mut self, divide: u8, oscillator: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_CLOCK_DIV, clock_byte(divide, oscillator)])?;
        self.config.clock_divide = divide & 0x0F;
        self.config.oscillator_frequency = oscillator & 0x0F;
        Ok(())
    }

    /// Send a no-op command
    pub fn nop(&mut self) -> DisplayResult<I> {
        self.send_commands(&[NOP])
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Active addressing mode
    pub fn addressing_mode(&self) -> AddressingMode {
        self.addressing.mode()
    }

    /// Tracked RAM write cursor
    ///
    /// `None` before the first seek, outside page mode, and after a failed
    /// transfer.
    pub fn cursor(&self) -> Option<Cursor> {
        self.addressing.cursor()
    }

    /// Whether the panel was last switched on
    pub fn is_display_on(&self) -> bool {
        self.is_display_on
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn max_payload_len(&self) -> usize {
        self.interface.max_payload_len().min(MAX_PAYLOAD_LEN)
    }

    /// Reject regions leaving the display when strict checking is on
    fn check_region(&self, region: &PageRegion) -> DisplayResult<I> {
        if self.config.address_check != AddressCheck::Strict {
            return Ok(());
        }
        let last_page = region.start_page as u16 + region.page_span as u16 - 1;
        let last_column = region.start_column as u16 + region.column_span as u16 - 1;
        let dims = &self.config.dimensions;
        if last_page >= dims.pages() as u16 || last_column >= dims.cols as u16 {
            return Err(Error::AddressOutOfRange {
                page: last_page.min(u8::MAX as u16) as u8,
                column: last_column.min(u8::MAX as u16) as u8,
            });
        }
        Ok(())
    }

    /// Program the column and page window for horizontal/vertical mode
    ///
    /// Window ends past the display are clamped to its last column and page.
    /// Bytes beyond the clamped window wrap inside it.
    fn set_window(&mut self, region: &PageRegion) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        let last_column = dims.cols.saturating_sub(1);
        let last_page = dims.pages().saturating_sub(1);

        let wanted_column = region.start_column as u16 + region.column_span as u16 - 1;
        let wanted_page = region.start_page as u16 + region.page_span as u16 - 1;
        let end_column = wanted_column.min(last_column as u16) as u8;
        let end_page = wanted_page.min(last_page as u16) as u8;
        if wanted_column > end_column as u16 || wanted_page > end_page as u16 {
            log::warn!(
                "ssd1306: window ends at page {}, column {}; clamped to page {}, column {}",
                wanted_page,
                wanted_column,
                end_page,
                end_column
            );
        }

        self.set_column_range(region.start_column, end_column)?;
        self.set_page_range(region.start_page, end_page)
    }

    /// Send `count` zero bytes in bursts no larger than one transaction
    fn send_zeros(&mut self, count: usize) -> DisplayResult<I> {
        let max = self.max_payload_len();
        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(max);
            self.send_data(&ZEROS[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Send command bytes as one transaction
    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.send_packet(PacketKind::Command, commands)
    }

    /// Send a data burst as one transaction
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.send_packet(PacketKind::Data, data)?;
        self.addressing.advance(data.len());
        Ok(())
    }

    fn send_packet(&mut self, kind: PacketKind, payload: &[u8]) -> DisplayResult<I> {
        let packet = Packet::encode_limited(
            kind,
            payload,
            self.config.continuation_policy,
            self.max_payload_len(),
        )?;
        self.interface.write(packet.as_bytes()).map_err(|e| {
            self.addressing.invalidate();
            Error::Interface(e)
        })
    }
}

impl<I> Display<I>
where
    I: ReadInterface,
{
    /// Read the controller status byte
    ///
    /// Requires an interface with read support.
    pub fn read_status(&mut self) -> Result<Status, Error<I>> {
        let mut buf = [0u8; 1];
        self.interface.read(&mut buf).map_err(Error::Interface)?;
        Ok(Status(buf[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::packet::ContinuationPolicy;
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        transactions: Vec<Vec<u8>>,
        fail_at: Option<usize>,
        max_payload: usize,
        status: u8,
    }

    #[derive(Debug, PartialEq)]
    struct MockError;

    impl MockInterface {
        fn new() -> Self {
            Self {
                transactions: Vec::new(),
                fail_at: None,
                max_payload: MAX_PAYLOAD_LEN,
                status: 0x00,
            }
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            if self.fail_at == Some(self.transactions.len()) {
                return Err(MockError);
            }
            self.transactions.push(bytes.to_vec());
            Ok(())
        }

        fn max_payload_len(&self) -> usize {
            self.max_payload
        }
    }

    impl ReadInterface for MockInterface {
        fn read(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
            buffer.fill(self.status);
            Ok(())
        }
    }

    fn is_data(tx: &[u8]) -> bool {
        tx[0] & 0x40 != 0
    }

    fn payload(tx: &[u8]) -> Vec<u8> {
        tx.iter().skip(1).step_by(2).copied().collect()
    }

    fn controls(tx: &[u8]) -> Vec<u8> {
        tx.iter().step_by(2).copied().collect()
    }

    fn test_display_with(builder: Builder) -> Display<MockInterface> {
        Display::new(MockInterface::new(), builder.build().unwrap())
    }

    fn test_display() -> Display<MockInterface> {
        test_display_with(Builder::new().dimensions(Dimensions::SIZE_128X64))
    }

    #[test]
    fn test_init_sends_sequence_in_order() {
        let mut display = test_display();
        display.init().unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(txs.len(), crate::init::INIT_STEP_COUNT);
        assert!(txs.iter().all(|tx| !is_data(tx)));
        assert_eq!(payload(&txs[0]), [0xA8, 0x3F]);
        assert_eq!(payload(&txs[10]), [0x8D, 0x14]);
        assert_eq!(payload(&txs[11]), [0xAF]);
        assert!(display.is_display_on());
    }

    #[test]
    fn test_init_twice_is_byte_identical() {
        let mut display = test_display();
        display.init().unwrap();
        let first = display.interface.transactions.clone();
        display.interface.transactions.clear();
        display.init().unwrap();
        assert_eq!(first, display.interface.transactions);
    }

    #[test]
    fn test_init_failure_is_fatal() {
        let mut display = test_display();
        display.interface.fail_at = Some(4);

        let result = display.init();
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(display.interface.transactions.len(), 4);
        assert!(!display.is_display_on());
    }

    #[test]
    fn test_clear_seeks_and_zeroes_every_page() {
        let mut display = test_display();
        display.clear().unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(txs.len(), 16);
        for (page, pair) in txs.chunks(2).enumerate() {
            let page = page as u8;
            assert!(!is_data(&pair[0]));
            assert_eq!(payload(&pair[0]), [0xB0 | page, 0x00, 0x10]);

            assert!(is_data(&pair[1]));
            let data = payload(&pair[1]);
            assert_eq!(data.len(), 128);
            assert!(data.iter().all(|b| *b == 0));
        }
        assert_eq!(display.cursor().map(|c| c.page), Some(7));
    }

    #[test]
    fn test_clear_128x32_uses_four_pages() {
        let mut display = test_display_with(Builder::new().dimensions(Dimensions::SIZE_128X32));
        display.clear().unwrap();
        assert_eq!(display.interface.transactions.len(), 8);
    }

    #[test]
    fn test_clear_splits_bursts_to_interface_limit() {
        let mut display = test_display();
        display.interface.max_payload = 32;
        display.clear().unwrap();

        let txs = &display.interface.transactions;
        // Each page: one seek plus four 32-byte bursts
        assert_eq!(txs.len(), 8 * 5);
        assert_eq!(payload(&txs[1]).len(), 32);
    }

    #[test]
    fn test_write_single_page_slice() {
        let mut display = test_display();
        let mut buf = alloc::vec![0xAAu8; 24];
        buf[16..20].fill(0xFF);
        buf[20..24].fill(0x00);

        display.write(&buf, PageRegion::new(2, 1, 0, 8)).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(txs.len(), 2);
        assert_eq!(payload(&txs[0]), [0xB2, 0x00, 0x10]);
        assert!(is_data(&txs[1]));
        assert_eq!(
            payload(&txs[1]),
            [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            controls(&txs[1]),
            [0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x40]
        );
    }

    #[test]
    fn test_write_reseeks_each_page() {
        let mut display = test_display();
        let buf: Vec<u8> = (0..64u8).collect();

        display.write(&buf, PageRegion::new(1, 3, 0x25, 16)).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(txs.len(), 6);
        for (i, pair) in txs.chunks(2).enumerate() {
            let page = 1 + i;
            assert_eq!(payload(&pair[0]), [0xB0 | page as u8, 0x05, 0x12]);
            assert_eq!(payload(&pair[1]), &buf[page * 16..page * 16 + 16]);
        }
        assert_eq!(
            display.cursor(),
            Some(Cursor {
                page: 3,
                column: 0x35
            })
        );
    }

    #[test]
    fn test_write_buffer_too_small() {
        let mut display = test_display();
        let buf = [0u8; 10];
        let result = display.write(&buf, PageRegion::new(1, 1, 0, 8));
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 16,
                provided: 10
            })
        ));
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_write_burst_too_large() {
        let mut display = test_display();
        display.interface.max_payload = 16;
        let buf = [0u8; 32];
        let result = display.write(&buf, PageRegion::new(0, 1, 0, 32));
        assert!(matches!(
            result,
            Err(Error::BufferTooLarge {
                provided: 32,
                max: 16
            })
        ));
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_write_empty_region_sends_nothing() {
        let mut display = test_display();
        display.write(&[], PageRegion::new(0, 0, 0, 8)).unwrap();
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_write_frame() {
        let mut display = test_display_with(Builder::new().dimensions(Dimensions::SIZE_128X32));
        let frame = alloc::vec![0x81u8; Dimensions::SIZE_128X32.buffer_size()];
        display.write_frame(&frame).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(txs.len(), 8);
        assert!(payload(&txs[7]).iter().all(|b| *b == 0x81));
    }

    #[test]
    fn test_seek_masks_page_by_default() {
        let mut display = test_display();
        display.seek(9, 0x7F).unwrap();
        assert_eq!(
            payload(&display.interface.transactions[0]),
            [0xB1, 0x0F, 0x17]
        );
    }

    #[test]
    fn test_strict_mode_rejects_out_of_range() {
        let mut display = test_display_with(
            Builder::new()
                .dimensions(Dimensions::SIZE_128X32)
                .address_check(AddressCheck::Strict),
        );
        assert!(matches!(
            display.seek(4, 0),
            Err(Error::AddressOutOfRange { page: 4, column: 0 })
        ));

        let buf = [0u8; 512];
        let result = display.write(&buf, PageRegion::new(2, 3, 0, 8));
        assert!(matches!(
            result,
            Err(Error::AddressOutOfRange { page: 4, column: 7 })
        ));
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_cursor_lost_after_failed_burst() {
        let mut display = test_display();
        display.interface.fail_at = Some(1);
        let buf = [0u8; 8];

        let result = display.write(&buf, PageRegion::new(0, 1, 0, 8));
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(display.cursor(), None);
    }

    #[test]
    fn test_unflagged_policy() {
        let mut display = test_display_with(
            Builder::new()
                .dimensions(Dimensions::SIZE_128X64)
                .continuation_policy(ContinuationPolicy::Unflagged),
        );
        display.set_contrast(0x10).unwrap();
        assert_eq!(
            display.interface.transactions[0],
            [0x00, 0x81, 0x00, 0x10]
        );
    }

    #[test]
    fn test_horizontal_mode_write_uses_window() {
        let mut display = test_display();
        display
            .set_addressing_mode(AddressingMode::Horizontal)
            .unwrap();
        let buf: Vec<u8> = (0..8u8).collect();

        display.write(&buf, PageRegion::new(0, 2, 10, 4)).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(payload(&txs[0]), [0x20, 0x00]);
        assert_eq!(payload(&txs[1]), [0x21, 10, 13]);
        assert_eq!(payload(&txs[2]), [0x22, 0, 1]);
        assert_eq!(payload(&txs[3]), [0, 1, 2, 3]);
        assert_eq!(payload(&txs[4]), [4, 5, 6, 7]);
        assert_eq!(display.cursor(), None);
    }

    #[test]
    fn test_window_is_clamped_to_display() {
        let mut display = test_display();
        display
            .set_addressing_mode(AddressingMode::Horizontal)
            .unwrap();
        let buf = [0u8; 16];

        display.write(&buf, PageRegion::new(0, 1, 120, 16)).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(payload(&txs[1]), [0x21, 120, 127]);
        assert_eq!(payload(&txs[2]), [0x22, 0, 0]);
    }

    #[test]
    fn test_vertical_mode_write_is_column_major() {
        let mut display = test_display();
        display.set_addressing_mode(AddressingMode::Vertical).unwrap();
        let buf: Vec<u8> = (0..6u8).collect();

        display.write(&buf, PageRegion::new(0, 2, 0, 3)).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(payload(&txs[0]), [0x20, 0x01]);
        assert_eq!(payload(&txs[3]), [0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_clear_in_horizontal_mode() {
        let mut display = test_display();
        display
            .set_addressing_mode(AddressingMode::Horizontal)
            .unwrap();
        display.clear().unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(payload(&txs[1]), [0x21, 0, 127]);
        assert_eq!(payload(&txs[2]), [0x22, 0, 7]);
        assert_eq!(txs.len(), 3 + 8);
    }

    #[test]
    fn test_fundamental_commands() {
        let mut display = test_display();
        display.set_entire_display_on(true).unwrap();
        display.set_inverted(true).unwrap();
        display.set_display_on(false).unwrap();
        display.nop().unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(payload(&txs[0]), [0xA5]);
        assert_eq!(payload(&txs[1]), [0xA7]);
        assert_eq!(payload(&txs[2]), [0xAE]);
        assert_eq!(payload(&txs[3]), [0xE3]);
        assert!(!display.is_display_on());
    }

    #[test]
    fn test_scroll_commands() {
        let mut display = test_display();
        display
            .setup_horizontal_scroll(&HorizontalScroll::default())
            .unwrap();
        display.activate_scroll().unwrap();
        display.deactivate_scroll().unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(
            payload(&txs[0]),
            [0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF]
        );
        assert_eq!(payload(&txs[1]), [0x2F]);
        assert_eq!(payload(&txs[2]), [0x2E]);
    }

    #[test]
    fn test_set_rotation_updates_config() {
        let mut display = test_display();
        display.set_rotation(Rotation::Rotate180).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(payload(&txs[0]), [0xA0]);
        assert_eq!(payload(&txs[1]), [0xC0]);
        assert_eq!(display.config().rotation, Rotation::Rotate180);
    }

    #[test]
    fn test_timing_commands() {
        let mut display = test_display();
        display.set_precharge_period(1, 15).unwrap();
        display.set_vcomh_deselect(VcomhLevel::V083).unwrap();
        display.set_clock(0, 15).unwrap();

        let txs = &display.interface.transactions;
        assert_eq!(payload(&txs[0]), [0xD9, 0xF1]);
        assert_eq!(payload(&txs[1]), [0xDB, 0x30]);
        assert_eq!(payload(&txs[2]), [0xD5, 0xF0]);
    }

    #[test]
    fn test_read_status() {
        let mut display = test_display();
        display.interface.status = 0x40;
        let status = display.read_status().unwrap();
        assert!(status.is_display_off());
    }

    #[test]
    fn test_init_wire_bytes_over_i2c() {
        use crate::interface::I2cInterface;
        use alloc::vec;
        use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

        let addr = crate::interface::i2c_address(1);
        let expectations = [
            I2cTransaction::write(addr, vec![0x80, 0xA8, 0x00, 0x3F]),
            I2cTransaction::write(addr, vec![0x80, 0xD3, 0x00, 0x00]),
            I2cTransaction::write(addr, vec![0x00, 0x40]),
            I2cTransaction::write(addr, vec![0x00, 0xA1]),
            I2cTransaction::write(addr, vec![0x00, 0xC8]),
            I2cTransaction::write(addr, vec![0x80, 0xDA, 0x00, 0x32]),
            I2cTransaction::write(addr, vec![0x80, 0x81, 0x00, 0x7F]),
            I2cTransaction::write(addr, vec![0x00, 0xA4]),
            I2cTransaction::write(addr, vec![0x00, 0xA6]),
            I2cTransaction::write(addr, vec![0x80, 0xD5, 0x00, 0x80]),
            I2cTransaction::write(addr, vec![0x80, 0x8D, 0x00, 0x14]),
            I2cTransaction::write(addr, vec![0x00, 0xAF]),
        ];
        let interface = I2cInterface::new(I2cMock::new(&expectations), addr);
        let config = Builder::new()
            .dimensions(Dimensions::SIZE_128X64)
            .build()
            .unwrap();
        let mut display = Display::new(interface, config);

        assert!(display.init().is_ok());
        display.release().release().done();
    }
}
