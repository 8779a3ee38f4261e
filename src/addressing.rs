//! Addressing mode and write-cursor tracking
//!
//! The SSD1306 cannot report its RAM write cursor, so the driver mirrors it
//! here. In [`AddressingMode::Page`] the cursor is moved with three
//! single-byte commands:
//!
//! | Byte | Field |
//! |------|-------|
//! | `0xB0 \| (page & 0x07)` | page start |
//! | `0x00 \| (column & 0x0F)` | column start, low nibble |
//! | `0x10 \| ((column >> 4) & 0x0F)` | column start, high nibble |
//!
//! Data writes then advance the column only; the page never changes on its
//! own, so every page of a multi-page write needs its own seek.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::addressing::seek_commands;
//!
//! assert_eq!(seek_commands(2, 0x35), [0xB2, 0x05, 0x13]);
//! ```

use crate::command::{SET_HIGHER_COLUMN, SET_LOWER_COLUMN, SET_PAGE_START};
use crate::config::{Dimensions, MAX_SEGMENTS};

/// Memory addressing mode (parameter of command 0x20)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressingMode {
    /// Column advances, then wraps to the next page inside the window
    Horizontal = 0x00,
    /// Page advances, then wraps to the next column inside the window
    Vertical = 0x01,
    /// Column advances within a fixed page (reset default)
    #[default]
    Page = 0x02,
}

/// Handling of page/column values outside the display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressCheck {
    /// Mask to the register field width, as the controller does
    #[default]
    Mask,
    /// Reject with [`AddressError::OutOfRange`]
    Strict,
}

/// Errors raised while resolving an address
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// Page or column outside the configured dimensions
    OutOfRange {
        /// Requested page
        page: u8,
        /// Requested column
        column: u8,
    },
}

impl core::fmt::Display for AddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { page, column } => {
                write!(f, "Address out of range: page={page}, column={column}")
            }
        }
    }
}

impl core::error::Error for AddressError {}

/// Position of the controller's RAM write cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Page (0..=7)
    pub page: u8,
    /// Column
    pub column: u8,
}

/// Page-mode seek as three command bytes
///
/// Values are masked to their register fields; nothing is rejected here.
pub const fn seek_commands(page: u8, column: u8) -> [u8; 3] {
    [
        SET_PAGE_START | (page & 0x07),
        SET_LOWER_COLUMN | (column & 0x0F),
        SET_HIGHER_COLUMN | ((column >> 4) & 0x0F),
    ]
}

/// Driver-side mirror of the controller's addressing registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddressingState {
    mode: AddressingMode,
    cursor: Option<Cursor>,
}

impl AddressingState {
    /// State after controller reset: page mode, cursor unknown
    pub const fn new() -> Self {
        Self {
            mode: AddressingMode::Page,
            cursor: None,
        }
    }

    /// Active addressing mode
    pub fn mode(&self) -> AddressingMode {
        self.mode
    }

    /// Record a mode change; the cursor becomes unknown
    pub fn set_mode(&mut self, mode: AddressingMode) {
        self.mode = mode;
        self.cursor = None;
    }

    /// Tracked cursor, if known
    ///
    /// Only page mode tracks the cursor.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Resolve a seek target against the display
    ///
    /// With [`AddressCheck::Mask`] the page wraps at 8, matching the 3-bit
    /// register. With [`AddressCheck::Strict`] anything outside `dims` is an
    /// error.
    pub fn resolve(
        &self,
        page: u8,
        column: u8,
        check: AddressCheck,
        dims: &Dimensions,
    ) -> Result<Cursor, AddressError> {
        let in_range = page < dims.pages() && column < dims.cols;
        if !in_range {
            match check {
                AddressCheck::Strict => return Err(AddressError::OutOfRange { page, column }),
                AddressCheck::Mask => {
                    log::warn!("seek to page {page}, column {column} is outside the display; masking");
                }
            }
        }
        Ok(Cursor {
            page: page & 0x07,
            column,
        })
    }

    /// Record a completed seek
    pub fn moved_to(&mut self, cursor: Cursor) {
        if self.mode == AddressingMode::Page {
            self.cursor = Some(cursor);
        }
    }

    /// Record `written` data bytes landing at the cursor
    ///
    /// The column wraps at the end of the RAM row; the page stays put.
    pub fn advance(&mut self, written: usize) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.column = ((cursor.column as usize + written) % MAX_SEGMENTS as usize) as u8;
        }
    }

    /// Forget the cursor (after a failed transfer)
    pub fn invalidate(&mut self) {
        self.cursor = None;
    }
}
