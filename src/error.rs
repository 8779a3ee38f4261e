//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors, including
//!   running out of NAK retries
//!
//! Bus NAKs are retried inside the interface and never reach this layer unless
//! the retry policy gives up.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(72, 128); // Too many rows
//! assert!(result.is_err());
//! ```

use crate::addressing::AddressError;
use crate::config::{MAX_COMMONS, MAX_SEGMENTS};
use crate::interface::DisplayInterface;
use crate::packet::PacketError;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C bus, or retries exhausted)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    /// A failure in the middle of a data burst leaves the controller's write
    /// cursor unknown; seek again before the next write.
    Interface(I::Error),
    /// Payload does not fit in a single transaction
    ///
    /// Split the buffer into smaller bursts; nothing is truncated.
    BufferTooLarge {
        /// Payload length requested
        provided: usize,
        /// Largest payload accepted by the interface
        max: usize,
    },
    /// Buffer is too small for the requested region
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Page or column outside the display
    ///
    /// Only reported in [`AddressCheck::Strict`](crate::AddressCheck::Strict) mode;
    /// otherwise addresses are masked to the register width.
    AddressOutOfRange {
        /// Requested page
        page: u8,
        /// Requested column
        column: u8,
    },
}

impl<I: DisplayInterface> From<PacketError> for Error<I> {
    fn from(e: PacketError) -> Self {
        match e {
            PacketError::BufferTooLarge { provided, max } => Self::BufferTooLarge { provided, max },
        }
    }
}

impl<I: DisplayInterface> From<AddressError> for Error<I> {
    fn from(e: AddressError) -> Self {
        match e {
            AddressError::OutOfRange { page, column } => Self::AddressOutOfRange { page, column },
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooLarge { provided, max } => {
                write!(
                    f,
                    "Buffer too large: {provided} bytes, max {max} per transaction"
                )
            }
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::AddressOutOfRange { page, column } => {
                write!(f, "Address out of range: page={page}, column={column}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u8,
        /// Number of columns (width) requested
        cols: u8,
    },
    /// A register value does not fit its field
    ValueOutOfRange {
        /// Builder field name
        field: &'static str,
        /// Value provided
        value: u8,
        /// Largest accepted value
        max: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_COMMONS}x{MAX_SEGMENTS}, rows must be a multiple of 8, min 16)"
            ),
            Self::ValueOutOfRange { field, value, max } => {
                write!(f, "Value out of range for {field}: {value} (max {max})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
