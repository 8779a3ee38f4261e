//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`] struct
//! for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode requires:
//! - I2C bus (SDA + SCL)
//! - SA0 strapped low (address `0x3C`) or high (address `0x3D`)
//!
//! ## NAK handling
//!
//! A write that the controller does not acknowledge is retried according to
//! the interface's [`RetryPolicy`]. Once the policy gives up the write fails
//! with [`InterfaceError::Timeout`]. Any other bus error is returned at once.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_i2c::{i2c_address, DisplayInterface, I2cInterface, RetryPolicy};
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
//! // Create interface for a panel with SA0 tied low
//! let mut interface = I2cInterface::new(MockI2c, i2c_address(0));
//! interface.set_retry_policy(RetryPolicy::MaxAttempts(10));
//!
//! // Send one framed command (control byte 0x00, display on)
//! let _ = interface.write(&[0x00, 0xAF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::packet::MAX_PAYLOAD_LEN;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Base 7-bit address of the SSD1306
pub const I2C_ADDRESS_BASE: u8 = 0x3C;

/// Default number of write attempts before reporting a timeout
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000;

/// 7-bit device address for the given SA0 strap
///
/// `0x3C` is used by 128x32 modules and `0x3D` by 128x64 modules.
/// Only bit 0 of `sa0` is used.
///
/// ```
/// use ssd1306_i2c::i2c_address;
///
/// assert_eq!(i2c_address(0), 0x3C);
/// assert_eq!(i2c_address(1), 0x3D);
/// ```
pub const fn i2c_address(sa0: u8) -> u8 {
    I2C_ADDRESS_BASE | (sa0 & 0x01)
}

/// Trait for the transport to the SSD1306 controller
///
/// This trait abstracts over different bus implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport that can write already-framed packets.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. If you need
/// custom behavior (e.g., a shared bus wrapper with its own locking),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write one framed packet as a single bus transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be completed.
    #[allow(clippy::type_complexity)]
    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Largest payload (before framing) accepted in one transaction
    fn max_payload_len(&self) -> usize {
        MAX_PAYLOAD_LEN
    }
}

/// Optional read capability
///
/// The SSD1306 answers a read with its status byte. Not every board wires
/// this up, so it is a separate trait.
pub trait ReadInterface: DisplayInterface {
    /// Read bytes from the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be completed.
    fn read(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error>;
}

/// How often a NAKed transaction is retried
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Retry forever
    ///
    /// A controller that never acknowledges blocks the caller indefinitely.
    Unbounded,
    /// Give up after this many attempts in total (0 is treated as 1)
    MaxAttempts(u32),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::MaxAttempts(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Errors that can occur at the interface level
///
/// Generic over the I2C error type.
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error other than a NAK
    I2c(I2cErr),
    /// The controller kept NAKing until the retry policy gave up
    Timeout {
        /// Attempts made
        attempts: u32,
    },
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::Timeout { attempts } => {
                write!(f, "Timeout: no acknowledge after {attempts} attempts")
            }
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// I2C interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] and [`ReadInterface`] for embedded-hal v1.0 I2C.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_i2c::{Builder, Dimensions, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::new(MockI2c, 0x3D);
///
/// // Use with Display
/// # let config = match Builder::new().dimensions(Dimensions::SIZE_128X64).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    /// NAK retry policy
    retry_policy: RetryPolicy,
    /// Largest payload per transaction
    max_payload_len: usize,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2cInterface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - 7-bit device address, see [`i2c_address`]
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            retry_policy: RetryPolicy::default(),
            max_payload_len: MAX_PAYLOAD_LEN,
        }
    }

    /// Set the NAK retry policy
    ///
    /// Default is [`RetryPolicy::MaxAttempts`] with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn set_retry_policy(&mut self, policy: RetryPolicy) -> &mut Self {
        self.retry_policy = policy;
        self
    }

    /// Get the current NAK retry policy
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Limit the payload per transaction
    ///
    /// For bus drivers with a small transfer buffer. Clamped to
    /// [`MAX_PAYLOAD_LEN`].
    pub fn set_max_payload_len(&mut self, len: usize) -> &mut Self {
        self.max_payload_len = len.min(MAX_PAYLOAD_LEN);
        self
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn with_retry<F>(&mut self, mut op: F) -> InterfaceResult<(), InterfaceError<I2C::Error>>
    where
        F: FnMut(&mut I2C, u8) -> Result<(), I2C::Error>,
    {
        let mut attempts = 0u32;

        loop {
            attempts = attempts.saturating_add(1);

            let e = match op(&mut self.i2c, self.address) {
                Ok(()) => return Ok(()),
                Err(e) => e,
            };

            if !matches!(e.kind(), ErrorKind::NoAcknowledge(_)) {
                return Err(InterfaceError::I2c(e));
            }

            if let RetryPolicy::MaxAttempts(max) = self.retry_policy {
                if attempts >= max.max(1) {
                    log::warn!(
                        "ssd1306 at {:#04x}: no acknowledge after {} attempts",
                        self.address,
                        attempts
                    );
                    return Err(InterfaceError::Timeout { attempts });
                }
            }

            log::trace!(
                "ssd1306 at {:#04x}: NAK, retrying (attempt {})",
                self.address,
                attempts
            );
        }
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.with_retry(|i2c, address| i2c.write(address, bytes))
    }

    fn max_payload_len(&self) -> usize {
        self.max_payload_len
    }
}

impl<I2C> ReadInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn read(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error> {
        self.with_retry(|i2c, address| i2c.read(address, buffer))
    }
}
