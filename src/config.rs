//! Display configuration types and builder

use crate::addressing::AddressCheck;
pub use crate::error::BuilderError;
use crate::packet::ContinuationPolicy;

/// Maximum segment outputs (columns) supported by the SSD1306
pub const MAX_SEGMENTS: u8 = 128;

/// Maximum common outputs (rows) supported by the SSD1306
pub const MAX_COMMONS: u8 = 64;

/// Pixel rows per page; one RAM byte covers a page-high column slice
pub const PAGE_HEIGHT: u8 = 8;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to COM outputs)
    pub rows: u8,
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub cols: u8,
}

impl Dimensions {
    /// 128x64 panel
    pub const SIZE_128X64: Self = Self {
        rows: 64,
        cols: 128,
    };

    /// 128x32 panel
    pub const SIZE_128X32: Self = Self {
        rows: 32,
        cols: 128,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows < 16 or rows > MAX_COMMONS (the multiplex ratio floor is 16)
    /// - rows % 8 != 0 (must fill whole pages)
    /// - cols == 0 or cols > MAX_SEGMENTS
    pub fn new(rows: u8, cols: u8) -> Result<Self, BuilderError> {
        if !(16..=MAX_COMMONS).contains(&rows) || rows % PAGE_HEIGHT != 0 {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_SEGMENTS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        self.rows / PAGE_HEIGHT
    }

    /// Calculate required framebuffer size in bytes (pages × columns)
    pub fn buffer_size(&self) -> usize {
        self.pages() as usize * self.cols as usize
    }
}

/// Display rotation relative to native orientation
///
/// The controller can only mirror both axes, so 0 and 180 degrees are the
/// two orientations available without a software transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Column 127 on SEG0, COM scan remapped
    #[default]
    Rotate0,
    /// Column 0 on SEG0, COM scan normal
    Rotate180,
}

/// Display configuration
///
/// Holds everything written during initialization plus the framing and
/// addressing policies. Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Contrast level
    pub contrast: u8,
    /// Vertical shift by COM (0..=63)
    pub display_offset: u8,
    /// RAM row mapped to the first display line (0..=63)
    pub start_line: u8,
    /// Alternative COM pin configuration
    pub com_pins_alternative: bool,
    /// COM left/right remap
    pub com_left_right_remap: bool,
    /// Display clock divide ratio minus one (0..=15)
    pub clock_divide: u8,
    /// Oscillator frequency setting (0..=15)
    pub oscillator_frequency: u8,
    /// Whether the internal charge pump is enabled
    pub charge_pump: bool,
    /// Control-byte continuation policy
    pub continuation_policy: ContinuationPolicy,
    /// Handling of out-of-range page/column addresses
    pub address_check: AddressCheck,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ssd1306_i2c::{Builder, Dimensions, Rotation};
///
/// let config = match Builder::new()
///     .dimensions(Dimensions::SIZE_128X32)
///     .rotation(Rotation::Rotate180)
///     .contrast(0xCF)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    dimensions: Option<Dimensions>,
    rotation: Rotation,
    contrast: u8,
    display_offset: u8,
    start_line: u8,
    com_pins_alternative: bool,
    com_left_right_remap: bool,
    clock_divide: u8,
    oscillator_frequency: u8,
    charge_pump: bool,
    continuation_policy: ContinuationPolicy,
    address_check: AddressCheck,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            // Mid contrast
            contrast: 0x7F,
            display_offset: 0,
            start_line: 0,
            // Alternative COM pins with left/right remap (panel-specific, override as needed)
            com_pins_alternative: true,
            com_left_right_remap: true,
            // Divide ratio 1, oscillator 8: reset value
            clock_divide: 0,
            oscillator_frequency: 8,
            charge_pump: true,
            continuation_policy: ContinuationPolicy::LastByteTerminates,
            address_check: AddressCheck::Mask,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set display offset (0..=63)
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set display start line (0..=63)
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value;
        self
    }

    /// Select alternative (true) or sequential (false) COM pin configuration
    pub fn com_pins_alternative(mut self, value: bool) -> Self {
        self.com_pins_alternative = value;
        self
    }

    /// Enable COM left/right remap
    pub fn com_left_right_remap(mut self, value: bool) -> Self {
        self.com_left_right_remap = value;
        self
    }

    /// Set display clock divide ratio minus one (0..=15)
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set oscillator frequency (0..=15)
    pub fn oscillator_frequency(mut self, value: u8) -> Self {
        self.oscillator_frequency = value;
        self
    }

    /// Enable or disable the internal charge pump
    ///
    /// Disable only for panels with an external VCC supply.
    pub fn charge_pump(mut self, value: bool) -> Self {
        self.charge_pump = value;
        self
    }

    /// Set control-byte continuation policy
    pub fn continuation_policy(mut self, value: ContinuationPolicy) -> Self {
        self.continuation_policy = value;
        self
    }

    /// Set out-of-range address handling
    pub fn address_check(mut self, value: AddressCheck) -> Self {
        self.address_check = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// `BuilderError::InvalidDimensions` if they fail [`Dimensions::new`],
    /// or `BuilderError::ValueOutOfRange` if a register value does not fit
    /// its field.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dims = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let dimensions = Dimensions::new(dims.rows, dims.cols)?;
        check_range("display_offset", self.display_offset, 63)?;
        check_range("start_line", self.start_line, 63)?;
        check_range("clock_divide", self.clock_divide, 15)?;
        check_range("oscillator_frequency", self.oscillator_frequency, 15)?;

        Ok(Config {
            dimensions,
            rotation: self.rotation,
            contrast: self.contrast,
            display_offset: self.display_offset,
            start_line: self.start_line,
            com_pins_alternative: self.com_pins_alternative,
            com_left_right_remap: self.com_left_right_remap,
            clock_divide: self.clock_divide,
            oscillator_frequency: self.oscillator_frequency,
            charge_pump: self.charge_pump,
            continuation_policy: self.continuation_policy,
            address_check: self.address_check,
        })
    }
}

fn check_range(field: &'static str, value: u8, max: u8) -> Result<(), BuilderError> {
    if value > max {
        return Err(BuilderError::ValueOutOfRange { field, value, max });
    }
    Ok(())
}
