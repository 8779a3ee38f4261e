//! Controller bring-up sequence
//!
//! [`InitSequence`] holds the ordered configuration commands that take the
//! SSD1306 from reset to a lit panel. Each step is one command transaction.
//! The order matters (the charge pump must be set before display on), and
//! the whole list is deterministic for a given [`Config`], so replaying it
//! produces the same bytes.
//!
//! | Step | Command | Default |
//! |------|---------|---------|
//! | 1 | Multiplex ratio (`0xA8`) | rows - 1 |
//! | 2 | Display offset (`0xD3`) | 0 |
//! | 3 | Display start line (`0x40`) | 0 |
//! | 4 | Segment re-map (`0xA0/0xA1`) | from rotation |
//! | 5 | COM scan direction (`0xC0/0xC8`) | from rotation |
//! | 6 | COM pins configuration (`0xDA`) | alternative, remapped |
//! | 7 | Contrast (`0x81`) | 0x7F |
//! | 8 | Entire display follows RAM (`0xA4`) | |
//! | 9 | Normal display (`0xA6`) | |
//! | 10 | Clock divide / oscillator (`0xD5`) | 0x80 |
//! | 11 | Charge pump (`0x8D`) | enabled |
//! | 12 | Display on (`0xAF`) | |

use crate::command::{
    CHARGE_PUMP, CHARGE_PUMP_DISABLE, CHARGE_PUMP_ENABLE, DISPLAY_ON, ENTIRE_DISPLAY_RESUME,
    NORMAL_DISPLAY, SET_CLOCK_DIV, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_MULTIPLEX_RATIO, SET_START_LINE,
};
use crate::config::Config;
use crate::rotation::orientation_commands;

/// Number of steps in the bring-up sequence
pub const INIT_STEP_COUNT: usize = 12;

/// One command transaction of the bring-up sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitStep {
    name: &'static str,
    bytes: [u8; 2],
    len: usize,
}

impl InitStep {
    const fn single(name: &'static str, opcode: u8) -> Self {
        Self {
            name,
            bytes: [opcode, 0],
            len: 1,
        }
    }

    const fn with_param(name: &'static str, opcode: u8, param: u8) -> Self {
        Self {
            name,
            bytes: [opcode, param],
            len: 2,
        }
    }

    /// Human-readable step name, used for logging
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Command bytes (opcode followed by its parameter, if any)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// COM pins hardware configuration byte
pub const fn com_pins_byte(alternative: bool, left_right_remap: bool) -> u8 {
    0x02 | ((alternative as u8) << 4) | ((left_right_remap as u8) << 5)
}

/// Clock divide ratio / oscillator frequency byte
pub const fn clock_byte(divide: u8, oscillator: u8) -> u8 {
    ((oscillator & 0x0F) << 4) | (divide & 0x0F)
}

/// Charge pump parameter byte
pub const fn charge_pump_byte(enabled: bool) -> u8 {
    if enabled {
        CHARGE_PUMP_ENABLE
    } else {
        CHARGE_PUMP_DISABLE
    }
}

/// The ordered bring-up command list for one configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitSequence {
    steps: [InitStep; INIT_STEP_COUNT],
}

impl InitSequence {
    /// Build the sequence from `config`
    pub fn new(config: &Config) -> Self {
        let (segment_remap, com_scan) = orientation_commands(config.rotation);
        let mux = config.dimensions.rows.saturating_sub(1);

        Self {
            steps: [
                InitStep::with_param("multiplex ratio", SET_MULTIPLEX_RATIO, mux),
                InitStep::with_param(
                    "display offset",
                    SET_DISPLAY_OFFSET,
                    config.display_offset & 0x3F,
                ),
                InitStep::single("start line", SET_START_LINE | (config.start_line & 0x3F)),
                InitStep::single("segment remap", segment_remap),
                InitStep::single("COM scan direction", com_scan),
                InitStep::with_param(
                    "COM pins",
                    SET_COM_PINS,
                    com_pins_byte(config.com_pins_alternative, config.com_left_right_remap),
                ),
                InitStep::with_param("contrast", SET_CONTRAST, config.contrast),
                InitStep::single("entire display resume", ENTIRE_DISPLAY_RESUME),
                InitStep::single("normal display", NORMAL_DISPLAY),
                InitStep::with_param(
                    "clock",
                    SET_CLOCK_DIV,
                    clock_byte(config.clock_divide, config.oscillator_frequency),
                ),
                InitStep::with_param(
                    "charge pump",
                    CHARGE_PUMP,
                    charge_pump_byte(config.charge_pump),
                ),
                InitStep::single("display on", DISPLAY_ON),
            ],
        }
    }

    /// Steps in execution order
    pub fn steps(&self) -> &[InitStep] {
        &self.steps
    }
}
