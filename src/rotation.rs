//! Orientation commands
//!
//! The SSD1306 flips the image in hardware with two independent registers:
//! the segment re-map (horizontal mirror) and the COM output scan direction
//! (vertical mirror). Setting both turns the image by 180 degrees.
//!
//! | Rotation | Segment re-map | COM scan |
//! |----------|----------------|----------|
//! | Rotate0 | `0xA1` (column 127 → SEG0) | `0xC8` (COM\[N-1\] → COM0) |
//! | Rotate180 | `0xA0` (column 0 → SEG0) | `0xC0` (COM0 → COM\[N-1\]) |
//!
//! Segment re-map only affects data written afterwards; rewrite the frame
//! after changing rotation.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{rotation::orientation_commands, Rotation};
//!
//! assert_eq!(orientation_commands(Rotation::Rotate0), (0xA1, 0xC8));
//! assert_eq!(orientation_commands(Rotation::Rotate180), (0xA0, 0xC0));
//! ```

use crate::command::{
    COM_SCAN_NORMAL, COM_SCAN_REMAPPED, SEGMENT_REMAP_NORMAL, SEGMENT_REMAP_REVERSED,
};
use crate::config::Rotation;

/// Segment re-map and COM scan direction opcodes for `rotation`
///
/// Returns `(segment_remap, com_scan)`.
pub fn orientation_commands(rotation: Rotation) -> (u8, u8) {
    match rotation {
        Rotation::Rotate0 => (SEGMENT_REMAP_REVERSED, COM_SCAN_REMAPPED),
        Rotation::Rotate180 => (SEGMENT_REMAP_NORMAL, COM_SCAN_NORMAL),
    }
}
