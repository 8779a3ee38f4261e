//! Hardware scrolling parameters
//!
//! The SSD1306 can scroll a band of pages continuously without further bus
//! traffic. A scroll is configured with a setup command, started with
//! [`ACTIVATE_SCROLL`](crate::command::ACTIVATE_SCROLL) and stopped with
//! [`DEACTIVATE_SCROLL`](crate::command::DEACTIVATE_SCROLL).
//!
//! Page and interval fields are 3 bits wide; wider values are masked.

use crate::command::{
    LEFT_HORIZONTAL_SCROLL, RIGHT_HORIZONTAL_SCROLL, SET_VERTICAL_SCROLL_AREA,
    VERTICAL_LEFT_HORIZONTAL_SCROLL, VERTICAL_RIGHT_HORIZONTAL_SCROLL,
};

/// Horizontal scroll direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves right
    #[default]
    Right,
    /// Content moves left
    Left,
}

/// Time between scroll steps, in frames
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameInterval {
    /// 2 frames
    Frames2 = 0b111,
    /// 3 frames
    Frames3 = 0b100,
    /// 4 frames
    Frames4 = 0b101,
    /// 5 frames
    #[default]
    Frames5 = 0b000,
    /// 25 frames
    Frames25 = 0b110,
    /// 64 frames
    Frames64 = 0b001,
    /// 128 frames
    Frames128 = 0b010,
    /// 256 frames
    Frames256 = 0b011,
}

/// Continuous horizontal scroll setup (0x26/0x27)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HorizontalScroll {
    /// Scroll direction
    pub direction: ScrollDirection,
    /// First page of the scrolled band
    pub start_page: u8,
    /// Last page of the scrolled band
    pub end_page: u8,
    /// Step interval
    pub interval: FrameInterval,
}

impl HorizontalScroll {
    /// Command bytes for this setup
    pub fn commands(&self) -> [u8; 7] {
        let opcode = match self.direction {
            ScrollDirection::Right => RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::Left => LEFT_HORIZONTAL_SCROLL,
        };
        [
            opcode,
            0x00,
            self.start_page & 0x07,
            self.interval as u8,
            self.end_page & 0x07,
            0x00,
            0xFF,
        ]
    }
}

/// Continuous vertical and horizontal scroll setup (0x29/0x2A)
///
/// Each step moves the band one column sideways and `vertical_offset` rows up.
/// The rows that move vertically are limited by [`VerticalScrollArea`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagonalScroll {
    /// Horizontal component direction
    pub direction: ScrollDirection,
    /// First page of the horizontally scrolled band
    pub start_page: u8,
    /// Last page of the horizontally scrolled band
    pub end_page: u8,
    /// Step interval
    pub interval: FrameInterval,
    /// Rows moved per step (0..=63)
    pub vertical_offset: u8,
}

impl DiagonalScroll {
    /// Command bytes for this setup
    pub fn commands(&self) -> [u8; 6] {
        let opcode = match self.direction {
            ScrollDirection::Right => VERTICAL_RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::Left => VERTICAL_LEFT_HORIZONTAL_SCROLL,
        };
        [
            opcode,
            0x00,
            self.start_page & 0x07,
            self.interval as u8,
            self.end_page & 0x07,
            self.vertical_offset & 0x3F,
        ]
    }
}

/// Vertical scroll area (0xA3)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerticalScrollArea {
    /// Rows in the fixed top area (0..=63)
    pub fixed_rows: u8,
    /// Rows in the scroll area (0..=127)
    pub scroll_rows: u8,
}

impl VerticalScrollArea {
    /// Command bytes for this area
    pub fn commands(&self) -> [u8; 3] {
        [
            SET_VERTICAL_SCROLL_AREA,
            self.fixed_rows & 0x3F,
            self.scroll_rows & 0x7F,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_scroll_bytes() {
        let scroll = HorizontalScroll {
            direction: ScrollDirection::Left,
            start_page: 0,
            end_page: 7,
            interval: FrameInterval::Frames2,
        };
        assert_eq!(
            scroll.commands(),
            [0x27, 0x00, 0x00, 0x07, 0x07, 0x00, 0xFF]
        );
    }

    #[test]
    fn test_horizontal_scroll_masks_pages() {
        let scroll = HorizontalScroll {
            start_page: 9,
            end_page: 0xFF,
            ..HorizontalScroll::default()
        };
        let cmds = scroll.commands();
        assert_eq!(cmds[0], 0x26);
        assert_eq!(cmds[2], 0x01);
        assert_eq!(cmds[4], 0x07);
    }

    #[test]
    fn test_diagonal_scroll_bytes() {
        let scroll = DiagonalScroll {
            direction: ScrollDirection::Right,
            start_page: 1,
            end_page: 3,
            interval: FrameInterval::Frames64,
            vertical_offset: 0x41,
        };
        assert_eq!(scroll.commands(), [0x29, 0x00, 0x01, 0x01, 0x03, 0x01]);
    }

    #[test]
    fn test_vertical_scroll_area_masks() {
        let area = VerticalScrollArea {
            fixed_rows: 0xFF,
            scroll_rows: 0xFF,
        };
        assert_eq!(area.commands(), [0xA3, 0x3F, 0x7F]);
    }
}
