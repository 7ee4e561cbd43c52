//! Display RAM layout
//!
//! Maps the four digit cells and the colon onto HT16K33 display RAM
//! addresses. Modules differ in how the common lines are wired, so the
//! layout is part of the [`Config`](crate::Config).
//!
//! ## Layouts
//!
//! - **Packed**: digits at RAM 0-3, colon at RAM 4 (5 bytes)
//! - **Backpack**: Adafruit 0.56" backpack, digits at RAM 0, 2, 6, 8 and the
//!   colon at RAM 4; all 16 RAM bytes are written on commit
//!
//! ## Example
//!
//! ```
//! use ht16k33_segment::RamLayout;
//!
//! assert_eq!(RamLayout::Packed.digit_address(3), Some(3));
//! assert_eq!(RamLayout::Backpack.digit_address(2), Some(6));
//! assert_eq!(RamLayout::Backpack.colon_address(), 4);
//! assert_eq!(RamLayout::Backpack.digit_address(4), None);
//! ```

use crate::command::DISPLAY_RAM_SIZE;

/// Number of digit cells on the display
pub const DIGIT_COUNT: usize = 4;

/// Value of the colon cell when the colon is lit
pub const COLON_SEGMENT: u8 = 0x02;

/// Digit RAM addresses for the Adafruit backpack wiring
const BACKPACK_DIGITS: [u8; DIGIT_COUNT] = [0, 2, 6, 8];

/// Display RAM layout of the module
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RamLayout {
    /// Digits in RAM 0-3, colon in RAM 4
    #[default]
    Packed,
    /// Adafruit 0.56" 4-digit backpack wiring
    Backpack,
}

impl RamLayout {
    /// RAM address of the digit at `position`, or `None` past the last digit
    pub fn digit_address(self, position: usize) -> Option<u8> {
        if position >= DIGIT_COUNT {
            return None;
        }
        match self {
            Self::Packed => Some(position as u8),
            Self::Backpack => Some(BACKPACK_DIGITS[position]),
        }
    }

    /// RAM address of the colon cell
    pub fn colon_address(self) -> u8 {
        4
    }

    /// Number of RAM bytes written on each commit
    pub fn ram_len(self) -> usize {
        match self {
            Self::Packed => DIGIT_COUNT + 1,
            Self::Backpack => DISPLAY_RAM_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_packed() {
        assert_eq!(RamLayout::default(), RamLayout::Packed);
    }

    #[test]
    fn test_packed_addresses_are_sequential() {
        let layout = RamLayout::Packed;
        for position in 0..DIGIT_COUNT {
            assert_eq!(layout.digit_address(position), Some(position as u8));
        }
        assert_eq!(layout.colon_address(), 4);
        assert_eq!(layout.ram_len(), 5);
    }

    #[test]
    fn test_backpack_skips_odd_rows() {
        let layout = RamLayout::Backpack;
        assert_eq!(layout.digit_address(0), Some(0));
        assert_eq!(layout.digit_address(1), Some(2));
        assert_eq!(layout.digit_address(2), Some(6));
        assert_eq!(layout.digit_address(3), Some(8));
        assert_eq!(layout.ram_len(), DISPLAY_RAM_SIZE);
    }

    #[test]
    fn test_addresses_fit_in_written_range() {
        for layout in [RamLayout::Packed, RamLayout::Backpack] {
            for position in 0..DIGIT_COUNT {
                let address = layout.digit_address(position).unwrap_or(u8::MAX);
                assert!((address as usize) < layout.ram_len());
                assert_ne!(address, layout.colon_address());
            }
            assert!((layout.colon_address() as usize) < layout.ram_len());
        }
    }

    #[test]
    fn test_out_of_range_position() {
        assert_eq!(RamLayout::Packed.digit_address(4), None);
        assert_eq!(RamLayout::Backpack.digit_address(usize::MAX), None);
    }
}
