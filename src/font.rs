//! Seven-segment font table
//!
//! Each glyph is a segment bitmask: bit 0 drives segment A, bit 6 segment G
//! and bit 7 the decimal point.
//!
//! ```text
//!     AAAA
//!    F    B
//!    F    B
//!     GGGG
//!    E    C
//!    E    C
//!     DDDD  DP
//! ```
//!
//! ## Example
//!
//! ```
//! use ht16k33_segment::font;
//!
//! assert_eq!(font::glyph_for_value(8), Some(0x7F));
//! assert_eq!(font::glyph_for_char('-'), Some(font::DASH));
//! assert_eq!(font::glyph_for_value(16), None);
//! ```

/// Segment A (top)
pub const SEGMENT_A: u8 = 0b0000_0001;
/// Segment B (top right)
pub const SEGMENT_B: u8 = 0b0000_0010;
/// Segment C (bottom right)
pub const SEGMENT_C: u8 = 0b0000_0100;
/// Segment D (bottom)
pub const SEGMENT_D: u8 = 0b0000_1000;
/// Segment E (bottom left)
pub const SEGMENT_E: u8 = 0b0001_0000;
/// Segment F (top left)
pub const SEGMENT_F: u8 = 0b0010_0000;
/// Segment G (middle)
pub const SEGMENT_G: u8 = 0b0100_0000;
/// Decimal point
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// All segments off
pub const BLANK: u8 = 0x00;
/// Middle bar only
pub const DASH: u8 = SEGMENT_G;
/// Small upper ring, used for temperatures
pub const DEGREE: u8 = SEGMENT_A | SEGMENT_B | SEGMENT_F | SEGMENT_G;

/// Hex digit glyphs, indexed by value
///
/// Letters use their lowercase shapes (`b` and `d` have no uppercase form on
/// seven segments).
pub const HEX_DIGITS: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x5F, // a
    0x7C, // b
    0x58, // c
    0x5E, // d
    0x7B, // e
    0x71, // f
];

/// Look up the glyph for a hex digit value (0-15)
///
/// Returns `None` for values above 15.
pub fn glyph_for_value(value: u8) -> Option<u8> {
    HEX_DIGITS.get(value as usize).copied()
}

/// Look up the glyph for a character
///
/// Accepts `0`-`9`, `a`-`f` in either case, space, `-` and `°`.
pub fn glyph_for_char(character: char) -> Option<u8> {
    match character {
        ' ' => Some(BLANK),
        '-' => Some(DASH),
        '°' => Some(DEGREE),
        _ => character
            .to_digit(16)
            .and_then(|value| glyph_for_value(value as u8)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_glyphs_use_expected_segments() {
        assert_eq!(
            HEX_DIGITS[0],
            SEGMENT_A | SEGMENT_B | SEGMENT_C | SEGMENT_D | SEGMENT_E | SEGMENT_F
        );
        assert_eq!(HEX_DIGITS[1], SEGMENT_B | SEGMENT_C);
        assert_eq!(HEX_DIGITS[8] | DECIMAL_POINT, 0xFF);
    }

    #[test]
    fn test_no_glyph_lights_decimal_point() {
        for glyph in HEX_DIGITS {
            assert_eq!(glyph & DECIMAL_POINT, 0);
        }
    }

    #[test]
    fn test_glyph_for_value_range() {
        assert_eq!(glyph_for_value(0), Some(0x3F));
        assert_eq!(glyph_for_value(15), Some(0x71));
        assert_eq!(glyph_for_value(16), None);
        assert_eq!(glyph_for_value(255), None);
    }

    #[test]
    fn test_glyph_for_char_is_case_insensitive() {
        assert_eq!(glyph_for_char('b'), glyph_for_char('B'));
        assert_eq!(glyph_for_char('F'), Some(HEX_DIGITS[15]));
        assert_eq!(glyph_for_char('7'), Some(HEX_DIGITS[7]));
    }

    #[test]
    fn test_glyph_for_char_symbols() {
        assert_eq!(glyph_for_char(' '), Some(BLANK));
        assert_eq!(glyph_for_char('-'), Some(0x40));
        assert_eq!(glyph_for_char('°'), Some(0x63));
        assert_eq!(glyph_for_char('g'), None);
        assert_eq!(glyph_for_char('.'), None);
    }
}
