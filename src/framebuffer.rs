//! In-memory mirror of the display RAM
//!
//! The [`Framebuffer`] holds the four digit cells and the colon state. It is
//! mutated by the display setters and serialized into a single display RAM
//! write on commit.

use crate::command::{DISPLAY_RAM, DISPLAY_RAM_SIZE};
use crate::font::DECIMAL_POINT;
use crate::layout::{COLON_SEGMENT, DIGIT_COUNT, RamLayout};

/// Length of the largest commit: address byte plus the whole display RAM
pub const MAX_FRAME_LEN: usize = DISPLAY_RAM_SIZE + 1;

/// Digit cells and colon state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Framebuffer {
    cells: [u8; DIGIT_COUNT],
    colon: bool,
}

impl Framebuffer {
    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self {
            cells: [0; DIGIT_COUNT],
            colon: false,
        }
    }

    /// Store a raw glyph, ORing in the decimal point when requested
    ///
    /// Returns `false` without touching the buffer if `position` is not a
    /// digit cell.
    pub fn set(&mut self, position: usize, glyph: u8, decimal_point: bool) -> bool {
        let Some(cell) = self.cells.get_mut(position) else {
            return false;
        };
        *cell = if decimal_point {
            glyph | DECIMAL_POINT
        } else {
            glyph
        };
        true
    }

    /// Glyph stored at `position`
    pub fn get(&self, position: usize) -> Option<u8> {
        self.cells.get(position).copied()
    }

    /// All digit cells, left to right
    pub fn cells(&self) -> &[u8; DIGIT_COUNT] {
        &self.cells
    }

    /// Set the colon state
    pub fn set_colon(&mut self, on: bool) {
        self.colon = on;
    }

    /// Colon state
    pub fn colon(&self) -> bool {
        self.colon
    }

    /// Blank all digit cells, leaving the colon as is
    pub fn clear(&mut self) {
        self.cells = [0; DIGIT_COUNT];
    }

    /// Serialize into a display RAM write for `layout`
    ///
    /// Fills `frame` with the RAM base address followed by `layout.ram_len()`
    /// bytes and returns the used prefix, ready to send as one transaction.
    pub fn serialize<'a>(
        &self,
        layout: RamLayout,
        frame: &'a mut [u8; MAX_FRAME_LEN],
    ) -> &'a [u8] {
        let len = layout.ram_len() + 1;
        frame.fill(0);
        frame[0] = DISPLAY_RAM;

        let ram = &mut frame[1..len];
        for (position, glyph) in self.cells.iter().enumerate() {
            if let Some(address) = layout.digit_address(position) {
                ram[address as usize] = *glyph;
            }
        }
        if self.colon {
            ram[layout.colon_address() as usize] = COLON_SEGMENT;
        }

        &frame[..len]
    }
}
