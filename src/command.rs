//! HT16K33 command definitions
//!
//! The HT16K33 is driven entirely by single-byte commands written over I2C.
//! The high nibble selects the register, the low nibble carries its value.
//! Display RAM is the exception: a write starting with an address byte in
//! `0x00..=0x0F` is followed by the RAM contents, auto-incrementing.
//!
//! ## Example
//!
//! ```
//! use ht16k33_segment::command;
//!
//! // Display on, blinking at 1 Hz
//! let setup = command::DISPLAY_SETUP | command::DISPLAY_ON | (0b10 << command::BLINK_SHIFT);
//! assert_eq!(setup, 0x85);
//!
//! // Half brightness
//! assert_eq!(command::DIMMING | 7, 0xE7);
//! ```

// System setup

/// System setup register (0x20)
///
/// Bit 0 enables the internal oscillator. Use [`OSCILLATOR_ON`] or
/// [`OSCILLATOR_OFF`].
pub const SYSTEM_SETUP: u8 = 0x20;

/// Oscillator off, device in standby (0x20)
pub const OSCILLATOR_OFF: u8 = SYSTEM_SETUP;

/// Oscillator on, device in normal operation (0x21)
pub const OSCILLATOR_ON: u8 = SYSTEM_SETUP | 0x01;

// Display setup

/// Display setup register (0x80)
///
/// - Bit 0: display on (1) or off (0)
/// - Bits 1-2: blink rate (00 = off, 01 = 2 Hz, 10 = 1 Hz, 11 = 0.5 Hz)
pub const DISPLAY_SETUP: u8 = 0x80;

/// Display-on bit of [`DISPLAY_SETUP`]
pub const DISPLAY_ON: u8 = 0x01;

/// Position of the blink rate field within [`DISPLAY_SETUP`]
pub const BLINK_SHIFT: u8 = 1;

/// Mask of the blink rate field before shifting
pub const BLINK_MASK: u8 = 0x03;

// Dimming

/// Dimming register (0xE0)
///
/// The low nibble selects the duty cycle, 0 (1/16) to 15 (16/16).
pub const DIMMING: u8 = 0xE0;

/// Highest dimming level accepted by [`DIMMING`]
pub const MAX_BRIGHTNESS: u8 = 0x0F;

// Display RAM

/// Display RAM base address (0x00)
///
/// A write of `[DISPLAY_RAM, b0, b1, ...]` stores `b0` at RAM address 0 and
/// auto-increments from there.
pub const DISPLAY_RAM: u8 = 0x00;

/// Size of the HT16K33 display RAM in bytes
pub const DISPLAY_RAM_SIZE: usize = 16;
