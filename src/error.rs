//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InvalidBlinkRate`] - Raw blink rate field code outside 0-3
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus communication errors
//!
//! Range errors ([`Error::InvalidPosition`], [`Error::InvalidValue`],
//! [`Error::InvalidCharacter`], [`Error::InvalidBrightness`]) are raised
//! before anything is written, so the framebuffer and the device are left
//! exactly as they were.
//!
//! ## Example
//!
//! ```
//! use ht16k33_segment::{Address, Builder, BuilderError};
//!
//! // Brightness out of range
//! let result = Builder::new().brightness(16).build();
//! assert!(matches!(result, Err(BuilderError::InvalidBrightness { level: 16 })));
//!
//! // Not an HT16K33 address
//! let result = Address::new(0x3C);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`]
    /// implementation. The framebuffer is not rolled back, so after a failed
    /// draw the device RAM may differ from it; draw again to resynchronize.
    Interface(I::Error),
    /// No device acknowledged its address during initialization
    DeviceNotFound {
        /// 7-bit address that was probed
        address: u8,
    },
    /// Digit position outside 0-3
    InvalidPosition {
        /// Position requested
        position: usize,
    },
    /// Value that has no glyph, or does not fit on four digits
    InvalidValue {
        /// Value requested
        value: u16,
    },
    /// Character missing from the font table
    InvalidCharacter {
        /// Character requested
        character: char,
    },
    /// Brightness outside 0-15
    InvalidBrightness {
        /// Level requested
        level: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::DeviceNotFound { address } => f
                .debug_struct("DeviceNotFound")
                .field("address", address)
                .finish(),
            Self::InvalidPosition { position } => f
                .debug_struct("InvalidPosition")
                .field("position", position)
                .finish(),
            Self::InvalidValue { value } => f
                .debug_struct("InvalidValue")
                .field("value", value)
                .finish(),
            Self::InvalidCharacter { character } => f
                .debug_struct("InvalidCharacter")
                .field("character", character)
                .finish(),
            Self::InvalidBrightness { level } => f
                .debug_struct("InvalidBrightness")
                .field("level", level)
                .finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::DeviceNotFound { address } => {
                write!(f, "No HT16K33 acknowledged address {address:#04x}")
            }
            Self::InvalidPosition { position } => {
                write!(f, "Invalid digit position {position} (expected 0-3)")
            }
            Self::InvalidValue { value } => write!(f, "Value {value} cannot be displayed"),
            Self::InvalidCharacter { character } => {
                write!(f, "No glyph for character {character:?}")
            }
            Self::InvalidBrightness { level } => {
                write!(f, "Invalid brightness {level} (expected 0-15)")
            }
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Address outside the HT16K33 range 0x70-0x77
    ///
    /// See [`Address::new()`](crate::config::Address::new).
    InvalidAddress {
        /// Address requested
        address: u8,
    },
    /// Initial brightness above 15
    InvalidBrightness {
        /// Level requested
        level: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress { address } => write!(
                f,
                "Invalid address {address:#04x} (expected 0x70-0x77)"
            ),
            Self::InvalidBrightness { level } => {
                write!(f, "Invalid brightness {level} (expected 0-15)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}

/// Raw blink rate field code outside 0-3
///
/// Returned by `BlinkRate::try_from(u8)`. The code is the display setup
/// register field (1 = 2 Hz, 2 = 1 Hz, 3 = 0.5 Hz), not a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBlinkRate(pub u8);

impl core::fmt::Display for InvalidBlinkRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid blink rate code {} (expected 0-3)", self.0)
    }
}

impl core::error::Error for InvalidBlinkRate {}
