//! HT16K33 Seven-Segment Display Driver
//!
//! A driver for 4-digit seven-segment LED modules (with center colon) built on
//! the Holtek HT16K33 LED controller, such as the Adafruit 0.56" backpack.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 I2C support
//! - Raw glyphs, hex digits, characters and whole decimal/hex numbers
//! - Batched updates: setters only touch the framebuffer, `draw` commits it
//!   in one I2C write
//! - Brightness (16 levels), blink rate and power control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ht16k33_segment::{Address, BlinkRate, Builder, Interface, SegmentDisplay};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let interface = Interface::new(i2c, Address::default());
//! let config = match Builder::new().brightness(2).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match SegmentDisplay::init(interface, config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! // "SYNC"
//! for (position, glyph) in [0x6D, 0x6E, 0x37, 0x39].into_iter().enumerate() {
//!     let _ = display.set_glyph(glyph, position, false);
//! }
//! let _ = display.draw();
//!
//! // Count down with a blinking colon
//! for count in (0..=999u16).rev() {
//!     let _ = display.set_decimal(count);
//!     display.set_colon(count / 10 % 2 == 0);
//!     let _ = display.update();
//! }
//!
//! let _ = display.set_blink_rate(BlinkRate::OneHz);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// HT16K33 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Seven-segment font table
pub mod font;
/// In-memory framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Display RAM layouts
pub mod layout;

pub use config::{Address, BlinkRate, Builder, Config, MAX_ADDRESS, MIN_ADDRESS};
pub use display::SegmentDisplay;
pub use error::{BuilderError, Error, InvalidBlinkRate};
pub use framebuffer::Framebuffer;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
pub use layout::{DIGIT_COUNT, RamLayout};
