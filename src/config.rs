//! Display configuration types and builder

pub use crate::error::{BuilderError, InvalidBlinkRate};
use crate::command::{BLINK_MASK, MAX_BRIGHTNESS};
use crate::layout::RamLayout;

/// Lowest I2C address of the HT16K33 family (A0-A2 strapped low)
pub const MIN_ADDRESS: u8 = 0x70;

/// Highest I2C address of the HT16K33 family (A0-A2 strapped high)
pub const MAX_ADDRESS: u8 = 0x77;

/// 7-bit I2C address of an HT16K33
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address(u8);

impl Address {
    /// Create an address with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if `address` is outside
    /// `MIN_ADDRESS..=MAX_ADDRESS`.
    pub fn new(address: u8) -> Result<Self, BuilderError> {
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&address) {
            return Err(BuilderError::InvalidAddress { address });
        }
        Ok(Self(address))
    }

    /// Address selected by the A0-A2 solder jumpers
    pub fn from_pins(a0: bool, a1: bool, a2: bool) -> Self {
        Self(MIN_ADDRESS | u8::from(a0) | (u8::from(a1) << 1) | (u8::from(a2) << 2))
    }

    /// Raw 7-bit address
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Address {
    fn default() -> Self {
        Self(MIN_ADDRESS)
    }
}

/// Blink rate of the whole display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BlinkRate {
    /// Steady display
    #[default]
    Off = 0b00,
    /// Blink at 2 Hz
    TwoHz = 0b01,
    /// Blink at 1 Hz
    OneHz = 0b10,
    /// Blink at 0.5 Hz
    HalfHz = 0b11,
}

impl BlinkRate {
    /// Field value for the display setup register (before shifting)
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Convert a raw display setup field code (0-3) into a rate
///
/// The number is the register field value, not a frequency: `1` is
/// [`BlinkRate::TwoHz`] and `2` is [`BlinkRate::OneHz`].
///
/// ```
/// use ht16k33_segment::BlinkRate;
///
/// assert_eq!(BlinkRate::try_from(2), Ok(BlinkRate::OneHz));
/// assert_eq!(BlinkRate::try_from(1), Ok(BlinkRate::TwoHz));
/// ```
impl TryFrom<u8> for BlinkRate {
    type Error = InvalidBlinkRate;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::TwoHz),
            2 => Ok(Self::OneHz),
            3 => Ok(Self::HalfHz),
            _ => Err(InvalidBlinkRate(value)),
        }
    }
}

impl From<BlinkRate> for u8 {
    fn from(rate: BlinkRate) -> Self {
        rate.bits() & BLINK_MASK
    }
}

/// Display configuration
///
/// Settings written to the device by
/// [`SegmentDisplay::init`](crate::SegmentDisplay::init). Use `Builder` to
/// create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Initial brightness, 0-15
    pub brightness: u8,
    /// Initial blink rate
    pub blink_rate: BlinkRate,
    /// Display RAM layout of the module
    pub layout: RamLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brightness: MAX_BRIGHTNESS,
            blink_rate: BlinkRate::Off,
            layout: RamLayout::Packed,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ht16k33_segment::{BlinkRate, Builder, RamLayout};
///
/// let config = match Builder::new()
///     .brightness(2)
///     .blink_rate(BlinkRate::Off)
///     .layout(RamLayout::Backpack)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.brightness, 2);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Initial brightness, validated in `build`
    brightness: Option<u8>,
    /// Initial blink rate
    blink_rate: BlinkRate,
    /// Display RAM layout
    layout: RamLayout,
}

impl Builder {
    /// Create a new Builder with default values
    ///
    /// Defaults: full brightness, no blinking, packed layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial brightness (0-15)
    pub fn brightness(mut self, level: u8) -> Self {
        self.brightness = Some(level);
        self
    }

    /// Set the initial blink rate
    pub fn blink_rate(mut self, rate: BlinkRate) -> Self {
        self.blink_rate = rate;
        self
    }

    /// Set the display RAM layout
    pub fn layout(mut self, layout: RamLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidBrightness` if the brightness is above 15
    pub fn build(self) -> Result<Config, BuilderError> {
        let brightness = self.brightness.unwrap_or(MAX_BRIGHTNESS);
        if brightness > MAX_BRIGHTNESS {
            return Err(BuilderError::InvalidBrightness { level: brightness });
        }
        Ok(Config {
            brightness,
            blink_rate: self.blink_rate,
            layout: self.layout,
        })
    }
}
