//! Core display operations

use log::{debug, trace, warn};

use crate::command::{
    BLINK_SHIFT, DISPLAY_ON, DISPLAY_RAM, DISPLAY_SETUP, DIMMING, MAX_BRIGHTNESS, OSCILLATOR_OFF,
    OSCILLATOR_ON,
};
use crate::config::{BlinkRate, Config};
use crate::error::Error;
use crate::font::{HEX_DIGITS, glyph_for_char, glyph_for_value};
use crate::framebuffer::{Framebuffer, MAX_FRAME_LEN};
use crate::interface::DisplayInterface;
use crate::layout::DIGIT_COUNT;

type DisplayResult<I> = core::result::Result<(), Error<I>>;
type ChainResult<'a, I> = core::result::Result<&'a mut SegmentDisplay<I>, Error<I>>;

/// Core display driver for an HT16K33 4-digit seven-segment module
///
/// Setters only touch the in-memory framebuffer; nothing reaches the device
/// until [`draw`](Self::draw). Brightness, blink rate and power are control
/// registers and are written immediately.
///
/// Setters return `&mut Self` so calls can be chained:
///
/// ```
/// use ht16k33_segment::{Address, Config, Interface, SegmentDisplay};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c<SevenBitAddress> for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # fn main() -> Result<(), ht16k33_segment::Error<Interface<MockI2c>>> {
/// let interface = Interface::new(MockI2c, Address::default());
/// let mut display = SegmentDisplay::init(interface, Config::default())?;
///
/// display
///     .set_number(1, 0, false)?
///     .set_number(2, 1, false)?
///     .set_number(3, 2, false)?
///     .set_number(4, 3, false)?
///     .set_colon(true)
///     .draw()?;
/// # Ok(())
/// # }
/// ```
pub struct SegmentDisplay<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Digit cells and colon
    buffer: Framebuffer,
    /// Framebuffer changed since the last successful draw
    dirty: bool,
    /// Current dimming level
    brightness: u8,
    /// Current blink rate
    blink_rate: BlinkRate,
    /// Whether the display power is on
    is_display_on: bool,
}

impl<I> SegmentDisplay<I>
where
    I: DisplayInterface,
{
    /// Initialize the controller and blank the display
    ///
    /// Starts the oscillator, applies the configured brightness and blink
    /// rate (switching the display on), then commits an empty framebuffer so
    /// the module does not show power-on garbage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if the device does not acknowledge
    /// the first command, or [`Error::Interface`] for any other bus failure.
    pub fn init(interface: I, config: Config) -> Result<Self, Error<I>> {
        if config.brightness > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness {
                level: config.brightness,
            });
        }

        let mut display = Self {
            interface,
            config,
            buffer: Framebuffer::new(),
            dirty: false,
            brightness: config.brightness,
            blink_rate: config.blink_rate,
            is_display_on: false,
        };

        let address = display.interface.address();
        debug!("ht16k33: initializing device at {address:#04x}");

        if let Err(e) = display.interface.send_command(OSCILLATOR_ON) {
            if I::is_not_found(&e) {
                warn!("ht16k33: no device at {address:#04x}");
                return Err(Error::DeviceNotFound { address });
            }
            return Err(Error::Interface(e));
        }

        display.write_brightness(config.brightness)?;
        display.write_display_setup(true, config.blink_rate)?;
        display.draw()?;

        Ok(display)
    }

    /// Store a raw segment bitmask at `position` (0-3)
    ///
    /// `has_decimal_point` ORs in the decimal point segment. No bus traffic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position` is above 3; the
    /// framebuffer is left unchanged.
    pub fn set_glyph(
        &mut self,
        glyph: u8,
        position: usize,
        has_decimal_point: bool,
    ) -> ChainResult<'_, I> {
        if !self.buffer.set(position, glyph, has_decimal_point) {
            return Err(Error::InvalidPosition { position });
        }
        self.dirty = true;
        Ok(self)
    }

    /// Show a hex digit (0-15) at `position` (0-3)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `value` is above 15 or
    /// [`Error::InvalidPosition`] if `position` is above 3. Nothing is
    /// changed in either case.
    pub fn set_number(
        &mut self,
        value: u8,
        position: usize,
        has_decimal_point: bool,
    ) -> ChainResult<'_, I> {
        let glyph = glyph_for_value(value).ok_or(Error::InvalidValue {
            value: u16::from(value),
        })?;
        self.set_glyph(glyph, position, has_decimal_point)
    }

    /// Show a character at `position` (0-3)
    ///
    /// Supports `0`-`9`, `a`-`f` (either case), space, `-` and `°`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] for characters without a glyph or
    /// [`Error::InvalidPosition`] if `position` is above 3.
    pub fn set_character(
        &mut self,
        character: char,
        position: usize,
        has_decimal_point: bool,
    ) -> ChainResult<'_, I> {
        let glyph = glyph_for_char(character).ok_or(Error::InvalidCharacter { character })?;
        self.set_glyph(glyph, position, has_decimal_point)
    }

    /// Show `value` in decimal across all four digits
    ///
    /// Leading zeros are shown. Decimal points are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `value` is above 9999.
    pub fn set_decimal(&mut self, value: u16) -> ChainResult<'_, I> {
        if value > 9999 {
            return Err(Error::InvalidValue { value });
        }
        self.fill_radix(value, 10);
        Ok(self)
    }

    /// Show `value` in hex across all four digits
    pub fn set_hex(&mut self, value: u16) -> &mut Self {
        self.fill_radix(value, 16);
        self
    }

    /// Fill every digit with `value` in `radix` (at most 16), most
    /// significant digit first
    fn fill_radix(&mut self, value: u16, radix: u16) {
        let mut rest = value;
        for position in (0..DIGIT_COUNT).rev() {
            self.buffer.set(position, HEX_DIGITS[usize::from(rest % radix)], false);
            rest /= radix;
        }
        self.dirty = true;
    }

    /// Light or clear the center colon. No bus traffic.
    pub fn set_colon(&mut self, on: bool) -> &mut Self {
        self.buffer.set_colon(on);
        self.dirty = true;
        self
    }

    /// Blank all four digits
    ///
    /// The colon keeps its state. Nothing is sent until the next
    /// [`draw`](Self::draw), so several changes can be committed at once.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self.dirty = true;
        self
    }

    /// Commit the framebuffer to the device
    ///
    /// Sends the RAM base address and the whole framebuffer in exactly one
    /// write transaction. Drawing an unchanged framebuffer sends the same
    /// bytes again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails. The framebuffer is
    /// kept and stays dirty, so a later draw resends it.
    pub fn draw(&mut self) -> ChainResult<'_, I> {
        let mut frame = [0u8; MAX_FRAME_LEN];
        let bytes = self.buffer.serialize(self.config.layout, &mut frame);
        trace!("ht16k33: draw {bytes:02x?}");
        self.interface.send_data(bytes).map_err(Error::Interface)?;
        self.dirty = false;
        Ok(self)
    }

    /// Commit the framebuffer to the device (alias of [`draw`](Self::draw))
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails.
    pub fn update(&mut self) -> ChainResult<'_, I> {
        self.draw()
    }

    /// Set the brightness (0-15), written immediately
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBrightness`] above 15 without touching the
    /// bus, or [`Error::Interface`] if the write fails.
    pub fn set_brightness(&mut self, level: u8) -> ChainResult<'_, I> {
        if level > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness { level });
        }
        debug!("ht16k33: brightness {level}");
        self.write_brightness(level)?;
        Ok(self)
    }

    /// Set the blink rate, written immediately
    ///
    /// Raw rates can be converted with `BlinkRate::try_from(u8)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the write fails; the stored rate is
    /// then unchanged.
    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> ChainResult<'_, I> {
        debug!("ht16k33: blink rate {rate:?}");
        self.write_display_setup(self.is_display_on, rate)?;
        Ok(self)
    }

    /// Switch the display off and stop the oscillator
    ///
    /// Display RAM is kept by the device while in standby.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if a write fails.
    pub fn power_off(&mut self) -> DisplayResult<I> {
        debug!("ht16k33: power off");
        self.write_display_setup(false, self.blink_rate)?;
        self.send_command(OSCILLATOR_OFF)
    }

    /// Restart the oscillator and switch the display back on
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if a write fails.
    pub fn power_on(&mut self) -> DisplayResult<I> {
        debug!("ht16k33: power on");
        self.send_command(OSCILLATOR_ON)?;
        self.write_display_setup(true, self.blink_rate)
    }

    /// Read display RAM back from the device, starting at address 0
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if the read fails.
    pub fn read_display_ram(&mut self, buffer: &mut [u8]) -> DisplayResult<I> {
        self.interface
            .read_data(DISPLAY_RAM, buffer)
            .map_err(Error::Interface)
    }

    /// Glyph currently stored at `position`, or `None` past the last digit
    pub fn glyph(&self, position: usize) -> Option<u8> {
        self.buffer.get(position)
    }

    /// Colon state in the framebuffer
    pub fn colon(&self) -> bool {
        self.buffer.colon()
    }

    /// Whether the framebuffer changed since the last successful draw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current brightness level
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current blink rate
    pub fn blink_rate(&self) -> BlinkRate {
        self.blink_rate
    }

    /// Whether the display is switched on
    pub fn is_display_on(&self) -> bool {
        self.is_display_on
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    fn write_brightness(&mut self, level: u8) -> DisplayResult<I> {
        self.send_command(DIMMING | level)?;
        self.brightness = level;
        Ok(())
    }

    fn write_display_setup(&mut self, display_on: bool, rate: BlinkRate) -> DisplayResult<I> {
        let on = if display_on { DISPLAY_ON } else { 0 };
        self.send_command(DISPLAY_SETUP | (u8::from(rate) << BLINK_SHIFT) | on)?;
        self.is_display_on = display_on;
        self.blink_rate = rate;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::font::{DECIMAL_POINT, HEX_DIGITS};
    use crate::layout::{COLON_SEGMENT, RamLayout};

    #[derive(Debug, PartialEq)]
    struct BusError;

    #[derive(Debug)]
    struct MockInterface {
        writes: alloc::vec::Vec<alloc::vec::Vec<u8>>,
        reads: usize,
        ram: [u8; 16],
        fail_writes: bool,
        absent: bool,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                writes: alloc::vec::Vec::new(),
                reads: 0,
                ram: [0; 16],
                fail_writes: false,
                absent: false,
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum MockError {
        Bus(BusError),
        Absent,
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn address(&self) -> u8 {
            0x70
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.absent {
                return Err(MockError::Absent);
            }
            if self.fail_writes {
                return Err(MockError::Bus(BusError));
            }
            if let Some((&DISPLAY_RAM, ram)) = data.split_first() {
                self.ram[..ram.len()].copy_from_slice(ram);
            }
            self.writes.push(data.to_vec());
            Ok(())
        }

        fn read_data(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
            self.reads += 1;
            let start = register as usize;
            buffer.copy_from_slice(&self.ram[start..start + buffer.len()]);
            Ok(())
        }

        fn is_not_found(error: &Self::Error) -> bool {
            *error == MockError::Absent
        }
    }

    fn test_display() -> SegmentDisplay<MockInterface> {
        let mut display = SegmentDisplay::init(MockInterface::new(), Config::default()).unwrap();
        display.interface.writes.clear();
        display
    }

    fn writes(display: &SegmentDisplay<MockInterface>) -> &[alloc::vec::Vec<u8>] {
        &display.interface.writes
    }

    #[test]
    fn test_init_sequence() {
        let display = SegmentDisplay::init(MockInterface::new(), Config::default()).unwrap();
        assert_eq!(
            writes(&display),
            &[
                alloc::vec![OSCILLATOR_ON],
                alloc::vec![0xEF],
                alloc::vec![0x81],
                alloc::vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            ]
        );
        assert!(display.is_display_on());
        assert!(!display.is_dirty());
        assert_eq!(display.brightness(), 15);
        assert_eq!(display.blink_rate(), BlinkRate::Off);
    }

    #[test]
    fn test_init_applies_config() {
        let config = Builder::new()
            .brightness(2)
            .blink_rate(BlinkRate::TwoHz)
            .layout(RamLayout::Backpack)
            .build()
            .unwrap();
        let display = SegmentDisplay::init(MockInterface::new(), config).unwrap();
        let writes = writes(&display);
        assert_eq!(writes[1], alloc::vec![0xE2]);
        assert_eq!(writes[2], alloc::vec![0x83]);
        assert_eq!(writes[3].len(), 17);
        assert!(writes[3].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_init_reports_missing_device() {
        let mut interface = MockInterface::new();
        interface.absent = true;
        let result = SegmentDisplay::init(interface, Config::default());
        assert!(matches!(result, Err(Error::DeviceNotFound { address: 0x70 })));
    }

    #[test]
    fn test_init_reports_bus_error() {
        let mut interface = MockInterface::new();
        interface.fail_writes = true;
        let result = SegmentDisplay::init(interface, Config::default());
        assert!(matches!(result, Err(Error::Interface(MockError::Bus(BusError)))));
    }

    #[test]
    fn test_init_rejects_unvalidated_brightness() {
        let config = Config {
            brightness: 16,
            ..Config::default()
        };
        let result = SegmentDisplay::init(MockInterface::new(), config);
        assert!(matches!(result, Err(Error::InvalidBrightness { level: 16 })));
    }

    #[test]
    fn test_set_glyph_reads_back_every_mask() {
        let mut display = test_display();
        for position in 0..DIGIT_COUNT {
            for glyph in 0..=u8::MAX {
                display.set_glyph(glyph, position, false).unwrap();
                assert_eq!(display.glyph(position), Some(glyph));
            }
        }
        assert!(writes(&display).is_empty());
    }

    #[test]
    fn test_set_glyph_with_decimal_point() {
        let mut display = test_display();
        display.set_glyph(0x6D, 2, true).unwrap();
        assert_eq!(display.glyph(2), Some(0x6D | DECIMAL_POINT));
    }

    #[test]
    fn test_set_glyph_out_of_range_is_side_effect_free() {
        let mut display = test_display();
        display.set_glyph(0x3F, 3, false).unwrap();
        display.draw().unwrap();
        let result = display.set_glyph(0xFF, 4, false);
        assert!(matches!(result, Err(Error::InvalidPosition { position: 4 })));
        assert_eq!(display.glyph(3), Some(0x3F));
        assert!(!display.is_dirty());
    }

    #[test]
    fn test_set_number_matches_font() {
        let mut display = test_display();
        for value in 0..16u8 {
            display.set_number(value, 1, false).unwrap();
            assert_eq!(display.glyph(1), glyph_for_value(value));
        }
        assert_eq!(display.glyph(1), Some(HEX_DIGITS[15]));
    }

    #[test]
    fn test_set_number_out_of_range_is_side_effect_free() {
        let mut display = test_display();
        display.set_number(7, 0, false).unwrap();
        let result = display.set_number(16, 0, false);
        assert!(matches!(result, Err(Error::InvalidValue { value: 16 })));
        assert_eq!(display.glyph(0), Some(HEX_DIGITS[7]));

        let result = display.set_number(3, 9, false);
        assert!(matches!(result, Err(Error::InvalidPosition { position: 9 })));
    }

    #[test]
    fn test_set_character() {
        let mut display = test_display();
        display
            .set_character('-', 0, false)
            .unwrap()
            .set_character('A', 1, false)
            .unwrap()
            .set_character(' ', 2, false)
            .unwrap()
            .set_character('°', 3, true)
            .unwrap();
        assert_eq!(display.glyph(0), Some(0x40));
        assert_eq!(display.glyph(1), Some(HEX_DIGITS[10]));
        assert_eq!(display.glyph(2), Some(0x00));
        assert_eq!(display.glyph(3), Some(0x63 | DECIMAL_POINT));

        let result = display.set_character('x', 0, false);
        assert!(matches!(result, Err(Error::InvalidCharacter { character: 'x' })));
        assert_eq!(display.glyph(0), Some(0x40));
    }

    #[test]
    fn test_set_decimal() {
        let mut display = test_display();
        display.set_decimal(999).unwrap();
        assert_eq!(display.glyph(0), Some(HEX_DIGITS[0]));
        assert_eq!(display.glyph(1), Some(HEX_DIGITS[9]));
        assert_eq!(display.glyph(2), Some(HEX_DIGITS[9]));
        assert_eq!(display.glyph(3), Some(HEX_DIGITS[9]));

        display.set_decimal(9999).unwrap();
        let result = display.set_decimal(10_000);
        assert!(matches!(result, Err(Error::InvalidValue { value: 10_000 })));
        assert_eq!(display.glyph(0), Some(HEX_DIGITS[9]));
    }

    #[test]
    fn test_set_hex() {
        let mut display = test_display();
        display.set_hex(0xBEEF);
        assert_eq!(display.glyph(0), Some(HEX_DIGITS[0xB]));
        assert_eq!(display.glyph(1), Some(HEX_DIGITS[0xE]));
        assert_eq!(display.glyph(2), Some(HEX_DIGITS[0xE]));
        assert_eq!(display.glyph(3), Some(HEX_DIGITS[0xF]));
        assert!(display.is_dirty());

        display.set_number(1, 0, true).unwrap();
        display.set_hex(0x0000);
        assert_eq!(display.glyph(0), Some(HEX_DIGITS[0]));
        display.set_hex(u16::MAX);
        for position in 0..DIGIT_COUNT {
            assert_eq!(display.glyph(position), Some(HEX_DIGITS[0xF]));
        }
        assert!(writes(&display).is_empty());
    }

    #[test]
    fn test_clear_keeps_colon_and_does_not_draw() {
        let mut display = test_display();
        display.set_decimal(1234).unwrap().set_colon(true);
        display.clear();
        assert!(writes(&display).is_empty());
        assert!(display.colon());

        display.draw().unwrap();
        assert_eq!(
            writes(&display),
            &[alloc::vec![0x00, 0x00, 0x00, 0x00, 0x00, COLON_SEGMENT]]
        );
    }

    #[test]
    fn test_draw_sync_glyphs_in_one_transaction() {
        let mut display = test_display();
        for (position, glyph) in [0x6D, 0x6E, 0x37, 0x39].into_iter().enumerate() {
            display.set_glyph(glyph, position, false).unwrap();
        }
        assert!(display.is_dirty());
        display.draw().unwrap();
        assert_eq!(
            writes(&display),
            &[alloc::vec![0x00, 0x6D, 0x6E, 0x37, 0x39, 0x00]]
        );
        assert!(!display.is_dirty());
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut display = test_display();
        display.set_number(5, 0, true).unwrap().set_colon(true);
        display.draw().unwrap().update().unwrap();
        let writes = writes(&display);
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], writes[1]);
    }

    #[test]
    fn test_failed_draw_keeps_framebuffer_dirty() {
        let mut display = test_display();
        display.set_number(1, 0, false).unwrap();
        display.interface.fail_writes = true;
        assert!(matches!(display.draw(), Err(Error::Interface(_))));
        assert!(display.is_dirty());
        assert_eq!(display.glyph(0), Some(HEX_DIGITS[1]));

        display.interface.fail_writes = false;
        display.draw().unwrap();
        assert_eq!(display.interface.ram[0], HEX_DIGITS[1]);
    }

    #[test]
    fn test_set_brightness_writes_dimming_command() {
        let mut display = test_display();
        display.set_brightness(2).unwrap();
        display.set_brightness(0).unwrap();
        assert_eq!(writes(&display), &[alloc::vec![0xE2], alloc::vec![0xE0]]);
        assert_eq!(display.brightness(), 0);
    }

    #[test]
    fn test_set_brightness_out_of_range_sends_nothing() {
        let mut display = test_display();
        for level in [16, 0x80, u8::MAX] {
            let result = display.set_brightness(level);
            assert!(matches!(result, Err(Error::InvalidBrightness { .. })));
        }
        assert!(writes(&display).is_empty());
        assert_eq!(display.brightness(), 15);
    }

    #[test]
    fn test_set_blink_rate_commands() {
        let mut display = test_display();
        display.set_blink_rate(BlinkRate::OneHz).unwrap();
        assert_eq!(writes(&display), &[alloc::vec![0x85]]);

        display.interface.writes.clear();
        for (rate, expected) in [
            (BlinkRate::TwoHz, 0x83),
            (BlinkRate::HalfHz, 0x87),
            (BlinkRate::Off, 0x81),
        ] {
            display.set_blink_rate(rate).unwrap();
            assert_eq!(display.blink_rate(), rate);
            assert_eq!(writes(&display).last(), Some(&alloc::vec![expected]));
        }
    }

    #[test]
    fn test_failed_blink_write_keeps_previous_rate() {
        let mut display = test_display();
        display.set_blink_rate(BlinkRate::HalfHz).unwrap();
        display.interface.fail_writes = true;
        let result = display.set_blink_rate(BlinkRate::TwoHz);
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.blink_rate(), BlinkRate::HalfHz);
        assert!(display.is_display_on());
    }

    #[test]
    fn test_failed_power_off_keeps_display_on() {
        let mut display = test_display();
        display.interface.fail_writes = true;
        assert!(matches!(display.power_off(), Err(Error::Interface(_))));
        assert!(display.is_display_on());

        display.interface.fail_writes = false;
        display.power_off().unwrap();
        display.interface.fail_writes = true;
        assert!(matches!(display.power_on(), Err(Error::Interface(_))));
        assert!(!display.is_display_on());
    }

    #[test]
    fn test_setters_do_not_touch_framebuffer() {
        let mut display = test_display();
        display.set_decimal(42).unwrap().draw().unwrap();
        display.set_brightness(3).unwrap();
        display.set_blink_rate(BlinkRate::TwoHz).unwrap();
        assert!(!display.is_dirty());
        assert_eq!(display.glyph(3), Some(HEX_DIGITS[2]));
    }

    #[test]
    fn test_power_off_and_on() {
        let mut display = test_display();
        display.set_blink_rate(BlinkRate::HalfHz).unwrap();
        display.interface.writes.clear();

        display.power_off().unwrap();
        assert!(!display.is_display_on());
        assert_eq!(writes(&display), &[alloc::vec![0x86], alloc::vec![OSCILLATOR_OFF]]);

        display.interface.writes.clear();
        display.set_blink_rate(BlinkRate::Off).unwrap();
        assert_eq!(writes(&display), &[alloc::vec![0x80]]);

        display.interface.writes.clear();
        display.power_on().unwrap();
        assert!(display.is_display_on());
        assert_eq!(writes(&display), &[alloc::vec![OSCILLATOR_ON], alloc::vec![0x81]]);
    }

    #[test]
    fn test_read_display_ram() {
        let mut display = test_display();
        display.set_decimal(2024).unwrap().draw().unwrap();
        let mut ram = [0u8; 4];
        display.read_display_ram(&mut ram).unwrap();
        assert_eq!(display.interface.reads, 1);
        assert_eq!(
            ram,
            [HEX_DIGITS[2], HEX_DIGITS[0], HEX_DIGITS[2], HEX_DIGITS[4]]
        );
    }

    #[test]
    fn test_release_returns_interface() {
        let mut display = test_display();
        display.set_brightness(1).unwrap();
        let interface = display.release();
        assert_eq!(interface.writes, alloc::vec![alloc::vec![0xE1]]);
    }
}
