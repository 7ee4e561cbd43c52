//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the HT16K33 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The HT16K33 only needs an I2C bus (SDA + SCL). Its address is 0x70 plus
//! the A0-A2 jumpers, see [`Address`].
//!
//! ## Sharing the bus
//!
//! [`Interface`] takes ownership of anything implementing
//! [`embedded_hal::i2c::I2c`]. To share one bus between several devices,
//! hand it a shared-bus device (for example from `embedded-hal-bus`), which
//! locks the bus around every transaction.
//!
//! ## Example
//!
//! ```
//! use ht16k33_segment::{command, Address, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
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
//! // Create interface for the default address (0x70)
//! let mut interface = Interface::new(MockI2c, Address::default());
//!
//! // Start the oscillator
//! let _ = interface.send_command(command::OSCILLATOR_ON);
//!
//! // Write two bytes of display RAM starting at address 0
//! let _ = interface.send_data(&[command::DISPLAY_RAM, 0x3F, 0x06]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{ErrorKind, I2c, NoAcknowledgeSource};

use crate::config::Address;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the bus interface to an HT16K33 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`SegmentDisplay`](crate::display::SegmentDisplay) to work with any
/// transport that can write and read bytes at the device address.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself to route the display through a different transport.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// 7-bit address of the device this interface talks to
    fn address(&self) -> u8;

    /// Send a single command byte
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.send_data(&[command])
    }

    /// Send bytes to the device in a single write transaction
    ///
    /// For display RAM writes the first byte is the RAM start address.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Read `buffer.len()` bytes starting at `register`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn read_data(&mut self, register: u8, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error>;

    /// Whether `error` means no device answered at [`address`](Self::address)
    ///
    /// Used during initialization to report
    /// [`Error::DeviceNotFound`](crate::Error::DeviceNotFound). The default
    /// treats every error as a bus error.
    fn is_not_found(error: &Self::Error) -> bool {
        let _ = error;
        false
    }
}

/// Errors that can occur at the interface level
///
/// Generic over the I2C error type.
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
    /// The device did not acknowledge its address
    NoAcknowledge {
        /// 7-bit address that was not acknowledged
        address: u8,
    },
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::NoAcknowledge { address } => {
                write!(f, "No acknowledge from address {address:#04x}")
            }
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// Hardware interface implementation for HT16K33
///
/// Implements [`DisplayInterface`] for the embedded-hal v1.0 I2C trait.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
pub struct Interface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// Device address
    address: Address,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - Device address, see [`Address::from_pins`]
    pub fn new(i2c: I2C, address: Address) -> Self {
        Self { i2c, address }
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn map_error(&self, error: I2C::Error) -> InterfaceError<I2C::Error> {
        use embedded_hal::i2c::Error as _;

        match error.kind() {
            ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address | NoAcknowledgeSource::Unknown,
            ) => InterfaceError::NoAcknowledge {
                address: self.address.get(),
            },
            _ => InterfaceError::I2c(error),
        }
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn address(&self) -> u8 {
        self.address.get()
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address.get(), data)
            .map_err(|e| self.map_error(e))
    }

    fn read_data(&mut self, register: u8, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write_read(self.address.get(), &[register], buffer)
            .map_err(|e| self.map_error(e))
    }

    fn is_not_found(error: &Self::Error) -> bool {
        matches!(error, InterfaceError::NoAcknowledge { .. })
    }
}
