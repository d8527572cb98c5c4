//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait, the single bus primitive
//! the driver talks through, and the [`I2cInterface`] implementation for
//! embedded-hal v1.0 I2C buses.
//!
//! Every transfer is a pair: a control byte selecting command or data, followed
//! by one value byte. The driver never performs any other I/O.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1306::{DisplayInterface, I2cInterface};
//!
//! let mut interface = I2cInterface::new(i2c);
//!
//! // Display on
//! interface.send(0x00, 0xAF)?;
//!
//! // One column of pixels
//! interface.send(0x40, 0xFF)?;
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

/// Default 7-bit I2C address of SSD1306 modules (SA0 pulled low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Trait for the bus sink feeding the SSD1306 controller
///
/// Implementations must treat each call as atomic: either both bytes reach the
/// controller or an error is returned.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Test doubles and
/// emulators implement this trait directly.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one control/value pair to the controller
    ///
    /// # Arguments
    ///
    /// * `control` - [`CONTROL_COMMAND`](crate::command::CONTROL_COMMAND) or
    ///   [`CONTROL_DATA`](crate::command::CONTROL_DATA)
    /// * `value` - Command, command parameter or pixel column byte
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer fails. The driver never retries.
    fn send(&mut self, control: u8, value: u8) -> Result<(), Self::Error>;
}

impl<T: DisplayInterface + ?Sized> DisplayInterface for &mut T {
    type Error = T::Error;

    fn send(&mut self, control: u8, value: u8) -> Result<(), Self::Error> {
        (**self).send(control, value)
    }
}

/// I2C implementation of [`DisplayInterface`]
///
/// Writes `[control, value]` to the device address in a single I2C write.
///
/// ## Example
///
/// ```rust,ignore
/// use ssd1306::I2cInterface;
///
/// let interface = I2cInterface::with_address(i2c, 0x3D);
/// ```
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new interface at a custom 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address used for every write
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send(&mut self, control: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[control, value])
    }
}
