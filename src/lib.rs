//! This crate is a Rust implementation for the HDC1080 temperature and humidity sensor from Texas instruments (http://www.ti.com/product/HDC1080).
//!
//! Communication with this sensor is implemented over the I2C bus.
//! It uses the embedded-hal crate to provide abstraction to the hardware I2C implementation/API
//! and to the delay used while the sensor converts.
//! A demo implementation for the Raspberry PI can be found in the demos folder.
//!
//! The sensor has two acquisition modes which are selected once, when the driver is created:
//! * [`OperationMode::Separate`]: temperature and humidity are triggered and read one at a time.
//! * [`OperationMode::Combined`]: one trigger converts both values, which are read back together.
//!
//! ```rust,no_run
//! use hdc1080_rust::*;
//! use linux_embedded_hal::{Delay, I2cdev};
//!
//! fn main() {
//!     // Initialize I2C
//!     let i2c_dev = I2cdev::new("/dev/i2c-1").unwrap();
//!     // Initialize the hdc1080 sensor communication, this writes the configuration register
//!     let mut hdc1080 = Hdc1080::new(i2c_dev, Delay).unwrap();
//!
//!     let temperature = hdc1080.temperature().unwrap();
//!     println!("Temperature: {:.*} °C", 2, temperature);
//!
//!     let humidity = hdc1080.humidity().unwrap();
//!     println!("Humidity: {:.*} %", 1, humidity);
//! }
//! ```

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

use core::fmt;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Read, Write, WriteRead};
use log::{debug, trace};

mod registers;
use registers::*;

pub use registers::HDC1080_I2C_ADDR_DEFAULT;

/// HDC1080 mode of acquisition (configuration register bit 12).
///
/// Default: Separate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Temperature or humidity is acquired, one per trigger.
    Separate,
    /// Temperature and humidity are acquired in sequence, temperature first.
    Combined,
}

impl OperationMode {
    fn field(self) -> u16 {
        match self {
            OperationMode::Separate => HDC1080_FIELD_CONF_MODE_SEPARATE,
            OperationMode::Combined => HDC1080_FIELD_CONF_MODE_COMBINED,
        }
    }

    /// Decodes the mode bit from a raw configuration register value.
    pub fn from_configuration(value: u16) -> Self {
        if value & HDC1080_MASK_CONF_MODE == 0 {
            OperationMode::Separate
        } else {
            OperationMode::Combined
        }
    }
}

impl Default for OperationMode {
    fn default() -> Self {
        OperationMode::Separate
    }
}

#[derive(Debug)]
pub enum Error<E> {
    /// The I2C transaction failed, the bus error is passed on unmodified.
    Bus(E),
    /// The requested measurement is not available in the configured mode.
    WrongMode(OperationMode),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "i2c bus error: {:?}", e),
            Error::WrongMode(OperationMode::Separate) => write!(
                f,
                "sensor configured for separate reads, use temperature or humidity"
            ),
            Error::WrongMode(OperationMode::Combined) => write!(
                f,
                "sensor configured for combined reads, use temperature_and_humidity"
            ),
        }
    }
}

/// Settings applied once when the driver is created.
#[derive(Debug, Clone)]
pub struct DeviceSettings {
    address: u8,
    operation_mode: OperationMode,
}

impl DeviceSettings {
    /// Constructs a new 'DeviceSettings' builder instance with address 0x40 and separate reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use hdc1080_rust::*;
    ///
    /// let mut settings = DeviceSettings::new();
    /// settings.set_operation_mode(OperationMode::Combined);
    /// assert_eq!(settings.get_configuration_register_value(), 0x1000);
    /// ```
    pub fn new() -> Self {
        Self {
            address: HDC1080_I2C_ADDR_DEFAULT,
            operation_mode: OperationMode::Separate,
        }
    }

    /// Sets the 7 bit I2C address of the sensor.
    pub fn set_address(&mut self, address: u8) -> &mut Self {
        self.address = address;
        self
    }

    /// Sets the mode of acquisition.
    pub fn set_operation_mode(&mut self, mode: OperationMode) -> &mut Self {
        self.operation_mode = mode;
        self
    }

    pub fn get_address(&self) -> u8 {
        self.address
    }

    pub fn get_operation_mode(&self) -> OperationMode {
        self.operation_mode
    }

    /// Creates the configuration register value for these settings.
    /// Only the mode bit is taken from the settings, resolution and heater
    /// stay at their power-on defaults.
    pub fn get_configuration_register_value(&self) -> u16 {
        HDC1080_FIELD_CONF_HEATER_OFF
            | HDC1080_FIELD_CONF_TRES_14BIT
            | HDC1080_FIELD_CONF_HRES_14BIT
            | self.operation_mode.field()
    }
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a raw temperature register value to °C.
pub fn convert_temperature(raw: u16) -> f32 {
    (raw as f32) / 65536.0 * 165.0 - 40.0
}

/// Converts a raw humidity register value to %RH.
///
/// The result is not clamped, readings slightly outside 0..100 are possible.
pub fn convert_humidity(raw: u16) -> f32 {
    (raw as f32) / 65536.0 * 100.0
}

struct I2CHelper<I2C> {
    i2c_dev: I2C,
    i2c_addr: u8,
}

impl<I2C, E> I2CHelper<I2C>
where
    I2C: Write<Error = E> + Read<Error = E> + WriteRead<Error = E>,
{
    fn new(i2c_dev: I2C, i2c_addr: u8) -> Self {
        I2CHelper { i2c_dev, i2c_addr }
    }

    fn read_reg16(&mut self, reg_addr: u8) -> Result<u16, E> {
        let mut buf: [u8; 2] = [0; 2];
        self.i2c_dev
            .write_read(self.i2c_addr, &[reg_addr], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write_reg16(&mut self, reg_addr: u8, value: u16) -> Result<(), E> {
        let [msb, lsb] = value.to_be_bytes();
        self.i2c_dev.write(self.i2c_addr, &[reg_addr, msb, lsb])
    }

    /// Writes only the register pointer, for the data registers this starts a conversion.
    fn write_pointer(&mut self, reg_addr: u8) -> Result<(), E> {
        self.i2c_dev.write(self.i2c_addr, &[reg_addr])
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), E> {
        self.i2c_dev.read(self.i2c_addr, buf)
    }
}

/// HDC1080 driver.
///
/// The configuration register is written once in the constructor and never
/// changed afterwards, create a new driver to use another mode.
pub struct Hdc1080<I2C, D> {
    i2c_helper: I2CHelper<I2C>,
    delay: D,
    operation_mode: OperationMode,
}

impl<I2C, D, E> Hdc1080<I2C, D>
where
    I2C: Write<Error = E> + Read<Error = E> + WriteRead<Error = E>,
    D: DelayMs<u8>,
{
    /// Creates a driver at address 0x40 in separate read mode.
    pub fn new(i2c_dev: I2C, delay: D) -> Result<Self, Error<E>> {
        Self::with_settings(i2c_dev, delay, &DeviceSettings::new())
    }

    /// Creates a driver and writes the configuration register.
    ///
    /// There is no read back of the written value, a missing acknowledge
    /// shows up as [`Error::Bus`].
    ///
    /// ```no_run
    /// use hdc1080_rust::*;
    /// use linux_embedded_hal::{Delay, I2cdev};
    ///
    /// let i2c_dev = I2cdev::new("/dev/i2c-1").unwrap();
    /// let mut hdc1080 = Hdc1080::with_settings(
    ///     i2c_dev,
    ///     Delay,
    ///     DeviceSettings::new().set_operation_mode(OperationMode::Combined),
    /// )
    /// .unwrap();
    /// let (temperature, humidity) = hdc1080.temperature_and_humidity().unwrap();
    /// ```
    pub fn with_settings(
        i2c_dev: I2C,
        delay: D,
        settings: &DeviceSettings,
    ) -> Result<Self, Error<E>> {
        let mut i2c_helper = I2CHelper::new(i2c_dev, settings.get_address());
        let value = settings.get_configuration_register_value();
        debug!(
            "hdc1080@{:#04x}: writing configuration {:#06x} ({:?})",
            settings.get_address(),
            value,
            settings.get_operation_mode()
        );
        i2c_helper
            .write_reg16(HDC1080_REGADDR_CONFIGURATION, value)
            .map_err(Error::Bus)?;

        Ok(Hdc1080 {
            i2c_helper,
            delay,
            operation_mode: settings.get_operation_mode(),
        })
    }

    pub fn address(&self) -> u8 {
        self.i2c_helper.i2c_addr
    }

    pub fn operation_mode(&self) -> OperationMode {
        self.operation_mode
    }

    /// Gives back the I2C bus and the delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c_helper.i2c_dev, self.delay)
    }

    /// Triggers a temperature conversion and returns °C.
    /// Only available in separate read mode.
    pub fn temperature(&mut self) -> Result<f32, Error<E>> {
        self.require_mode(OperationMode::Separate)?;
        let raw = self.measure_single(HDC1080_REGADDR_TEMPERATURE)?;
        Ok(convert_temperature(raw))
    }

    /// Triggers a humidity conversion and returns %RH.
    /// Only available in separate read mode.
    pub fn humidity(&mut self) -> Result<f32, Error<E>> {
        self.require_mode(OperationMode::Separate)?;
        let raw = self.measure_single(HDC1080_REGADDR_HUMIDITY)?;
        Ok(convert_humidity(raw))
    }

    /// Triggers both conversions and returns (°C, %RH) from a single 4 byte read.
    /// Only available in combined read mode.
    pub fn temperature_and_humidity(&mut self) -> Result<(f32, f32), Error<E>> {
        self.require_mode(OperationMode::Combined)?;

        let mut buf: [u8; 4] = [0; 4];
        self.i2c_helper
            .write_pointer(HDC1080_REGADDR_TEMPERATURE)
            .map_err(Error::Bus)?;
        self.delay.delay_ms(HDC1080_COMBINED_CONVERSION_DELAY_MS);
        self.i2c_helper.read(&mut buf).map_err(Error::Bus)?;

        let raw_temperature = u16::from_be_bytes([buf[0], buf[1]]);
        let raw_humidity = u16::from_be_bytes([buf[2], buf[3]]);
        trace!(
            "hdc1080@{:#04x}: raw temperature {:#06x}, raw humidity {:#06x}",
            self.address(),
            raw_temperature,
            raw_humidity
        );

        Ok((
            convert_temperature(raw_temperature),
            convert_humidity(raw_humidity),
        ))
    }

    /// Reads the raw configuration register (16 bit).
    pub fn read_configuration(&mut self) -> Result<u16, Error<E>> {
        self.i2c_helper
            .read_reg16(HDC1080_REGADDR_CONFIGURATION)
            .map_err(Error::Bus)
    }

    fn require_mode(&self, mode: OperationMode) -> Result<(), Error<E>> {
        if self.operation_mode == mode {
            Ok(())
        } else {
            Err(Error::WrongMode(self.operation_mode))
        }
    }

    fn measure_single(&mut self, reg_addr: u8) -> Result<u16, Error<E>> {
        let mut buf: [u8; 2] = [0; 2];
        self.i2c_helper
            .write_pointer(reg_addr)
            .map_err(Error::Bus)?;
        self.delay.delay_ms(HDC1080_SINGLE_CONVERSION_DELAY_MS);
        self.i2c_helper.read(&mut buf).map_err(Error::Bus)?;

        let raw = u16::from_be_bytes(buf);
        trace!(
            "hdc1080@{:#04x}: register {:#04x} raw {:#06x}",
            self.address(),
            reg_addr,
            raw
        );
        Ok(raw)
    }
}
