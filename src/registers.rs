// HDC1080 register map, see datasheet section 8.6 "Register Map"

pub const HDC1080_I2C_ADDR_DEFAULT: u8 = 0x40;

// Register addresses (pointer values)
pub const HDC1080_REGADDR_TEMPERATURE: u8 = 0x00;
pub const HDC1080_REGADDR_HUMIDITY: u8 = 0x01;
pub const HDC1080_REGADDR_CONFIGURATION: u8 = 0x02;

// Configuration Register 0x02 fields (16 bit, MSB first)
// Bit 12: mode of acquisition
pub const HDC1080_FIELD_CONF_MODE_SEPARATE: u16 = 0x0000;
pub const HDC1080_FIELD_CONF_MODE_COMBINED: u16 = 0x1000;

// Bit 10: temperature measurement resolution
pub const HDC1080_FIELD_CONF_TRES_14BIT: u16 = 0x0000;

// Bits 9:8: humidity measurement resolution
pub const HDC1080_FIELD_CONF_HRES_14BIT: u16 = 0x0000;

// Bit 13: heater
pub const HDC1080_FIELD_CONF_HEATER_OFF: u16 = 0x0000;

pub const HDC1080_MASK_CONF_MODE: u16 = 0x1000;

// Conversion wait times in ms. Datasheet worst case at 14 bit resolution is
// 6.5 ms for a single value and about 13 ms for both, padded for host jitter.
pub const HDC1080_SINGLE_CONVERSION_DELAY_MS: u8 = 15;
pub const HDC1080_COMBINED_CONVERSION_DELAY_MS: u8 = 20;
