use hdc1080_rust::*;
use linux_embedded_hal::{Delay, I2cdev};

fn main() {
    // Initialize I2C
    let i2c_dev = I2cdev::new("/dev/i2c-1").unwrap();
    // Initialize the hdc1080 sensor communication with separate reads
    let mut hdc1080 = Hdc1080::new(i2c_dev, Delay).unwrap();

    let configuration = hdc1080.read_configuration().unwrap();
    println!("Configuration register: 0x{:04x}", configuration);

    let temperature = hdc1080.temperature().unwrap();
    println!("Temperature: {:.*} °C", 2, temperature);

    let humidity = hdc1080.humidity().unwrap();
    println!("Humidity: {:.*} %", 1, humidity);

    // Switching to combined reads needs a new driver
    let (i2c_dev, delay) = hdc1080.release();
    let mut settings = DeviceSettings::new();
    settings.set_operation_mode(OperationMode::Combined);
    let mut hdc1080 = Hdc1080::with_settings(i2c_dev, delay, &settings).unwrap();

    let (temperature, humidity) = hdc1080.temperature_and_humidity().unwrap();
    println!("Combined: {:.*} °C, {:.*} %", 2, temperature, 1, humidity);
}
