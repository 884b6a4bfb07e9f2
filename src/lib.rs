//! Biblioteca Rust para el sensor de movimiento InvenSense MPU6050
//!
//! Esta biblioteca proporciona una interfaz para controlar el sensor MPU6050,
//! un IMU de 6 ejes con giroscopio, acelerómetro y sensor de temperatura,
//! sobre cualquier bus I2C de `embedded-hal`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod config;
pub mod controls;
pub mod conversion;
pub mod device;
pub mod interface;
pub mod register;
pub mod types;

// Re-exports públicos
pub use config::{Mpu6050Config, ALTERNATE_ADDRESS, DEFAULT_ADDRESS, WHO_AM_I_VALUE};
pub use controls::{AccelData, GyroData, SampleRate};
pub use conversion::{accel_raw_to_g, gyro_raw_to_dps, temp_raw_to_celsius};
pub use device::{Mpu6050, Mpu6050Error};
pub use interface::{Interface, InterfaceError};
pub use register::Register;
pub use types::{AccelFullScaleRange, ClockSource, DlpfMode, GyroFullScaleRange};

/// Crea un nuevo dispositivo MPU6050 sobre un bus I2C prestado
pub fn new_i2c_device<I>(bus: &mut I, address: u8) -> Mpu6050<'_, I>
where
    I: Interface,
{
    Mpu6050::new(bus, address)
}
