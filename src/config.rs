//! Configuración completa del dispositivo, aplicada por `Mpu6050::configure`

use crate::controls::SampleRate;
use crate::types::{AccelFullScaleRange, ClockSource, DlpfMode, GyroFullScaleRange};

/// Dirección I2C por defecto (AD0 a nivel bajo)
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Dirección I2C alternativa (AD0 a nivel alto)
pub const ALTERNATE_ADDRESS: u8 = 0x69;

/// Valor esperado en WHO_AM_I
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Parámetros de arranque del sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mpu6050Config {
    pub sample_rate: SampleRate,
    pub dlpf: DlpfMode,
    pub gyro_range: GyroFullScaleRange,
    pub accel_range: AccelFullScaleRange,
    pub clock_source: ClockSource,
    pub temperature_enabled: bool,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            sample_rate: SampleRate::default(),
            dlpf: DlpfMode::default(),
            gyro_range: GyroFullScaleRange::default(),
            accel_range: AccelFullScaleRange::default(),
            clock_source: ClockSource::default(),
            temperature_enabled: true,
        }
    }
}

impl Mpu6050Config {
    pub fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_dlpf(mut self, dlpf: DlpfMode) -> Self {
        self.dlpf = dlpf;
        self
    }

    pub fn with_gyro_range(mut self, range: GyroFullScaleRange) -> Self {
        self.gyro_range = range;
        self
    }

    pub fn with_accel_range(mut self, range: AccelFullScaleRange) -> Self {
        self.accel_range = range;
        self
    }

    pub fn with_clock_source(mut self, clock_source: ClockSource) -> Self {
        self.clock_source = clock_source;
        self
    }

    pub fn with_temperature(mut self, enabled: bool) -> Self {
        self.temperature_enabled = enabled;
        self
    }

    /// Frecuencia de salida resultante (Hz)
    pub fn output_rate(&self) -> f32 {
        self.sample_rate.to_frequency(self.dlpf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_power_on() {
        let config = Mpu6050Config::default();
        assert_eq!(config.gyro_range, GyroFullScaleRange::Fs250Dps);
        assert_eq!(config.accel_range, AccelFullScaleRange::Fs2G);
        assert_eq!(config.sample_rate.to_divider(), 0);
        assert!(config.temperature_enabled);
    }

    #[test]
    fn test_builder() {
        let config = Mpu6050Config::default()
            .with_dlpf(DlpfMode::Hz44)
            .with_sample_rate(SampleRate::Hz100)
            .with_accel_range(AccelFullScaleRange::Fs8G);
        assert_eq!(config.accel_range, AccelFullScaleRange::Fs8G);
        assert_eq!(config.output_rate(), 100.0);
    }
}
