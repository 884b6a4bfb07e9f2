//! Definiciones de tipos y constantes comunes para el MPU6050

use crate::register::bits;

/// Escalas completas disponibles para el giroscopio.
///
/// Con ±250 dps, una lectura de 32767 corresponde a 250 grados/segundo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GyroFullScaleRange {
    /// ±250 dps
    Fs250Dps = 0,
    /// ±500 dps
    Fs500Dps = 1,
    /// ±1000 dps
    Fs1000Dps = 2,
    /// ±2000 dps
    Fs2000Dps = 3,
}

impl Default for GyroFullScaleRange {
    fn default() -> Self {
        GyroFullScaleRange::Fs250Dps
    }
}

impl From<u8> for GyroFullScaleRange {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => GyroFullScaleRange::Fs250Dps,
            1 => GyroFullScaleRange::Fs500Dps,
            2 => GyroFullScaleRange::Fs1000Dps,
            _ => GyroFullScaleRange::Fs2000Dps,
        }
    }
}

impl GyroFullScaleRange {
    /// Bits a escribir en GYRO_CONFIG (ya desplazados a [4:3])
    pub fn as_register(self) -> u8 {
        (self as u8) << bits::FS_SEL_SHIFT
    }

    /// Extrae la escala configurada a partir del contenido de GYRO_CONFIG
    pub fn from_register(value: u8) -> Self {
        Self::from((value & bits::GYRO_FS_SEL) >> bits::FS_SEL_SHIFT)
    }

    /// Sensibilidad en LSB/(°/s)
    pub fn sensitivity(self) -> f32 {
        match self {
            GyroFullScaleRange::Fs250Dps => 131.0,
            GyroFullScaleRange::Fs500Dps => 65.5,
            GyroFullScaleRange::Fs1000Dps => 32.8,
            GyroFullScaleRange::Fs2000Dps => 16.4,
        }
    }
}

/// Escalas completas disponibles para el acelerómetro.
///
/// Con ±2g, una lectura de 32767 corresponde a 2g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AccelFullScaleRange {
    /// ±2g
    Fs2G = 0,
    /// ±4g
    Fs4G = 1,
    /// ±8g
    Fs8G = 2,
    /// ±16g
    Fs16G = 3,
}

impl Default for AccelFullScaleRange {
    fn default() -> Self {
        AccelFullScaleRange::Fs2G
    }
}

impl From<u8> for AccelFullScaleRange {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => AccelFullScaleRange::Fs2G,
            1 => AccelFullScaleRange::Fs4G,
            2 => AccelFullScaleRange::Fs8G,
            _ => AccelFullScaleRange::Fs16G,
        }
    }
}

impl AccelFullScaleRange {
    /// Bits a escribir en ACCEL_CONFIG (ya desplazados a [4:3])
    pub fn as_register(self) -> u8 {
        (self as u8) << bits::FS_SEL_SHIFT
    }

    /// Extrae la escala configurada a partir del contenido de ACCEL_CONFIG
    pub fn from_register(value: u8) -> Self {
        Self::from((value & bits::ACCEL_FS_SEL) >> bits::FS_SEL_SHIFT)
    }

    /// Sensibilidad en LSB/g
    pub fn sensitivity(self) -> f32 {
        match self {
            AccelFullScaleRange::Fs2G => 16384.0,
            AccelFullScaleRange::Fs4G => 8192.0,
            AccelFullScaleRange::Fs8G => 4096.0,
            AccelFullScaleRange::Fs16G => 2048.0,
        }
    }
}

/// Fuente de reloj (PWR_MGMT_1, bits [2:0])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockSource {
    /// Oscilador interno de 8MHz
    Internal8MHz = 0,
    /// PLL con referencia en el eje X del giroscopio
    PllGyroX = 1,
    /// PLL con referencia en el eje Y del giroscopio
    PllGyroY = 2,
    /// PLL con referencia en el eje Z del giroscopio
    PllGyroZ = 3,
    /// PLL con referencia externa de 32.768kHz
    PllExternal32K = 4,
    /// PLL con referencia externa de 19.2MHz
    PllExternal19M = 5,
    /// Detiene el reloj y mantiene el generador de tiempos en reset
    Stopped = 7,
}

impl Default for ClockSource {
    fn default() -> Self {
        ClockSource::PllGyroX
    }
}

/// Configuración del filtro paso bajo digital (CONFIG, bits [2:0]).
/// Los nombres indican el ancho de banda del acelerómetro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DlpfMode {
    /// 260 Hz (filtro desactivado en la práctica)
    Hz260 = 0,
    /// 184 Hz
    Hz184 = 1,
    /// 94 Hz
    Hz94 = 2,
    /// 44 Hz
    Hz44 = 3,
    /// 21 Hz
    Hz21 = 4,
    /// 10 Hz
    Hz10 = 5,
    /// 5 Hz
    Hz5 = 6,
}

impl Default for DlpfMode {
    fn default() -> Self {
        DlpfMode::Hz260
    }
}

impl DlpfMode {
    /// Tasa de salida del giroscopio (Hz) sobre la que actúa el divisor
    pub fn gyro_output_rate(self) -> f32 {
        match self {
            DlpfMode::Hz260 => 8000.0,
            _ => 1000.0,
        }
    }
}
