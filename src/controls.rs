//! Controles básicos para el sensor MPU6050

use crate::types::DlpfMode;

/// Estructura para datos de aceleración en unidades físicas (g)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelData {
    /// Aceleración en el eje X (g)
    pub x: f32,
    /// Aceleración en el eje Y (g)
    pub y: f32,
    /// Aceleración en el eje Z (g)
    pub z: f32,
}

/// Estructura para datos del giroscopio en unidades físicas (grados/segundo)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroData {
    /// Velocidad angular en el eje X (°/s)
    pub x: f32,
    /// Velocidad angular en el eje Y (°/s)
    pub y: f32,
    /// Velocidad angular en el eje Z (°/s)
    pub z: f32,
}

impl From<[f32; 3]> for AccelData {
    fn from(v: [f32; 3]) -> Self {
        Self { x: v[0], y: v[1], z: v[2] }
    }
}

impl From<[f32; 3]> for GyroData {
    fn from(v: [f32; 3]) -> Self {
        Self { x: v[0], y: v[1], z: v[2] }
    }
}

/// Configuración de la tasa de muestreo (SMPLRT_DIV).
///
/// Las frecuencias nominales suponen el DLPF activo (salida del giroscopio a 1kHz).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRate {
    /// 1kHz (divider = 0)
    Hz1000,
    /// 500Hz (divider = 1)
    Hz500,
    /// 200Hz (divider = 4)
    Hz200,
    /// 100Hz (divider = 9)
    Hz100,
    /// 50Hz (divider = 19)
    Hz50,
    /// Tasa personalizada (especificar divider)
    Custom(u8),
}

impl Default for SampleRate {
    fn default() -> Self {
        SampleRate::Custom(0)
    }
}

impl SampleRate {
    /// Convierte la enumeración a un valor de divider
    pub fn to_divider(&self) -> u8 {
        match self {
            SampleRate::Hz1000 => 0,
            SampleRate::Hz500 => 1,
            SampleRate::Hz200 => 4,
            SampleRate::Hz100 => 9,
            SampleRate::Hz50 => 19,
            SampleRate::Custom(div) => *div,
        }
    }

    /// Calcula la frecuencia real en Hz con el filtro indicado.
    /// El hardware aplica `tasa = salida_gyro / (1 + divider)`; el driver no la usa.
    pub fn to_frequency(&self, dlpf: DlpfMode) -> f32 {
        dlpf.gyro_output_rate() / (1.0 + self.to_divider() as f32)
    }
}
