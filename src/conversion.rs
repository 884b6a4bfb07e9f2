//! Funciones de conversión para datos del sensor MPU6050
//!
//! Este módulo convierte las palabras big-endian del bloque de ráfaga a
//! cuentas raw y a unidades físicas: aceleración en G, velocidad angular en
//! grados por segundo y temperatura en grados Celsius.

use crate::types::{AccelFullScaleRange, GyroFullScaleRange};

/// Sensibilidad del sensor de temperatura (LSB/°C)
pub const TEMP_SENSITIVITY: f32 = 340.0;

/// Desplazamiento del sensor de temperatura (°C)
pub const TEMP_OFFSET: f32 = 36.53;

/// Palabra big-endian de 16 bits formada por `bytes[0]` (alto) y `bytes[1]` (bajo)
#[inline]
pub fn be_word(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Igual que [`be_word`], interpretada en complemento a dos
#[inline]
pub fn be_word_signed(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

/// Convierte datos brutos de acelerómetro a G según la escala configurada
///
/// # Arguments
/// * `raw` - Valores brutos del acelerómetro [x, y, z]
/// * `range` - Escala completa del acelerómetro
///
/// # Returns
/// Aceleración en G [x, y, z]
pub fn accel_raw_to_g(raw: [i16; 3], range: AccelFullScaleRange) -> [f32; 3] {
    let factor = range.sensitivity();
    [
        raw[0] as f32 / factor,
        raw[1] as f32 / factor,
        raw[2] as f32 / factor,
    ]
}

/// Convierte datos brutos de giroscopio a grados/segundo según la escala configurada
pub fn gyro_raw_to_dps(raw: [i16; 3], range: GyroFullScaleRange) -> [f32; 3] {
    let factor = range.sensitivity();
    [
        raw[0] as f32 / factor,
        raw[1] as f32 / factor,
        raw[2] as f32 / factor,
    ]
}

/// Convierte datos brutos de temperatura a grados Celsius
///
/// Fórmula del fabricante: Temp °C = TEMP_OUT / 340 + 36.53
pub fn temp_raw_to_celsius(raw: i16) -> f32 {
    raw as f32 / TEMP_SENSITIVITY + TEMP_OFFSET
}
