//! Módulo de abstracción para el bus de comunicación con el MPU6050
//!
//! El driver no es dueño del bus: lo toma prestado y pasa la dirección del
//! dispositivo en cada transacción, de modo que un mismo bus puede servir a
//! varios dispositivos.

use embedded_hal::blocking::i2c;

#[cfg(test)]
pub(crate) mod mock;

/// Máximo de bytes de datos en una escritura
pub const MAX_WRITE_LEN: usize = 16;

/// Error genérico para interfaces de comunicación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceError<E> {
    /// Error de comunicación I2C, tal cual lo devuelve el bus
    I2cError(E),
    /// Parámetro inválido
    InvalidParameter,
}

/// Trait para abstraer la comunicación con el dispositivo
pub trait Interface {
    /// Tipo de error que puede producir la interfaz
    type Error;

    /// Escribe `data` a partir del registro `reg` del dispositivo `addr`
    fn write_reg(&mut self, addr: u8, reg: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Lee `data.len()` bytes consecutivos a partir del registro `reg`
    fn read_reg(&mut self, addr: u8, reg: u8, data: &mut [u8]) -> Result<(), Self::Error>;
}

impl<I2C, E> Interface for I2C
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    type Error = InterfaceError<E>;

    fn write_reg(&mut self, addr: u8, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        if data.len() > MAX_WRITE_LEN {
            return Err(InterfaceError::InvalidParameter);
        }

        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = reg;
        buffer[1..data.len() + 1].copy_from_slice(data);

        i2c::Write::write(self, addr, &buffer[..data.len() + 1]).map_err(InterfaceError::I2cError)
    }

    fn read_reg(&mut self, addr: u8, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        // Repeated start: el bus no se libera entre bytes
        i2c::WriteRead::write_read(self, addr, &[reg], data).map_err(InterfaceError::I2cError)
    }
}
