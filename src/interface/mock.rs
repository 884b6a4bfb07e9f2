//! Bus I2C simulado para las pruebas del driver

use embedded_hal::blocking::i2c;

/// Transacción registrada por el bus simulado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Escritura: registro seguido de los datos
    Write { addr: u8, bytes: Vec<u8> },
    /// Lectura en ráfaga a partir de `reg`
    WriteRead { addr: u8, reg: u8, len: usize },
}

/// Errores inyectables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// El dispositivo no respondió a su dirección
    Nack,
}

/// Banco de 256 registros con autoincremento de dirección
#[derive(Debug)]
pub struct MockBus {
    registers: [u8; 256],
    transactions: Vec<Transaction>,
    fail_next_read: bool,
    fail_next_write: bool,
}

impl MockBus {
    pub fn new() -> Self {
        let mut registers = [0u8; 256];
        // WHO_AM_I de fábrica
        registers[0x75] = 0x68;
        // PWR_MGMT_1 tras el encendido: SLEEP activo
        registers[0x6B] = 0x40;
        Self {
            registers,
            transactions: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
        }
    }

    /// Precarga registros consecutivos a partir de `start`
    pub fn load(&mut self, start: u8, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.registers[start as usize + i] = *b;
        }
    }

    pub fn register(&self, reg: u8) -> u8 {
        self.registers[reg as usize]
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    pub fn fail_next_read(&mut self) {
        self.fail_next_read = true;
    }

    pub fn fail_next_write(&mut self) {
        self.fail_next_write = true;
    }
}

impl i2c::Write for MockBus {
    type Error = MockError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(MockError::Nack);
        }
        self.transactions.push(Transaction::Write {
            addr: address,
            bytes: bytes.to_vec(),
        });
        if let Some((reg, data)) = bytes.split_first() {
            self.load(*reg, data);
        }
        Ok(())
    }
}

impl i2c::WriteRead for MockBus {
    type Error = MockError;

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(MockError::Nack);
        }
        let reg = bytes[0];
        self.transactions.push(Transaction::WriteRead {
            addr: address,
            reg,
            len: buffer.len(),
        });
        let start = reg as usize;
        buffer.copy_from_slice(&self.registers[start..start + buffer.len()]);
        Ok(())
    }
}
