use crate::config::{Mpu6050Config, DEFAULT_ADDRESS, WHO_AM_I_VALUE};
use crate::controls::{AccelData, GyroData};
use crate::conversion::{accel_raw_to_g, be_word, be_word_signed, gyro_raw_to_dps, temp_raw_to_celsius};
use crate::interface::Interface;
use crate::register::{bits, Register, BURST_LEN, BURST_START};
use crate::types::{AccelFullScaleRange, ClockSource, DlpfMode, GyroFullScaleRange};

// Índices de palabra dentro del bloque de ráfaga
const ACCEL_X: usize = 0;
const ACCEL_Y: usize = 1;
const ACCEL_Z: usize = 2;
const TEMP: usize = 3;
const GYRO_X: usize = 4;
const GYRO_Y: usize = 5;
const GYRO_Z: usize = 6;

/// Driver del MPU6050.
///
/// Toma prestado el bus durante toda su vida y guarda la última muestra
/// leída con [`Mpu6050::read_data`]. Los accesores decodifican esa muestra
/// sin tocar el bus.
///
/// No hay bloqueo interno: las secuencias leer-modificar-escribir no son
/// atómicas si otro usuario del bus accede al mismo registro.
pub struct Mpu6050<'a, I> {
    bus: &'a mut I,
    address: u8,
    data: [u8; BURST_LEN],
    gyro_range: GyroFullScaleRange,
    accel_range: AccelFullScaleRange,
}

/// Errores del driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mpu6050Error<E> {
    /// Error del bus, propagado sin modificar
    Bus(E),
    /// WHO_AM_I no coincide con el valor esperado
    WhoAmIMismatch(u8),
}

impl<'a, I> Mpu6050<'a, I>
where
    I: Interface,
{
    /// Crea el driver sobre un bus prestado
    pub fn new(bus: &'a mut I, address: u8) -> Self {
        Self {
            bus,
            address,
            data: [0u8; BURST_LEN],
            gyro_range: GyroFullScaleRange::default(),
            accel_range: AccelFullScaleRange::default(),
        }
    }

    /// Crea el driver con la dirección de fábrica (0x68)
    pub fn with_default_address(bus: &'a mut I) -> Self {
        Self::new(bus, DEFAULT_ADDRESS)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Devuelve el bus prestado
    pub fn release(self) -> &'a mut I {
        self.bus
    }

    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut I {
        &mut *self.bus
    }

    /// Lee `buffer.len()` registros consecutivos a partir de `reg`.
    ///
    /// No se valida que la longitud quede dentro del mapa de registros.
    pub fn read_register(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Mpu6050Error<I::Error>> {
        self.bus
            .read_reg(self.address, reg.addr(), buffer)
            .map_err(Mpu6050Error::Bus)
    }

    /// Lee un único registro
    pub fn read_register_byte(&mut self, reg: Register) -> Result<u8, Mpu6050Error<I::Error>> {
        let mut data = [0u8];
        self.read_register(reg, &mut data)?;
        Ok(data[0])
    }

    /// Escribe un byte en un registro
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Mpu6050Error<I::Error>> {
        self.bus
            .write_reg(self.address, reg.addr(), &[value])
            .map_err(Mpu6050Error::Bus)
    }

    /// Escribe varios bytes a partir de `reg` (autoincremento de dirección)
    pub fn write_registers(&mut self, reg: Register, values: &[u8]) -> Result<(), Mpu6050Error<I::Error>> {
        self.bus
            .write_reg(self.address, reg.addr(), values)
            .map_err(Mpu6050Error::Bus)
    }

    /// Lee el registro, aplica `f` y escribe el resultado
    pub fn modify_register<F>(&mut self, reg: Register, f: F) -> Result<(), Mpu6050Error<I::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register_byte(reg)?;
        self.write_register(reg, f(value))
    }

    /// Sustituye los bits de `bit_mask` por `new_value`, conservando el resto.
    ///
    /// `new_value` debe venir ya desplazado dentro de la máscara; no se
    /// desplaza ni se enmascara aquí.
    pub fn set_register_bits(
        &mut self,
        reg: Register,
        bit_mask: u8,
        new_value: u8,
    ) -> Result<(), Mpu6050Error<I::Error>> {
        self.modify_register(reg, |value| (value & !bit_mask) | new_value)
    }

    fn set_flag(&mut self, reg: Register, flag: u8, enabled: bool) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_register_bits(reg, flag, if enabled { flag } else { 0 })
    }

    /// Configura el divisor de la tasa de muestreo.
    /// Tasa de salida = salida del giroscopio / (1 + divider).
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Mpu6050Error<I::Error>> {
        self.write_register(Register::SmplrtDiv, divider)
    }

    pub fn read_sample_rate_divider(&mut self) -> Result<u8, Mpu6050Error<I::Error>> {
        self.read_register_byte(Register::SmplrtDiv)
    }

    /// Configura la escala completa del giroscopio (GYRO_CONFIG[4:3])
    pub fn set_gyro_full_scale_range(&mut self, range: GyroFullScaleRange) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_register_bits(Register::GyroConfig, bits::GYRO_FS_SEL, range.as_register())?;
        self.gyro_range = range;
        log::debug!("Escala del giroscopio: {:?}", range);
        Ok(())
    }

    /// Configura la escala completa del acelerómetro (ACCEL_CONFIG[4:3])
    pub fn set_accel_full_scale_range(&mut self, range: AccelFullScaleRange) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_register_bits(Register::AccelConfig, bits::ACCEL_FS_SEL, range.as_register())?;
        self.accel_range = range;
        log::debug!("Escala del acelerómetro: {:?}", range);
        Ok(())
    }

    /// Lee la escala del giroscopio del dispositivo y sincroniza la escala registrada
    pub fn read_gyro_full_scale_range(&mut self) -> Result<GyroFullScaleRange, Mpu6050Error<I::Error>> {
        let value = self.read_register_byte(Register::GyroConfig)?;
        self.gyro_range = GyroFullScaleRange::from_register(value);
        Ok(self.gyro_range)
    }

    /// Lee la escala del acelerómetro del dispositivo y sincroniza la escala registrada
    pub fn read_accel_full_scale_range(&mut self) -> Result<AccelFullScaleRange, Mpu6050Error<I::Error>> {
        let value = self.read_register_byte(Register::AccelConfig)?;
        self.accel_range = AccelFullScaleRange::from_register(value);
        Ok(self.accel_range)
    }

    /// Última escala del giroscopio escrita (o leída) por este driver
    pub fn gyro_range(&self) -> GyroFullScaleRange {
        self.gyro_range
    }

    /// Última escala del acelerómetro escrita (o leída) por este driver
    pub fn accel_range(&self) -> AccelFullScaleRange {
        self.accel_range
    }

    /// Configura el filtro paso bajo digital (CONFIG[2:0])
    pub fn set_dlpf_mode(&mut self, mode: DlpfMode) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_register_bits(Register::Config, bits::DLPF_CFG, mode as u8)
    }

    /// Selecciona la fuente de reloj (PWR_MGMT_1[2:0])
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_register_bits(Register::PwrMgmt1, bits::CLKSEL, source as u8)
    }

    /// Conecta el bus auxiliar (XDA/XCL) directamente al bus principal, de
    /// modo que otros dispositivos se ven "a través" del MPU6050
    pub fn set_i2c_bypass_enabled(&mut self, enabled: bool) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_flag(Register::IntPinCfg, bits::I2C_BYPASS_EN, enabled)
    }

    pub fn is_i2c_bypass_enabled(&mut self) -> Result<bool, Mpu6050Error<I::Error>> {
        Ok(self.read_register_byte(Register::IntPinCfg)? & bits::I2C_BYPASS_EN != 0)
    }

    /// Enciende o apaga el sensor de temperatura.
    ///
    /// El bit TEMP_DIS tiene polaridad invertida: `true` lo borra.
    pub fn set_temp_enabled(&mut self, enabled: bool) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_flag(Register::PwrMgmt1, bits::TEMP_DIS, !enabled)
    }

    pub fn is_temp_enabled(&mut self) -> Result<bool, Mpu6050Error<I::Error>> {
        Ok(self.read_register_byte(Register::PwrMgmt1)? & bits::TEMP_DIS == 0)
    }

    /// `true` duerme el dispositivo, `false` lo despierta
    pub fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_flag(Register::PwrMgmt1, bits::SLEEP, enabled)
    }

    pub fn is_sleep_enabled(&mut self) -> Result<bool, Mpu6050Error<I::Error>> {
        Ok(self.read_register_byte(Register::PwrMgmt1)? & bits::SLEEP != 0)
    }

    /// Reinicia los caminos de señal indicados con una sola escritura
    pub fn reset_signal_paths(
        &mut self,
        reset_gyro: bool,
        reset_accel: bool,
        reset_temp: bool,
    ) -> Result<(), Mpu6050Error<I::Error>> {
        let mut value = 0u8;
        if reset_gyro {
            value |= bits::GYRO_RESET;
        }
        if reset_accel {
            value |= bits::ACCEL_RESET;
        }
        if reset_temp {
            value |= bits::TEMP_RESET;
        }
        log::debug!("Reset de caminos de señal: 0x{:02X}", value);
        self.write_register(Register::SignalPathReset, value)
    }

    /// Reinicia todos los registros y caminos de señal (DEVICE_RESET).
    ///
    /// El bit se borra solo en el dispositivo; no se espera a que termine.
    pub fn reset_signal_paths_and_registers(&mut self) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_flag(Register::PwrMgmt1, bits::DEVICE_RESET, true)?;
        self.gyro_range = GyroFullScaleRange::default();
        self.accel_range = AccelFullScaleRange::default();
        log::debug!("Reset completo del dispositivo");
        Ok(())
    }

    /// Valor del registro WHO_AM_I
    pub fn who_am_i(&mut self) -> Result<u8, Mpu6050Error<I::Error>> {
        self.read_register_byte(Register::WhoAmI)
    }

    /// Comprueba que el dispositivo responde con la identidad de un MPU6050
    pub fn verify_identity(&mut self) -> Result<(), Mpu6050Error<I::Error>> {
        let who = self.who_am_i()?;
        if who != WHO_AM_I_VALUE {
            log::warn!(
                "WHO_AM_I inesperado en 0x{:02X}: 0x{:02X} (esperado 0x{:02X})",
                self.address,
                who,
                WHO_AM_I_VALUE
            );
            return Err(Mpu6050Error::WhoAmIMismatch(who));
        }
        Ok(())
    }

    /// Aplica una configuración completa
    pub fn configure(&mut self, config: &Mpu6050Config) -> Result<(), Mpu6050Error<I::Error>> {
        self.set_clock_source(config.clock_source)?;
        self.set_dlpf_mode(config.dlpf)?;
        self.set_sample_rate_divider(config.sample_rate.to_divider())?;
        self.set_gyro_full_scale_range(config.gyro_range)?;
        self.set_accel_full_scale_range(config.accel_range)?;
        self.set_temp_enabled(config.temperature_enabled)
    }

    /// Verifica la identidad, despierta el dispositivo y aplica `config`
    pub fn init(&mut self, config: &Mpu6050Config) -> Result<(), Mpu6050Error<I::Error>> {
        self.verify_identity()?;
        self.set_sleep_enabled(false)?;
        self.configure(config)?;
        log::info!(
            "MPU6050 en 0x{:02X} inicializado a {} Hz",
            self.address,
            config.output_rate()
        );
        Ok(())
    }

    /// Lee en una sola ráfaga los 14 bytes de datos de los sensores.
    ///
    /// Si la lectura falla se conserva la muestra anterior.
    pub fn read_data(&mut self) -> Result<(), Mpu6050Error<I::Error>> {
        let mut data = [0u8; BURST_LEN];
        self.read_register(BURST_START, &mut data)?;
        self.data = data;
        Ok(())
    }

    /// Bytes de la última muestra tal cual llegaron del bus
    pub fn raw_data(&self) -> &[u8; BURST_LEN] {
        &self.data
    }

    fn word(&self, index: usize) -> [u8; 2] {
        [self.data[2 * index], self.data[2 * index + 1]]
    }

    pub fn accel_x(&self) -> u16 {
        be_word(self.word(ACCEL_X))
    }

    pub fn accel_y(&self) -> u16 {
        be_word(self.word(ACCEL_Y))
    }

    pub fn accel_z(&self) -> u16 {
        be_word(self.word(ACCEL_Z))
    }

    pub fn gyro_x(&self) -> i16 {
        be_word_signed(self.word(GYRO_X))
    }

    pub fn gyro_y(&self) -> i16 {
        be_word_signed(self.word(GYRO_Y))
    }

    pub fn gyro_z(&self) -> i16 {
        be_word_signed(self.word(GYRO_Z))
    }

    pub fn temp_raw(&self) -> i16 {
        be_word_signed(self.word(TEMP))
    }

    /// Temperatura en grados Celsius
    pub fn temperature(&self) -> f32 {
        temp_raw_to_celsius(self.temp_raw())
    }

    /// Acelerómetro [x, y, z] en complemento a dos
    pub fn accel_raw(&self) -> [i16; 3] {
        [
            be_word_signed(self.word(ACCEL_X)),
            be_word_signed(self.word(ACCEL_Y)),
            be_word_signed(self.word(ACCEL_Z)),
        ]
    }

    /// Giroscopio [x, y, z]
    pub fn gyro_raw(&self) -> [i16; 3] {
        [self.gyro_x(), self.gyro_y(), self.gyro_z()]
    }

    /// Acelerómetro en G según la escala registrada
    pub fn accel_g(&self) -> [f32; 3] {
        accel_raw_to_g(self.accel_raw(), self.accel_range)
    }

    /// Giroscopio en grados/segundo según la escala registrada
    pub fn gyro_dps(&self) -> [f32; 3] {
        gyro_raw_to_dps(self.gyro_raw(), self.gyro_range)
    }

    pub fn accel(&self) -> AccelData {
        AccelData::from(self.accel_g())
    }

    pub fn gyro(&self) -> GyroData {
        GyroData::from(self.gyro_dps())
    }
}
