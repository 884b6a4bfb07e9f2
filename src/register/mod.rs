//! Definiciones de registros para el MPU6050
//!
//! Todas las direcciones son absolutas y las fija el hardware; el driver
//! nunca las calcula.

/// Mapa de registros del MPU6050
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    // Registros de self-test
    SelfTestX = 0x0D,
    SelfTestY = 0x0E,
    SelfTestZ = 0x0F,
    SelfTestA = 0x10,

    // Registros de configuración
    SmplrtDiv = 0x19,
    Config = 0x1A,
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    FifoEn = 0x23,

    // Maestro I2C auxiliar
    I2cMstCtrl = 0x24,
    I2cSlv0Addr = 0x25,
    I2cSlv0Reg = 0x26,
    I2cSlv0Ctrl = 0x27,
    I2cSlv1Addr = 0x28,
    I2cSlv1Reg = 0x29,
    I2cSlv1Ctrl = 0x2A,
    I2cSlv2Addr = 0x2B,
    I2cSlv2Reg = 0x2C,
    I2cSlv2Ctrl = 0x2D,
    I2cSlv3Addr = 0x2E,
    I2cSlv3Reg = 0x2F,
    I2cSlv3Ctrl = 0x30,
    I2cSlv4Addr = 0x31,
    I2cSlv4Reg = 0x32,
    I2cSlv4Ctrl = 0x33,
    I2cSlv4Do = 0x34,
    I2cSlv4Di = 0x35,
    I2cMstStatus = 0x36,

    // Interrupciones
    IntPinCfg = 0x37,
    IntEnable = 0x38,
    IntStatus = 0x3A,

    // Registros de datos (bloque de ráfaga)
    AccelXoutH = 0x3B,
    AccelXoutL = 0x3C,
    AccelYoutH = 0x3D,
    AccelYoutL = 0x3E,
    AccelZoutH = 0x3F,
    AccelZoutL = 0x40,
    TempOutH = 0x41,
    TempOutL = 0x42,
    GyroXoutH = 0x43,
    GyroXoutL = 0x44,
    GyroYoutH = 0x45,
    GyroYoutL = 0x46,
    GyroZoutH = 0x47,
    GyroZoutL = 0x48,

    // Datos de sensores externos
    ExtSensData00 = 0x49,
    ExtSensData01 = 0x4A,
    ExtSensData02 = 0x4B,
    ExtSensData03 = 0x4C,
    ExtSensData04 = 0x4D,
    ExtSensData05 = 0x4E,
    ExtSensData06 = 0x4F,
    ExtSensData07 = 0x50,
    ExtSensData08 = 0x51,
    ExtSensData09 = 0x52,
    ExtSensData10 = 0x53,
    ExtSensData11 = 0x54,
    ExtSensData12 = 0x55,
    ExtSensData13 = 0x56,
    ExtSensData14 = 0x57,
    ExtSensData15 = 0x58,
    ExtSensData16 = 0x59,
    ExtSensData17 = 0x5A,
    ExtSensData18 = 0x5B,
    ExtSensData19 = 0x5C,
    ExtSensData20 = 0x5D,
    ExtSensData21 = 0x5E,
    ExtSensData22 = 0x5F,
    ExtSensData23 = 0x60,

    I2cSlv0Do = 0x63,
    I2cSlv1Do = 0x64,
    I2cSlv2Do = 0x65,
    I2cSlv3Do = 0x66,

    I2cMstDelayCtrl = 0x67,
    SignalPathReset = 0x68,
    UserCtrl = 0x6A,
    PwrMgmt1 = 0x6B,
    PwrMgmt2 = 0x6C,

    // FIFO
    FifoCountH = 0x72,
    FifoCountL = 0x73,
    FifoRW = 0x74,

    // Identificación
    WhoAmI = 0x75,
}

impl Register {
    /// Dirección del registro dentro del mapa del dispositivo
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg.addr()
    }
}

/// Primer registro del bloque de ráfaga con los datos de los sensores
pub const BURST_START: Register = Register::AccelXoutH;

/// Longitud del bloque de ráfaga: accel X/Y/Z, temperatura, gyro X/Y/Z
pub const BURST_LEN: usize = 14;

/// Bits útiles para configuración y control
pub mod bits {
    // CONFIG
    pub const DLPF_CFG: u8 = 0x07; // bits [2:0]

    // GYRO_CONFIG / ACCEL_CONFIG
    pub const GYRO_FS_SEL: u8 = 0x18; // bits [4:3]
    pub const ACCEL_FS_SEL: u8 = 0x18; // bits [4:3]
    pub const FS_SEL_SHIFT: u8 = 3;

    // INT_PIN_CFG
    pub const I2C_BYPASS_EN: u8 = 0x02;

    // SIGNAL_PATH_RESET
    pub const GYRO_RESET: u8 = 0x04;
    pub const ACCEL_RESET: u8 = 0x02;
    pub const TEMP_RESET: u8 = 0x01;

    // PWR_MGMT_1
    pub const DEVICE_RESET: u8 = 0x80;
    pub const SLEEP: u8 = 0x40;
    /// Polaridad invertida: un 1 apaga el sensor de temperatura
    pub const TEMP_DIS: u8 = 0x08;
    pub const CLKSEL: u8 = 0x07; // bits [2:0]
}
