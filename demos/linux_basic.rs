use linux_embedded_hal::I2cdev;
use mpu6050_rs::{
    AccelFullScaleRange, DlpfMode, GyroFullScaleRange, Mpu6050, Mpu6050Config, SampleRate,
    DEFAULT_ADDRESS,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    println!("MPU6050 - Ejemplo básico");

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    // Configurar el manejador para Ctrl+C
    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    // Crear instancia de I2C para Linux
    let mut i2c = match I2cdev::new("/dev/i2c-1") {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };

    let mut device = Mpu6050::new(&mut i2c, DEFAULT_ADDRESS);

    // Reset completo; el bit se borra solo
    if let Err(e) = device.reset_signal_paths_and_registers() {
        eprintln!("Error al resetear el dispositivo: {:?}", e);
        return;
    }
    thread::sleep(Duration::from_millis(100));

    let config = Mpu6050Config::default()
        .with_dlpf(DlpfMode::Hz44)
        .with_sample_rate(SampleRate::Hz100)
        .with_gyro_range(GyroFullScaleRange::Fs500Dps)
        .with_accel_range(AccelFullScaleRange::Fs4G);

    if let Err(e) = device.init(&config) {
        eprintln!("Error al inicializar el dispositivo: {:?}", e);
        return;
    }
    println!(
        "Dispositivo inicializado correctamente ({} Hz)",
        config.output_rate()
    );

    while running.load(Ordering::SeqCst) {
        match device.read_data() {
            Ok(()) => {
                let accel = device.accel();
                let gyro = device.gyro();
                println!(
                    "Accel [g]: {:7.3} {:7.3} {:7.3} | Gyro [dps]: {:8.2} {:8.2} {:8.2} | Temp: {:5.2} °C",
                    accel.x,
                    accel.y,
                    accel.z,
                    gyro.x,
                    gyro.y,
                    gyro.z,
                    device.temperature()
                );
            }
            Err(e) => eprintln!("Error al leer datos: {:?}", e),
        }
        thread::sleep(Duration::from_millis(100));
    }

    if let Err(e) = device.set_sleep_enabled(true) {
        eprintln!("Error al dormir el dispositivo: {:?}", e);
    }
}
