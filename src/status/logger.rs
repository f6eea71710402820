//! Console logger implementing the `log` facade
//!
//! Lines carry the program uptime and go to both stdout and stderr, so they
//! show up on the robot's display output and in an attached debug session.
//!
//! Initialize once at program start:
//!
//! ```no_run
//! use log::LevelFilter;
//!
//! gyro_tank::status::logger::init(LevelFilter::Info).expect("logger init failed");
//! log::info!("program started");
//! ```

use std::time::Instant;

use log::{LevelFilter, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    start: Instant,
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let uptime = self.start.elapsed().as_secs_f64();
        let line = format!(
            "{:5} [{:8.3}s] {} - {}",
            record.level(),
            uptime,
            record.target(),
            record.args()
        );

        println!("{}", line);
        eprintln!("{}", line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` sink.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { start: Instant::now() }))?;
    log::set_max_level(level);
    Ok(())
}
