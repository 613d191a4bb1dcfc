//! Console and file logger.
//!
//! Implements the [`log`] facade. Every record is printed to the console
//! (the Brain's serial terminal) and appended to `log.txt` in the working
//! directory, which is the root of the SD card on the Brain. Without an SD
//! card the file is skipped and console output continues.
//!
//! # Usage
//!
//! ```ignore
//! use changeup::fs::logger;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let config = RobotConfig::default();
//!     logger::init(config.log_level).expect("Logger init failed");
//!     info!("Program started");
//! }
//! ```
//!
//! # Log Output
//!
//! Each line carries the level, the time since the program started, the
//! module path and the message:
//!
//! ```text
//! INFO [1m 2s 40ms] changeup::competition - Autonomous period
//! WARN [1m 3s 550ms] changeup::auton::gate - No ball detected within 1.5s
//! ```

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::{FormattedDuration, format_duration};
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// File the log is written to.
pub const LOG_FILE: &str = "log.txt";

/// Logger writing to the console and [`LOG_FILE`].
pub struct MatchLogger {
    /// `None` when the file could not be opened.
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl MatchLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(record, format_duration(uptime()));

            print!("{}", line);

            if let Ok(mut writer_guard) = self.file_writer.lock() {
                if let Some(ref mut writer) = *writer_guard {
                    let _ = writer.write_all(line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<MatchLogger> = OnceLock::new();

/// Installs the logger.
///
/// Call once, before anything logs. Records below `level` are dropped.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    start_time();
    let logger = LOGGER.get_or_init(MatchLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

fn format_line(record: &Record, time: FormattedDuration) -> String {
    format!(
        "{} [{}] {} - {}\n",
        record.level(),
        time,
        record.target(),
        record.args()
    )
}

/// Time since the user program started, truncated to milliseconds.
#[cfg(feature = "v5")]
fn uptime() -> Duration {
    truncate_to_millis(vexide::time::user_uptime())
}

/// Time since the logger was installed, truncated to milliseconds.
#[cfg(not(feature = "v5"))]
fn uptime() -> Duration { truncate_to_millis(start_time().elapsed()) }

fn start_time() -> std::time::Instant {
    static START: OnceLock<std::time::Instant> = OnceLock::new();
    *START.get_or_init(std::time::Instant::now)
}

fn truncate_to_millis(duration: Duration) -> Duration {
    Duration::from_millis(duration.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use log::{Level, LevelFilter, Record, debug, error, info, trace, warn};

    use super::*;

    #[test]
    fn line_has_level_time_target_and_message() {
        let line = format_line(
            &Record::builder()
                .level(Level::Warn)
                .target("changeup::auton::gate")
                .args(format_args!("No ball detected within {:?}", Duration::from_millis(1500)))
                .build(),
            format_duration(Duration::from_millis(62_040)),
        );
        assert_eq!(
            line,
            "WARN [1m 2s 40ms] changeup::auton::gate - No ball detected within 1.5s\n"
        );
    }

    #[test]
    fn uptime_has_no_sub_millisecond_part() {
        assert_eq!(uptime().subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    #[ignore = "filesystem access needed (file write)"]
    fn log_full_test() {
        super::init(LevelFilter::Trace).expect("Failed to initialize logger");

        trace!("This is a trace message");
        debug!("This is a debug message");
        info!("This is an info message");
        warn!("This is a warning message");
        error!("This is an error message");

        log::logger().flush();

        assert!(
            log::logger().enabled(
                &log::Metadata::builder()
                    .level(log::Level::Error)
                    .target("test")
                    .build()
            )
        );
    }
}
