//! Filesystem utilities.
//!
//! The only file the controller writes is the match log, see [`logger`].
//!
//! # Example
//!
//! ```ignore
//! use changeup::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Debug).expect("Failed to initialize logger");
//! info!("Robot initialized");
//! ```

/// Console and SD card logging.
///
/// Provides [`init`](logger::init).
pub mod logger;
