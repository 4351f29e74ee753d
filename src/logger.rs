use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::{Error, Result};

const DEFAULT_FILTER: &str = "info";

/// The terminal is the game screen, so logs only go to the file named by
/// `SNAKE_LOG`. Without one, no subscriber is installed.
pub fn init_logger(settings: &Settings) -> Result<()> {
    let path = match &settings.log_file {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
