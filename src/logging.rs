//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialise logging from a log4rs YAML file.
///
/// Falls back to warnings on stderr when the file is missing or invalid, so
/// stdout only ever carries the report.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(config_file, Default::default()) {
        Ok(()) => {
            log::debug!("Logging configured from {}", config_file.display());
            Ok(())
        }
        Err(file_err) => {
            log4rs::init_config(fallback_config()?)?;
            log::debug!(
                "Using stderr logging, could not load {}: {}",
                config_file.display(),
                file_err
            );
            Ok(())
        }
    }
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
