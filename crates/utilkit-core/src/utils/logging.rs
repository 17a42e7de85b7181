use crate::error::UtilsError;
use log::{LevelFilter, Metadata, Record};

/// Logger writing `LEVEL target: message` lines to stderr.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger. Fails if another logger is already set.
pub fn init(max_level: LevelFilter) -> crate::Result<()> {
    log::set_logger(&LOGGER).map_err(|e| UtilsError::Logging {
        message: e.to_string(),
    })?;
    log::set_max_level(max_level);
    Ok(())
}

/// Log level for the `--verbose` flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

pub fn log_error(msg: &str) {
    eprintln!("Error: {}", msg);
}
