use clap::Parser;
use std::path::PathBuf;
use utilkit_core::storage::config::{CONFIG_FILE_NAME, Config};
use utilkit_core::utils::logging;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(err) = logging::init(logging::level_for(cli.verbose)) {
        logging::log_error(&err.to_string());
    }

    // Load Config
    let config_path = match cli.config_dir.as_ref() {
        Some(dir) => PathBuf::from(dir).join(CONFIG_FILE_NAME),
        None => match Config::config_file_path() {
            Ok(path) => path,
            Err(err) => {
                logging::log_error(&err.to_string());
                std::process::exit(1);
            }
        },
    };

    let mut config = match Config::load(Some(config_path.clone())) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };
    for err in config.sanitize() {
        log::warn!("{}; using the default instead", err);
    }

    if cli.verbose {
        println!("Verbose mode is enabled");
        println!("Using config file: {}", config_path.display());
    }

    let dispatcher = Dispatcher::new(config, config_path.display().to_string(), cli.verbose);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        let severity = e.severity();
        eprintln!("{} Error: {}", severity.emoji(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}
