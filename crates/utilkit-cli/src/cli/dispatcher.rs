use crate::cli::command_handlers::{
    ColorHandler, ConfigHandler, FormatHandler, JsonHandler, RandomHandler, UtilityHandler,
};
use crate::cli::main_types::Commands;
use utilkit_core::error::AppError;
use utilkit_core::storage::config::Config;
use utilkit_core::utils::logging::print_verbose;

pub struct Dispatcher {
    config: Config,
    config_path: String,
    verbose: bool,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(config: Config, config_path: String, verbose: bool) -> Self {
        Self {
            config,
            config_path,
            verbose,
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Color { command } => {
                self.log_verbose("Dispatching color command");
                ColorHandler::new().handle(command, self.verbose)
            }
            Commands::Bytes(args) => {
                FormatHandler::new().handle_bytes(args, &self.config, self.verbose)
            }
            Commands::Date(args) => {
                FormatHandler::new().handle_date(args, &self.config, self.verbose)
            }
            Commands::Limit { text, max, width } => {
                FormatHandler::new().handle_limit(&text, max, width)
            }
            Commands::Random { command } => {
                self.log_verbose("Dispatching random command");
                RandomHandler::new().handle(command, self.verbose)
            }
            Commands::Chars { set } => UtilityHandler::new().handle_chars(set),
            Commands::Sleep { ms } => UtilityHandler::new().handle_sleep(ms, self.verbose).await,
            Commands::Json { command } => JsonHandler::new().handle(command, self.verbose).await,
            Commands::Config { command } => ConfigHandler::new().handle(
                command,
                &self.config,
                &self.config_path,
                self.verbose,
            ),
        }
    }
}
