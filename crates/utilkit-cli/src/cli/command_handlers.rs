use crate::cli::main_types::{
    BytesArgs, ColorCommands, ConfigCommands, DateArgs, JsonCommands, RandomCommands,
};
use utilkit_core::core::characters::CharacterSet;
use utilkit_core::core::color::{self, Rgb};
use utilkit_core::core::{date, random};
use utilkit_core::display::TableDisplay;
use utilkit_core::error::{AppError, CliError, ColorError};
use utilkit_core::storage::config::Config;
use utilkit_core::storage::json::{json_read, json_write, to_pretty_json};
use utilkit_core::utils::input::EnvConfigReader;
use utilkit_core::utils::logging::print_verbose;
use utilkit_core::utils::{data, text, time, validation};

fn table_display() -> TableDisplay {
    TableDisplay::new().with_colors(!EnvConfigReader::read_no_color())
}

#[derive(Default)]
pub struct ColorHandler;

impl ColorHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: ColorCommands, verbose: bool) -> Result<(), AppError> {
        match command {
            ColorCommands::HexToRgb { hex } => {
                print_verbose(verbose, &format!("Converting HEX '{}' to RGB", hex));
                let rgb = color::hex_to_rgb(&hex)
                    .ok_or_else(|| ColorError::InvalidHex { input: hex.clone() })?;
                println!("{}", rgb);
                Ok(())
            }
            ColorCommands::RgbToHex { channels } => {
                let joined = channels.join(" ");
                print_verbose(verbose, &format!("Converting RGB '{}' to HEX", joined));
                let channels = validation::parse_rgb_channels(&joined)?;
                println!("{}", color::rgb_to_hex_checked(channels)?);
                Ok(())
            }
            ColorCommands::Random { count, table } => {
                let colors: Vec<Rgb> = (0..count).map(|_| color::random_rgb()).collect();
                if table {
                    println!("{}", table_display().render_colors(&colors));
                } else {
                    for rgb in colors {
                        println!("{} {}", color::rgb_to_hex(rgb), rgb);
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct FormatHandler;

impl FormatHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_bytes(
        &self,
        args: BytesArgs,
        config: &Config,
        verbose: bool,
    ) -> Result<(), AppError> {
        let decimals = args.decimals.unwrap_or_else(|| config.get_decimals());
        print_verbose(
            verbose,
            &format!("Formatting {} bytes with {} decimals", args.bytes, decimals),
        );
        println!("{}", data::format_bytes(args.bytes, Some(decimals))?);
        Ok(())
    }

    pub fn handle_date(
        &self,
        args: DateArgs,
        config: &Config,
        verbose: bool,
    ) -> Result<(), AppError> {
        let format = args.format.unwrap_or_else(|| config.get_date_format());
        print_verbose(verbose, &format!("Using format string '{}'", format));

        let formatted = match args.timestamp {
            Some(raw) => {
                let timestamp = validation::parse_timestamp(&raw)?;
                date::custom_format(&timestamp, &format)
            }
            None => date::custom_format(&chrono::Local::now(), &format),
        };
        println!("{}", formatted);
        Ok(())
    }

    pub fn handle_limit(&self, text_value: &str, max: usize, width: bool) -> Result<(), AppError> {
        let limited = if width {
            text::limit_width(text_value, max)
        } else {
            text::limit(text_value, max)
        };
        println!("{}", limited);
        Ok(())
    }
}

#[derive(Default)]
pub struct RandomHandler;

impl RandomHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: RandomCommands, verbose: bool) -> Result<(), AppError> {
        match command {
            RandomCommands::Int { num } => {
                println!("{}", random::get_random_int(num)?);
            }
            RandomCommands::Range { min, max } => {
                println!("{}", random::get_random_arbitrary(min, max)?);
            }
            RandomCommands::Shuffle { items, set } => {
                let mut items = match set {
                    Some(name) => {
                        let set: CharacterSet = name.parse()?;
                        print_verbose(verbose, &format!("Shuffling character set '{}'", set));
                        set.chars().iter().map(|c| c.to_string()).collect()
                    }
                    None if items.is_empty() => {
                        return Err(CliError::InvalidArguments(
                            "Nothing to shuffle: pass items or --set <name>".to_string(),
                        )
                        .into());
                    }
                    None => items,
                };
                random::shuffle_array(&mut items);
                println!("{}", items.join(" "));
            }
            RandomCommands::Chance { percent } => {
                println!("{}", random::chance(percent));
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct UtilityHandler;

impl UtilityHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_chars(&self, set: Option<String>) -> Result<(), AppError> {
        match set {
            Some(name) => {
                let set: CharacterSet = name.parse()?;
                println!("{}", set.as_str());
            }
            None => println!("{}", table_display().render_character_sets(&CharacterSet::ALL_SETS)),
        }
        Ok(())
    }

    pub async fn handle_sleep(&self, ms: u64, verbose: bool) -> Result<(), AppError> {
        print_verbose(verbose, &format!("Sleeping for {}ms", ms));
        time::sleep(ms).await;
        Ok(())
    }
}

#[derive(Default)]
pub struct JsonHandler;

impl JsonHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, command: JsonCommands, verbose: bool) -> Result<(), AppError> {
        match command {
            JsonCommands::Read { path, pointer } => {
                print_verbose(verbose, &format!("Reading JSON from {}", path));
                let value: serde_json::Value = json_read(&path).await?;
                let selected = match pointer.as_deref() {
                    Some(p) => value.pointer(p).ok_or_else(|| {
                        CliError::InvalidArguments(format!(
                            "JSON pointer '{}' does not match anything in {}",
                            p, path
                        ))
                    })?,
                    None => &value,
                };
                println!("{}", to_pretty_json(selected)?);
                Ok(())
            }
            JsonCommands::Write { path, data } => {
                let value: serde_json::Value = serde_json::from_str(&data).map_err(|e| {
                    CliError::InvalidArguments(format!("Invalid JSON data: {}", e))
                })?;
                json_write(&path, &value).await?;
                print_verbose(verbose, &format!("Wrote JSON to {}", path));
                println!("✅ Wrote {}", path);
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &Config,
        config_path: &str,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Showing effective configuration");
                println!("{}", table_display().render_config(config, config_path));
                Ok(())
            }
        }
    }
}
