use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "utilkit")]
#[command(about = "Color, byte-size, date, random and JSON helpers for the command line")]
#[command(version)]
#[command(after_help = "Examples:
  utilkit color hex-to-rgb '#3F2'       # [51, 255, 34]
  utilkit color rgb-to-hex 15,87,69     # #0F5745
  utilkit bytes 645952                  # 630.81 KB
  utilkit date 2024-01-11T05:03:07 --format '#DDDD# #D##th#'
  utilkit random int 420                # 0..419
  utilkit json read data.json --pointer /answers/2

Environment Variables:
  UTILKIT_CONFIG_DIR    Directory containing config.toml
  UTILKIT_DECIMALS      Default decimals for 'bytes'
  UTILKIT_DATE_FORMAT   Default format string for 'date'
  NO_COLOR              Disable colored table output")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true, env = "UTILKIT_CONFIG_DIR")]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert between HEX and RGB colors, or generate random ones
    Color {
        #[command(subcommand)]
        command: ColorCommands,
    },
    /// Format a byte count as a human readable size
    Bytes(BytesArgs),
    /// Format a timestamp with a #TOKEN# format string
    Date(DateArgs),
    /// Random integers, shuffling and chance rolls
    Random {
        #[command(subcommand)]
        command: RandomCommands,
    },
    /// Print the built-in character sets
    Chars {
        /// Character set to print (lowercase, uppercase, numbers, letters, all)
        set: Option<String>,
    },
    /// Limit text to a maximum length, ending with '…'
    Limit {
        /// Text to shorten
        text: String,
        /// Maximum length of the result
        max: usize,
        /// Measure in terminal columns instead of characters
        #[arg(long)]
        width: bool,
    },
    /// Read or write JSON files
    Json {
        #[command(subcommand)]
        command: JsonCommands,
    },
    /// Wait for a number of milliseconds
    Sleep {
        /// Milliseconds to wait
        ms: u64,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColorCommands {
    /// Convert a HEX color (#RGB or #RRGGBB) to RGB
    #[command(name = "hex-to-rgb")]
    HexToRgb {
        /// HEX color, '#' optional
        hex: String,
    },
    /// Convert RGB channels to an uppercase HEX color
    #[command(name = "rgb-to-hex")]
    #[command(after_help = "Examples:
  utilkit color rgb-to-hex 15,87,69
  utilkit color rgb-to-hex 15 87 69")]
    RgbToHex {
        /// Red, green and blue channels (0-255)
        #[arg(required = true, num_args = 1..=3, allow_negative_numbers = true)]
        channels: Vec<String>,
    },
    /// Generate random colors
    Random {
        /// Number of colors to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        /// Show the colors as a table
        #[arg(long)]
        table: bool,
    },
}

#[derive(Args, Debug)]
pub struct BytesArgs {
    /// Number of bytes
    #[arg(allow_negative_numbers = true)]
    pub bytes: f64,

    /// Decimals to keep (default: config, UTILKIT_DECIMALS, or 2)
    #[arg(short, long, allow_negative_numbers = true)]
    pub decimals: Option<i32>,
}

#[derive(Args, Debug)]
pub struct DateArgs {
    /// Timestamp as YYYY-MM-DD[THH:MM[:SS]] (default: now, local time)
    pub timestamp: Option<String>,

    /// Format string, e.g. '#YYYY#-#MM#-#DD#' (default: config or UTILKIT_DATE_FORMAT)
    #[arg(short, long)]
    pub format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RandomCommands {
    /// Random integer in [0, NUM) or (NUM, 0]
    Int {
        /// Upper (or lower, when negative) bound; -1, 0 and 1 are rejected
        #[arg(allow_negative_numbers = true)]
        num: i64,
    },
    /// Random integer in [MIN, MAX]
    Range {
        #[arg(allow_negative_numbers = true)]
        min: i64,
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },
    /// Shuffle items (or the characters of a character set)
    Shuffle {
        /// Items to shuffle
        items: Vec<String>,
        /// Shuffle the characters of a built-in set instead
        #[arg(long, conflicts_with = "items")]
        set: Option<String>,
    },
    /// Print true with the given percent probability
    Chance {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
}

#[derive(Subcommand, Debug)]
pub enum JsonCommands {
    /// Read a JSON file and pretty-print it
    Read {
        path: String,
        /// JSON pointer selecting part of the document, e.g. /answers/2
        #[arg(long)]
        pointer: Option<String>,
    },
    /// Validate a JSON document and write it pretty-printed to a file
    Write {
        path: String,
        /// JSON text to write
        data: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}
