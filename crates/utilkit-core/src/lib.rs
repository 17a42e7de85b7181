//! # utilkit-core
//!
//! Small, independent helpers: HEX/RGB color conversion, byte-size and date
//! formatting, pseudo-random values, character-set tables, string truncation,
//! JSON file read/write and an async delay.
//!
//! This crate provides the functionality behind the `utilkit` command line tool.
//!
//! ## Quick Start
//!
//! ```rust
//! use utilkit_core::prelude::*;
//!
//! # fn main() -> utilkit_core::Result<()> {
//! let rgb = hex_to_rgb("#3F2").expect("valid shorthand");
//! assert_eq!(rgb_to_hex(rgb), "#33FF22");
//!
//! assert_eq!(format_bytes(1024.0, Some(0))?, "1 KB");
//! assert!(get_random_int(1).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Core Layer                 │  color, date, random, characters
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  JSON files, read-only config
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  bytes, text, delay, parsing, logging
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Color codec, date formatter, random primitives, character sets
//! - [`storage`]: JSON file contract and configuration
//! - [`utils`]: Byte formatting, truncation, delay, input parsing, logging
//! - [`display`]: Table rendering for terminal output
//! - [`error`]: Hierarchical error system with troubleshooting hints

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use utilkit_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Core helpers
    pub use crate::core::characters::CharacterSet;
    pub use crate::core::color::{Rgb, hex_to_rgb, random_hex, random_rgb, rgb_to_hex};
    pub use crate::core::date::custom_format;
    pub use crate::core::random::{chance, get_random_arbitrary, get_random_int, shuffle_array};

    // Storage
    pub use crate::storage::config::Config;
    pub use crate::storage::json::{json_read, json_write};

    // Utilities
    pub use crate::utils::data::format_bytes;
    pub use crate::utils::text::limit;
    pub use crate::utils::time::sleep;
}

/// Core layer - the formatting, encoding and random helpers.
///
/// - [`core::color`]: HEX <-> RGB conversion and random colors
/// - [`core::date`]: `#TOKEN#` date formatting
/// - [`core::random`]: Random integers, shuffling and chance
/// - [`core::characters`]: Character set tables
pub mod core;

/// Storage layer - JSON files and configuration.
pub mod storage;

/// Utilities layer - shared helpers.
///
/// - [`utils::data`]: Byte-size formatting
/// - [`utils::text`]: Truncation
/// - [`utils::time`]: Async delay
/// - [`utils::validation`]: Parsing user input
pub mod utils;

/// Display layer - terminal tables.
pub mod display;

/// Error handling - hierarchical error system.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
