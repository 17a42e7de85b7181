pub mod data;
pub mod file;
pub mod input;
pub mod logging;
pub mod text;
pub mod time;
pub mod validation;
