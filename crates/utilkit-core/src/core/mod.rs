pub mod characters;
pub mod color;
pub mod date;
pub mod random;
