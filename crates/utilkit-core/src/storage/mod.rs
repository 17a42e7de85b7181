use crate::error::StorageError;

pub mod config;
pub mod json;

type Result<T> = std::result::Result<T, StorageError>;
