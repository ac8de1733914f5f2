//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::ingredients::IngredientType;

/// Errors raised by ingredient registry lookups and mutations
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown ingredient type: {0}")]
    UnknownIngredientType(IngredientType),
    #[error("Could not find ingredient renderer for {0}")]
    MissingRenderer(IngredientType),
    #[error("ingredients cannot be empty")]
    EmptyIngredients,
    #[error("ingredient type {0} is already registered")]
    DuplicateIngredientType(IngredientType),
}

/// A host classifier could not decide on a stack
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassifyError {
    message: String,
}

impl ClassifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
