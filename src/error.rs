//! Error types
//!
//! Input validation errors raised at the request boundary, plus the
//! configuration and server errors of the web service.

use std::net::AddrParseError;
use std::num::ParseIntError;

use thiserror::Error;

use crate::models::TARGET_FIELD;

/// Message shown on the calculator page for any invalid input
pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid numbers. Rib weight must be greater than 0.";

/// Message for an invalid recommended sodium target
pub const INVALID_TARGET_MESSAGE: &str =
    "Target sodium per lb must be a number greater than 0.";

/// Invalid calculator input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    #[error("rib weight must be greater than 0, got {0}")]
    NonPositiveRibWeight(f64),

    #[error("rub sodium must not be negative, got {0}")]
    NegativeRubSodium(f64),

    #[error("target sodium must be greater than 0, got {0}")]
    NonPositiveTarget(f64),
}

impl InputError {
    /// The message rendered back to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::NotANumber { field: TARGET_FIELD, .. }
            | InputError::NotFinite { field: TARGET_FIELD }
            | InputError::NonPositiveTarget(_) => INVALID_TARGET_MESSAGE,
            _ => INVALID_INPUT_MESSAGE,
        }
    }
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port in {var}: {source}")]
    InvalidPort {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid bind address in {var}: {source}")]
    InvalidAddress {
        var: &'static str,
        #[source]
        source: AddrParseError,
    },
}

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
