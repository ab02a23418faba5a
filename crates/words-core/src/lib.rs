//! # words-core
//!
//! Core types, configuration and error definitions for the numwords converter.
//!
//! This crate provides the foundational abstractions used across all other crates
//! in the workspace, including:
//!
//! - Common data types (`Locale`, `NumericInput`, `SignedMagnitude`, etc.)
//! - Unified error handling via `WordsError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod types;

pub use config::{LoggingConfig, WordsConfig};
pub use error::{WordsError, WordsResult};
pub use types::{ConvertOptions, Locale, NumericInput, SignedMagnitude};
