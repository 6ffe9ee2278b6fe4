//! Verity Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! heuristic classifier shared by the API server and the CLI.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use classifier::{classify, Classifier, HeuristicWeights};
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    AnalyzeResponse, ClassificationResult, ImageFacts, Rule, StoredUpload, Verdict,
};
