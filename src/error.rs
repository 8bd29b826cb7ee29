//! Error types for Quay
//!
//! Uses `thiserror` for library errors. One variant per pipeline stage so the
//! operator can tell which step aborted the deploy.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Quay operations
pub type QuayResult<T> = Result<T, QuayError>;

/// Main error type for Quay operations
#[derive(Error, Debug)]
pub enum QuayError {
    /// Config file unreadable or not valid JSON
    #[error("invalid deploy config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Environment name missing from the config's `environments` map
    #[error("environment '{environment}' not found in {path}")]
    MissingEnvironment {
        environment: String,
        path: PathBuf,
    },

    /// Unsupported `--env` value
    #[error("invalid environment '{0}' - expected 'stag' or 'prod'")]
    Validation(String),

    /// Build command failed
    #[error("build failed in {project_dir}: {stderr}")]
    Build {
        project_dir: PathBuf,
        stderr: String,
    },

    /// S3 sync or upload failed
    #[error("s3 {operation} failed: {stderr}")]
    Sync { operation: String, stderr: String },

    /// CloudFront invalidation failed
    #[error("cloudfront invalidation for {distribution} failed: {message}")]
    Invalidation {
        distribution: String,
        message: String,
    },
}
