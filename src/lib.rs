//! Quay - S3/CloudFront deployment tool for static web applications
//!
//! Quay publishes a locally built static site to an S3-hosted environment and
//! invalidates the CloudFront cache entry for `/index.html`. It orchestrates
//! three external tools in strict sequence: an optional `npm run build`, the
//! AWS CLI for bucket synchronization, and a CloudFront invalidation.

pub mod build;
pub mod cli;
pub mod config;
pub mod deploy;
pub mod error;
pub mod invalidate;
pub mod process;
pub mod sync;
pub mod ui;

// Re-exports for convenience
pub use config::{DeployConfig, DeployRequest, Environment, EnvironmentTarget};
pub use deploy::{deploy, DeployOutcome};
pub use error::{QuayError, QuayResult};
pub use process::{CommandRunner, SystemRunner};
pub use ui::Logger;
