//! Deploy configuration
//!
//! The config file is a small JSON document mapping environment names to
//! their S3 bucket and CloudFront distribution:
//!
//! ```json
//! { "environments": { "prod": { "bucket_url": "s3://bucket", "cf_distro": "ABC123" } } }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuayError, QuayResult};

/// Supported deployment environments. A closed set: anything else on the
/// command line is a validation failure before any build or network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Stag,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Stag => "stag",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = QuayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stag" => Ok(Environment::Stag),
            "prod" => Ok(Environment::Prod),
            other => Err(QuayError::Validation(other.to_string())),
        }
    }
}

/// Bucket and distribution for one environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentTarget {
    /// S3 destination, e.g. `s3://my-site-prod`
    pub bucket_url: String,
    /// CloudFront distribution id, e.g. `E2EXAMPLE123`
    pub cf_distro: String,
}

/// Parsed deploy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    pub environments: HashMap<String, EnvironmentTarget>,
}

impl DeployConfig {
    /// Load and parse the config file.
    pub fn load(path: &Path) -> QuayResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| QuayError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| QuayError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Look up the target for `environment`.
    ///
    /// Absence is a lookup failure at deploy time, not up-front schema
    /// validation; `path` only feeds the error message.
    pub fn target(&self, environment: Environment, path: &Path) -> QuayResult<&EnvironmentTarget> {
        self.environments
            .get(environment.as_str())
            .ok_or_else(|| QuayError::MissingEnvironment {
                environment: environment.to_string(),
                path: path.to_path_buf(),
            })
    }
}

/// Everything one deploy invocation needs, derived from the command line.
/// Constructed once, consumed once.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub config_path: PathBuf,
    pub environment: String,
    pub project_dir: PathBuf,
    pub credential_profile: String,
    pub verify_tls: bool,
    pub run_build: bool,
}
