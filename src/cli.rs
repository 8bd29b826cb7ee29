use std::path::PathBuf;

use clap::Parser;

use crate::config::DeployRequest;

/// Quay - deploy a static web application to S3 and invalidate CloudFront
///
/// Takes the contents of the project's dist directory and deploys them to the
/// configured environment. Requires AWS API credentials in your
/// ~/.aws/credentials file (add one with: aws configure --profile <name>).
#[derive(Parser, Debug)]
#[command(name = "quay")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Example: quay --conf ./deploy.json --proj_dir ~/projects/site --profile site --build --env prod"
)]
pub struct Cli {
    /// The deploy configuration file
    #[arg(long, value_name = "PATH")]
    pub conf: PathBuf,

    /// The environment to deploy [stag|prod]
    #[arg(long, value_name = "ENV")]
    pub env: String,

    /// The project directory that will be deployed
    #[arg(long = "proj_dir", value_name = "PATH")]
    pub proj_dir: PathBuf,

    /// The AWS profile to use, from ~/.aws/credentials
    #[arg(long, value_name = "NAME")]
    pub profile: String,

    /// Disable TLS certificate checking for the CloudFront call
    #[arg(long = "disable-ssl-check")]
    pub disable_ssl_check: bool,

    /// Run a new build before deploying
    #[arg(long)]
    pub build: bool,
}

impl Cli {
    pub fn into_request(self) -> DeployRequest {
        DeployRequest {
            config_path: self.conf,
            environment: self.env,
            project_dir: self.proj_dir,
            credential_profile: self.profile,
            verify_tls: !self.disable_ssl_check,
            run_build: self.build,
        }
    }
}
