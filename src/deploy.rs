//! Deploy pipeline
//!
//! Strictly sequential: validate environment, load config, optional build,
//! S3 sync, CloudFront invalidation. The first failure aborts the whole
//! pipeline; there is no retry and no rollback of partially synced state.

use crate::build::run_build;
use crate::config::{DeployConfig, DeployRequest, Environment};
use crate::error::QuayResult;
use crate::invalidate::invalidate_index;
use crate::process::CommandRunner;
use crate::sync::sync_dist;
use crate::ui::Logger;

/// What a successful deploy produced.
#[derive(Debug)]
pub struct DeployOutcome {
    pub environment: Environment,
    pub invalidation_id: String,
}

/// Run one deploy end to end.
pub fn deploy(
    request: &DeployRequest,
    runner: &dyn CommandRunner,
    logger: &Logger,
) -> QuayResult<DeployOutcome> {
    // Environment validation comes first: a typoed --env must fail before
    // any build or network call.
    let environment: Environment = request.environment.parse()?;

    let config = DeployConfig::load(&request.config_path)?;
    let target = config.target(environment, &request.config_path)?.clone();

    logger.info(format!("Running deploy for {}.", environment));

    if request.run_build {
        run_build(runner, logger, &request.project_dir)?;
    }

    sync_dist(
        runner,
        logger,
        &request.project_dir,
        &target.bucket_url,
        &request.credential_profile,
    )?;

    if !request.verify_tls {
        logger.warn("TLS certificate verification is disabled for the CloudFront call.");
    }

    let invalidation_id = invalidate_index(
        runner,
        logger,
        &target.cf_distro,
        &request.credential_profile,
        request.verify_tls,
    )?;

    Ok(DeployOutcome {
        environment,
        invalidation_id,
    })
}
