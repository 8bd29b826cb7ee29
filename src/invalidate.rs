//! CloudFront cache invalidation
//!
//! Only `/index.html` is ever invalidated. The rest of the build output is
//! content-hashed by the bundler, so a fresh `index.html` is enough for
//! clients to pick up new asset references.

use chrono::Utc;
use serde_json::Value;

use crate::error::{QuayError, QuayResult};
use crate::process::CommandRunner;
use crate::ui::Logger;

/// The single path submitted with every invalidation.
pub const INVALIDATION_PATH: &str = "/index.html";

/// Caller reference for the invalidation request, generated from the wall
/// clock with sub-second precision. Non-repeating for practical invocation
/// rates.
pub fn caller_reference() -> String {
    Utc::now().timestamp_micros().to_string()
}

/// JSON invalidation batch for one path with the given caller reference.
fn invalidation_batch(reference: &str) -> String {
    serde_json::json!({
        "Paths": {
            "Quantity": 1,
            "Items": [INVALIDATION_PATH],
        },
        "CallerReference": reference,
    })
    .to_string()
}

/// Submit an invalidation for `/index.html` and log the returned id.
///
/// Returns the invalidation id for callers that want it (tests, mostly).
/// No completion polling; CloudFront finishes on its own schedule.
pub fn invalidate_index(
    runner: &dyn CommandRunner,
    logger: &Logger,
    distribution: &str,
    profile: &str,
    verify_tls: bool,
) -> QuayResult<String> {
    let reference = caller_reference();
    submit(runner, logger, distribution, profile, verify_tls, &reference)
}

fn submit(
    runner: &dyn CommandRunner,
    logger: &Logger,
    distribution: &str,
    profile: &str,
    verify_tls: bool,
    reference: &str,
) -> QuayResult<String> {
    let mut args = vec![
        "cloudfront".to_string(),
        "create-invalidation".to_string(),
        "--distribution-id".to_string(),
        distribution.to_string(),
        "--invalidation-batch".to_string(),
        invalidation_batch(reference),
        "--profile".to_string(),
        profile.to_string(),
        "--output".to_string(),
        "json".to_string(),
    ];
    if !verify_tls {
        args.push("--no-verify-ssl".to_string());
    }

    let output = runner
        .run("aws", &args, None)
        .map_err(|e| QuayError::Invalidation {
            distribution: distribution.to_string(),
            message: e.stderr(),
        })?;

    let id = parse_invalidation_id(&output.stdout).ok_or_else(|| QuayError::Invalidation {
        distribution: distribution.to_string(),
        message: format!("unexpected response: {}", output.stdout.trim()),
    })?;

    logger.info(format!(
        "Successfully submitted CloudFront invalidation for {} with invalidation id {}.",
        distribution, id
    ));
    Ok(id)
}

/// Pull `Invalidation.Id` out of the CLI's JSON response.
fn parse_invalidation_id(stdout: &str) -> Option<String> {
    let value: Value = serde_json::from_str(stdout).ok()?;
    value
        .get("Invalidation")?
        .get("Id")?
        .as_str()
        .map(str::to_string)
}
