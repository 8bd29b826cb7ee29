//! S3 synchronization
//!
//! Directory synchronization goes through the AWS CLI because the SDK has no
//! sync primitive. Two operations per deploy, always in this order:
//!
//! 1. `aws s3 sync <dist> <bucket> --delete` - mirror the build output,
//!    removing remote objects that no longer exist locally.
//! 2. `aws s3 cp <dist>/index.html <bucket> --cache-control ...` - the sync
//!    cannot set per-object metadata, and the entry HTML must never be cached
//!    or clients would keep referencing stale fingerprinted assets.

use std::path::Path;

use crate::error::{QuayError, QuayResult};
use crate::process::CommandRunner;
use crate::ui::Logger;

/// Cache-control header applied to the re-uploaded `index.html`.
pub const INDEX_CACHE_CONTROL: &str = "max-age=0, no-cache, no-store, must-revalidate";

/// Build output directory name under the project root.
pub const DIST_DIR: &str = "dist";

/// Mirror-sync `<project_dir>/dist` to the bucket, then re-upload
/// `index.html` with no-cache headers.
pub fn sync_dist(
    runner: &dyn CommandRunner,
    logger: &Logger,
    project_dir: &Path,
    bucket_url: &str,
    profile: &str,
) -> QuayResult<()> {
    let dist = project_dir.join(DIST_DIR);

    logger.info(format!(
        "Deploying {} to {}.",
        dist.display(),
        bucket_url
    ));
    runner
        .run(
            "aws",
            &[
                "s3".to_string(),
                "sync".to_string(),
                dist.display().to_string(),
                bucket_url.to_string(),
                "--profile".to_string(),
                profile.to_string(),
                "--delete".to_string(),
            ],
            None,
        )
        .map_err(|e| QuayError::Sync {
            operation: "sync".to_string(),
            stderr: e.stderr(),
        })?;
    logger.info(format!(
        "Successfully deployed {} to {}.",
        dist.display(),
        bucket_url
    ));

    logger.info("Uploading index.html with cache-control headers.");
    let index = dist.join("index.html");
    runner
        .run(
            "aws",
            &[
                "s3".to_string(),
                "cp".to_string(),
                index.display().to_string(),
                bucket_url.to_string(),
                "--profile".to_string(),
                profile.to_string(),
                "--cache-control".to_string(),
                INDEX_CACHE_CONTROL.to_string(),
            ],
            None,
        )
        .map_err(|e| QuayError::Sync {
            operation: "cp".to_string(),
            stderr: e.stderr(),
        })?;
    logger.info("Successfully uploaded index.html with cache-control headers.");

    Ok(())
}
