//! Project build step
//!
//! Runs `npm run build` in the project directory when `--build` is given.
//! Output is not inspected; exit code zero is the only success signal.

use std::path::Path;

use crate::error::{QuayError, QuayResult};
use crate::process::{args, CommandRunner};
use crate::ui::Logger;

/// Run the project's build command with `project_dir` as working directory.
pub fn run_build(
    runner: &dyn CommandRunner,
    logger: &Logger,
    project_dir: &Path,
) -> QuayResult<()> {
    logger.info(format!("Building project {}.", project_dir.display()));

    runner
        .run("npm", &args(&["run", "build"]), Some(project_dir))
        .map_err(|e| QuayError::Build {
            project_dir: project_dir.to_path_buf(),
            stderr: e.stderr(),
        })?;

    logger.info(format!(
        "Successfully built project {}.",
        project_dir.display()
    ));
    Ok(())
}
