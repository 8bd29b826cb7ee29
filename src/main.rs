use anyhow::Result;
use clap::Parser;

use quay::cli::Cli;
use quay::process::SystemRunner;
use quay::ui::Logger;

fn main() {
    let logger = Logger::auto();
    if let Err(err) = run(&logger) {
        logger.error(format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(logger: &Logger) -> Result<()> {
    let cli = Cli::parse();
    let runner = SystemRunner;
    let request = cli.into_request();
    quay::deploy(&request, &runner, logger)?;
    Ok(())
}
