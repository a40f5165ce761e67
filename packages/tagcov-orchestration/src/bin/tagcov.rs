//! tagcov CLI
//!
//! # Usage
//!
//! ```bash
//! # Report one project, JSON to stdout
//! tagcov --manifest tagcov-workspace.yaml --project app
//!
//! # Aggregate a parent project from March on, 4 workers, into a file
//! tagcov -m tagcov-workspace.yaml -p parent --baseline-date 2024/3/1 -j 4 -o target/tagcov.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tagcov_orchestration::{init_logging, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let document = run(&cli).with_context(|| format!("report for project '{}' failed", cli.project))?;

    match &cli.output {
        Some(path) => {
            document
                .write_json(path)
                .with_context(|| format!("unable to write report: {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", document.to_json()?),
    }

    Ok(())
}
