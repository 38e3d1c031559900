//! `license-compat` — report dependency licenses and check them against the
//! project's own license.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Resolve the project license (flag → config → [`project`] manifests).
//! 4. Probe for a dependency source ([`source::resolve`]).
//! 5. Look up per-package metadata ([`metadata`], local then PyPI).
//! 6. Classify and join against the compatibility matrix
//!    ([`report::build_report`]).
//! 7. Render the requested format ([`format`]).
//! 8. Exit `0` (all compatible) or `1` (at least one incompatible record).

mod cli;
mod config;
mod format;
mod license;
mod metadata;
mod models;
mod project;
mod report;
mod source;

use std::collections::HashSet;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use config::load_config;
use metadata::local::normalize_name;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&path, cli.config.as_deref())?;

    // Project license: flag beats config beats manifest discovery.
    let project_license = cli
        .license
        .clone()
        .or_else(|| config.project.license.clone())
        .or_else(|| project::discover_license(&path))
        .with_context(|| {
            format!(
                "cannot determine the project license for {}: pass --license, \
                 set [project].license in the config, or declare it in \
                 pyproject.toml / setup.cfg",
                path.display()
            )
        })?;

    let source = source::resolve(&path)?;

    let mut names = source.dependencies()?;
    if !config.check.ignore.is_empty() {
        let ignored: HashSet<String> = config
            .check
            .ignore
            .iter()
            .map(|n| normalize_name(n))
            .collect();
        names.retain(|n| !ignored.contains(&normalize_name(n)));
    }

    if !cli.quiet {
        eprintln!(
            "  {} {} dependencies via {} (project license: {})",
            "→".cyan(),
            names.len(),
            source.label(),
            project_license
        );
    }

    let packages = metadata::collect(&names, cli.quiet).await?;
    let records = report::build_report(&project_license, &packages);

    match &cli.file {
        Some(file) => {
            let mut out = std::fs::File::create(file)
                .with_context(|| format!("cannot write report to {}", file.display()))?;
            format::render(cli.format, &records, &mut out)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            format::render(cli.format, &records, &mut out)?;
            out.flush()?;
        }
    }

    let incompatible = records.iter().filter(|r| !r.license_compat).count();
    if incompatible > 0 {
        if !cli.quiet {
            eprintln!(
                "  {} {} incompatible dependencies",
                "✗".red(),
                incompatible
            );
        }
        std::process::exit(1);
    }

    Ok(())
}
