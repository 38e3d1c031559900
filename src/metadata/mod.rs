//! Per-package metadata lookup.
//!
//! Two collaborating sources: [`local`] reads installed distribution
//! metadata from site-packages, [`pypi`] queries the PyPI JSON API for
//! anything not installed. A failed lookup degrades that one package to an
//! unresolved record; it never aborts the batch.

use anyhow::Result;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::PackageInfo;

pub mod local;
pub mod pypi;

const BATCH_SIZE: usize = 75;

/// Resolve metadata for every name, preserving input order.
pub async fn collect(names: &[String], quiet: bool) -> Result<Vec<PackageInfo>> {
    let installed = local::installed_distributions();

    let mut resolved: Vec<Option<PackageInfo>> = names
        .iter()
        .map(|n| installed.get(&local::normalize_name(n)).cloned())
        .collect();

    let missing: Vec<(usize, &str)> = resolved
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_none())
        .map(|(i, _)| (i, names[i].as_str()))
        .collect();

    if !missing.is_empty() {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        let pb = if !quiet {
            let pb = ProgressBar::new(missing.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )?
                    .progress_chars("#>-"),
            );
            pb.set_message("fetching package metadata");
            Some(pb)
        } else {
            None
        };

        for batch in missing.chunks(BATCH_SIZE) {
            let futures: Vec<_> = batch
                .iter()
                .map(|(_, name)| {
                    let client = client.clone();
                    let name = name.to_string();
                    async move { pypi::fetch_package(&client, &name).await }
                })
                .collect();

            let results = join_all(futures).await;

            for ((idx, name), result) in batch.iter().zip(results) {
                resolved[*idx] = match result {
                    Ok(Some(info)) => Some(info),
                    // Lookup failure: keep a placeholder record so the
                    // report still carries one row per dependency.
                    _ => Some(PackageInfo::unresolved(name)),
                };
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
    }

    Ok(resolved
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.unwrap_or_else(|| PackageInfo::unresolved(&names[i])))
        .collect())
}
