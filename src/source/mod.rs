use std::path::Path;

use anyhow::{bail, Result};

pub mod poetry;
pub mod requirements;

/// A provider of the project's declared dependency names.
///
/// Implementations enumerate names only; metadata resolution happens
/// downstream in [`crate::metadata`].
pub trait DependencySource {
    /// Label used in status output.
    fn label(&self) -> &'static str;

    /// The declared dependency names, in declaration order.
    fn dependencies(&self) -> Result<Vec<String>>;
}

/// Probe the project and pick the first usable dependency source.
///
/// Poetry is preferred when the binary responds and the project carries a
/// `pyproject.toml`; otherwise a `requirements.txt` is used. With neither
/// available the pipeline cannot proceed, so this fails loudly instead of
/// producing an empty report.
pub fn resolve(path: &Path) -> Result<Box<dyn DependencySource>> {
    if poetry::PoetrySource::available(path) {
        return Ok(Box::new(poetry::PoetrySource::new(path)));
    }
    if requirements::RequirementsSource::available(path) {
        return Ok(Box::new(requirements::RequirementsSource::new(path)));
    }
    bail!(
        "no dependency source found in {}: need poetry with a pyproject.toml, or a requirements.txt",
        path.display()
    )
}
