use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

use super::DependencySource;

/// Enumerates dependencies via `poetry show`, which lists the resolved
/// dependency set of the active poetry project one package per line.
pub struct PoetrySource {
    project_dir: PathBuf,
}

impl PoetrySource {
    pub fn new(path: &Path) -> Self {
        Self {
            project_dir: path.to_path_buf(),
        }
    }

    /// Usable when the project has a `pyproject.toml` and the `poetry`
    /// binary is on the path and responds.
    pub fn available(path: &Path) -> bool {
        if !path.join("pyproject.toml").exists() {
            return false;
        }
        Command::new("poetry")
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }
}

impl DependencySource for PoetrySource {
    fn label(&self) -> &'static str {
        "poetry"
    }

    fn dependencies(&self) -> Result<Vec<String>> {
        let output = Command::new("poetry")
            .arg("show")
            .current_dir(&self.project_dir)
            .output()
            .context("failed to run `poetry show`")?;

        if !output.status.success() {
            bail!(
                "`poetry show` exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(parse_show_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Extract package names from `poetry show` output. Each line starts with
/// the package name followed by version and description columns; outdated
/// markers like `(!)` land in later columns and are ignored.
fn parse_show_output(out: &str) -> Vec<String> {
    out.lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_output() {
        let out = "\
requests      2.28.1  Python HTTP for Humans.
rich (!)      13.3.1  Rich text and beautiful formatting
typing-extensions 4.4.0 Backported type hints
";
        let names = parse_show_output(out);
        assert_eq!(names, vec!["requests", "rich", "typing-extensions"]);
    }

    #[test]
    fn test_parse_show_output_skips_blank_lines() {
        assert!(parse_show_output("\n\n").is_empty());
        assert!(parse_show_output("").is_empty());
    }

    #[test]
    fn test_not_available_without_pyproject() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!PoetrySource::available(dir.path()));
    }
}
