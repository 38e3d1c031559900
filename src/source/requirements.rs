use std::path::{Path, PathBuf};

use anyhow::Result;
use regex::Regex;

use super::DependencySource;

/// Enumerates dependencies from a `requirements.txt`.
///
/// Only names are extracted; version pins, extras (`name[extra]`), and
/// environment markers are stripped. Comment lines, pip flags (`-r`, `-e`)
/// and direct URL requirements are skipped.
pub struct RequirementsSource {
    file: PathBuf,
}

impl RequirementsSource {
    pub fn new(path: &Path) -> Self {
        Self {
            file: path.join("requirements.txt"),
        }
    }

    pub fn available(path: &Path) -> bool {
        path.join("requirements.txt").exists()
    }
}

impl DependencySource for RequirementsSource {
    fn label(&self) -> &'static str {
        "requirements.txt"
    }

    fn dependencies(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.file)?;
        parse_requirements(&content)
    }
}

fn parse_requirements(content: &str) -> Result<Vec<String>> {
    let re = Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._\-]*)")?;
    let mut names = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        // Direct URL requirements carry no usable package name.
        if line.contains("://") {
            continue;
        }
        if let Some(caps) = re.captures(line) {
            names.push(caps[1].to_string());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_requirements() {
        let content = "\
# comment
requests==2.28.1
flask>=2.0.0
numpy==1.24.0 ; python_version >= '3.8'
uvicorn[standard]>=0.20
-r extra.txt
git+https://github.com/example/pkg.git
";
        let names = parse_requirements(content).unwrap();
        assert_eq!(names, vec!["requests", "flask", "numpy", "uvicorn"]);
    }

    #[test]
    fn test_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("requirements.txt")).unwrap();
        writeln!(f, "requests==2.28.1").unwrap();
        writeln!(f, "rich").unwrap();

        let source = RequirementsSource::new(dir.path());
        let names = source.dependencies().unwrap();
        assert_eq!(names, vec!["requests", "rich"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = RequirementsSource::new(dir.path());
        assert!(source.dependencies().is_err());
    }
}
