use std::path::Path;

/// Discover the project's own declared license string from its manifests.
///
/// Checked in order: `pyproject.toml` (`[project].license` as a plain string
/// or `{ text = ... }` table, then `[tool.poetry].license`), then
/// `setup.cfg` (`[metadata]` section, `license` key). Returns `None` when
/// nothing is declared; the caller decides whether that is fatal.
pub fn discover_license(path: &Path) -> Option<String> {
    pyproject_license(path).or_else(|| setup_cfg_license(path))
}

fn pyproject_license(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path.join("pyproject.toml")).ok()?;
    let doc: toml::Value = content.parse().ok()?;

    if let Some(license) = doc.get("project").and_then(|p| p.get("license")) {
        match license {
            toml::Value::String(s) => return Some(s.clone()),
            toml::Value::Table(t) => {
                // `{ file = ... }` points at license text, which is out of
                // scope here; only the `text` form carries an identifier.
                if let Some(text) = t.get("text").and_then(|v| v.as_str()) {
                    return Some(text.to_string());
                }
            }
            _ => {}
        }
    }

    doc.get("tool")?
        .get("poetry")?
        .get("license")?
        .as_str()
        .map(str::to_string)
}

/// Minimal INI walk of `setup.cfg`: find `[metadata]`, read its `license` key.
fn setup_cfg_license(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path.join("setup.cfg")).ok()?;
    let mut in_metadata = false;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_metadata = line == "[metadata]";
            continue;
        }
        if !in_metadata {
            continue;
        }
        if let Some((key, value)) = line.split_once(['=', ':']) {
            if key.trim() == "license" {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pyproject_project_license_string() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"demo\"\nlicense = \"MIT\"\n",
        )
        .unwrap();
        assert_eq!(discover_license(dir.path()).as_deref(), Some("MIT"));
    }

    #[test]
    fn test_pyproject_project_license_table() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nlicense = { text = \"Apache-2.0\" }\n",
        )
        .unwrap();
        assert_eq!(discover_license(dir.path()).as_deref(), Some("Apache-2.0"));
    }

    #[test]
    fn test_pyproject_poetry_license() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pyproject.toml"),
            "[tool.poetry]\nname = \"demo\"\nlicense = \"BSD-3-Clause\"\n",
        )
        .unwrap();
        assert_eq!(
            discover_license(dir.path()).as_deref(),
            Some("BSD-3-Clause")
        );
    }

    #[test]
    fn test_setup_cfg_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("setup.cfg"),
            "[metadata]\nname = demo\nlicense = GPL-3.0\n\n[options]\nzip_safe = false\n",
        )
        .unwrap();
        assert_eq!(discover_license(dir.path()).as_deref(), Some("GPL-3.0"));
    }

    #[test]
    fn test_license_outside_metadata_section_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("setup.cfg"),
            "[options]\nlicense = MIT\n",
        )
        .unwrap();
        assert!(discover_license(dir.path()).is_none());
    }

    #[test]
    fn test_nothing_declared() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_license(dir.path()).is_none());
    }
}
