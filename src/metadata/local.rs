use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

use crate::models::PackageInfo;

/// Read metadata for every installed distribution in the interpreter's
/// site-packages, keyed by normalized package name.
///
/// Returns an empty map when no Python interpreter responds; callers fall
/// back to the registry lookup in that case.
pub fn installed_distributions() -> HashMap<String, PackageInfo> {
    let mut packages = HashMap::new();

    let Some(site_packages) = site_packages_dir() else {
        return packages;
    };
    let Ok(entries) = std::fs::read_dir(&site_packages) else {
        return packages;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_name = entry.file_name();
        let dir_name = file_name.to_string_lossy();

        let metadata_file = if dir_name.ends_with(".dist-info") {
            path.join("METADATA")
        } else if dir_name.ends_with(".egg-info") {
            path.join("PKG-INFO")
        } else {
            continue;
        };

        if let Ok(content) = std::fs::read_to_string(&metadata_file) {
            if let Some(info) = parse_metadata(&content) {
                packages.insert(normalize_name(&info.name), info);
            }
        }
    }

    packages
}

/// PEP 503 name normalization: case-insensitive, `-`/`_`/`.` equivalent.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(['_', '.'], "-")
}

fn site_packages_dir() -> Option<PathBuf> {
    for python in ["python3", "python"] {
        let output = Command::new(python)
            .args(["-c", "import sysconfig; print(sysconfig.get_paths()['purelib'])"])
            .output();
        if let Ok(out) = output {
            if out.status.success() {
                let path = String::from_utf8_lossy(&out.stdout).trim().to_string();
                if !path.is_empty() {
                    return Some(PathBuf::from(path));
                }
            }
        }
    }
    None
}

/// Parse the RFC 822 style header block of a `METADATA` / `PKG-INFO` file.
///
/// The `License` header is preferred; when it is missing or a placeholder
/// (`UNKNOWN`), the first trove license classifier is used instead.
pub fn parse_metadata(content: &str) -> Option<PackageInfo> {
    let mut name = None;
    let mut version = None;
    let mut license = None;
    let mut classifier_license = None;
    let mut homepage = None;
    let mut author = None;

    for line in content.lines() {
        // Headers end at the first blank line; the long description follows.
        if line.is_empty() {
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key {
            "Name" => name = Some(value.to_string()),
            "Version" => version = Some(value.to_string()),
            "License" => license = Some(value.to_string()),
            "Home-page" => homepage = Some(value.to_string()),
            "Author" => author = Some(value.to_string()),
            "Classifier" if classifier_license.is_none() => {
                if let Some(rest) = value.strip_prefix("License ::") {
                    // "License :: OSI Approved :: MIT License" → "MIT License"
                    let last = rest.rsplit("::").next().map(str::trim);
                    if let Some(last) = last.filter(|s| !s.is_empty() && *s != "OSI Approved") {
                        classifier_license = Some(last.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    let license = match license {
        Some(l) if !l.eq_ignore_ascii_case("unknown") => l,
        _ => classifier_license.unwrap_or_default(),
    };

    Some(PackageInfo {
        name: name?,
        version: version.unwrap_or_default(),
        license,
        homepage,
        author,
    })
}
