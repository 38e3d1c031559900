use serde::{Deserialize, Serialize};

/// Coarse license family a raw license string resolves to.
///
/// The set is closed; everything the classifier cannot place ends up as
/// `Unknown`, which the compatibility matrix treats as never compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseCategory {
    PublicDomain,
    Permissive,
    WeakCopyleft,
    StrongCopyleft,
    Proprietary,
    Unknown,
}

impl LicenseCategory {
    /// Number of categories; the compatibility matrix is `COUNT × COUNT`.
    pub const COUNT: usize = 6;

    /// Stable row/column index into the compatibility matrix.
    pub fn index(self) -> usize {
        match self {
            LicenseCategory::PublicDomain => 0,
            LicenseCategory::Permissive => 1,
            LicenseCategory::WeakCopyleft => 2,
            LicenseCategory::StrongCopyleft => 3,
            LicenseCategory::Proprietary => 4,
            LicenseCategory::Unknown => 5,
        }
    }
}

impl std::fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseCategory::PublicDomain => write!(f, "Public Domain"),
            LicenseCategory::Permissive => write!(f, "Permissive"),
            LicenseCategory::WeakCopyleft => write!(f, "Weak Copyleft"),
            LicenseCategory::StrongCopyleft => write!(f, "Strong Copyleft"),
            LicenseCategory::Proprietary => write!(f, "Proprietary"),
            LicenseCategory::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Descriptive metadata for one dependency, as declared by its distribution.
///
/// `license` is the raw declared string; an empty string means the
/// distribution declared nothing (or metadata lookup failed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub license: String,
    pub homepage: Option<String>,
    pub author: Option<String>,
}

impl PackageInfo {
    /// Placeholder record for a dependency whose metadata could not be
    /// retrieved; classifies to `Unknown` downstream.
    pub fn unresolved(name: &str) -> Self {
        PackageInfo {
            name: name.to_string(),
            version: String::new(),
            license: String::new(),
            homepage: None,
            author: None,
        }
    }
}

/// One report row: package metadata plus the compatibility verdict against
/// the project license.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageCompat {
    #[serde(flatten)]
    pub info: PackageInfo,
    pub category: LicenseCategory,
    pub license_compat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_indices_are_distinct() {
        let all = [
            LicenseCategory::PublicDomain,
            LicenseCategory::Permissive,
            LicenseCategory::WeakCopyleft,
            LicenseCategory::StrongCopyleft,
            LicenseCategory::Proprietary,
            LicenseCategory::Unknown,
        ];
        for (i, cat) in all.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
        assert_eq!(all.len(), LicenseCategory::COUNT);
    }

    #[test]
    fn test_unresolved_has_empty_license() {
        let info = PackageInfo::unresolved("requests");
        assert_eq!(info.name, "requests");
        assert!(info.license.is_empty());
        assert!(info.homepage.is_none());
    }
}
