use crate::models::LicenseCategory;

/// Ordered keyword rules: first matching rule wins.
///
/// Specific patterns must be listed before the generic ones they contain —
/// `wtfpl`, `agpl` and `lgpl` all contain `gpl` and would otherwise land in
/// strong copyleft. Matching is case-insensitive substring against the
/// lowercased input.
const RULES: &[(&[&str], LicenseCategory)] = &[
    (
        &["proprietary", "commercial", "all rights reserved"],
        LicenseCategory::Proprietary,
    ),
    (
        &["public domain", "unlicense", "cc0", "wtfpl"],
        LicenseCategory::PublicDomain,
    ),
    (&["agpl", "affero"], LicenseCategory::StrongCopyleft),
    (
        &["lgpl", "lesser general public"],
        LicenseCategory::WeakCopyleft,
    ),
    (
        &["gpl", "general public license"],
        LicenseCategory::StrongCopyleft,
    ),
    (&["mpl", "mozilla public"], LicenseCategory::WeakCopyleft),
    (&["epl", "eclipse public"], LicenseCategory::WeakCopyleft),
    (
        &["eupl", "european union public"],
        LicenseCategory::WeakCopyleft,
    ),
    (
        &["cddl", "open software license", "osl-3"],
        LicenseCategory::WeakCopyleft,
    ),
    (
        &[
            "mit",
            "expat",
            "apache",
            "bsd",
            "isc",
            "zlib",
            "boost",
            "bsl-1.0",
            "x11",
            "artistic",
            "academic free",
            "python software foundation",
            "psf",
        ],
        LicenseCategory::Permissive,
    ),
];

/// Classify a raw license string into a [`LicenseCategory`].
///
/// Handles identifiers (`MIT`, `GPL-3.0`), full names (`Apache License 2.0`),
/// dual licenses joined by `or` / `/` (most permissive branch wins), and
/// `and`-joined conjunctions (most restrictive branch wins). Empty or
/// unrecognized input degrades to `Unknown`; this function never fails.
pub fn classify(license: &str) -> LicenseCategory {
    let lower = license.trim().to_lowercase();

    if lower.is_empty() || lower == "unknown" {
        return LicenseCategory::Unknown;
    }

    // Slash is a common shorthand for a license choice ("MIT/Apache-2.0").
    let normalized = lower.replace('/', " or ");

    // Dual license: the consumer may pick whichever branch suits them.
    if normalized.contains(" or ") {
        return most_permissive(normalized.split(" or ").map(classify_single));
    }

    // Conjunction: every branch binds, so the harshest one governs.
    if normalized.contains(" and ") {
        return most_restrictive(normalized.split(" and ").map(classify_single));
    }

    classify_single(&normalized)
}

fn classify_single(part: &str) -> LicenseCategory {
    // Exception clauses ("GPL-2.0 with classpath-exception") do not change
    // the family of the base license.
    let base = part.split(" with ").next().unwrap_or(part).trim();

    for (keywords, category) in RULES {
        if keywords.iter().any(|k| base.contains(k)) {
            return *category;
        }
    }
    LicenseCategory::Unknown
}

/// Rank from most to least favorable for the consumer. Drives both
/// `or` (min) and `and` (max) resolution; `Unknown` ranks last so an
/// unclassifiable branch dominates a conjunction but never an alternative.
fn permissiveness(category: LicenseCategory) -> u8 {
    match category {
        LicenseCategory::PublicDomain => 0,
        LicenseCategory::Permissive => 1,
        LicenseCategory::WeakCopyleft => 2,
        LicenseCategory::StrongCopyleft => 3,
        LicenseCategory::Proprietary => 4,
        LicenseCategory::Unknown => 5,
    }
}

fn most_permissive(categories: impl Iterator<Item = LicenseCategory>) -> LicenseCategory {
    categories
        .min_by_key(|c| permissiveness(*c))
        .unwrap_or(LicenseCategory::Unknown)
}

fn most_restrictive(categories: impl Iterator<Item = LicenseCategory>) -> LicenseCategory {
    categories
        .max_by_key(|c| permissiveness(*c))
        .unwrap_or(LicenseCategory::Unknown)
}
