use crate::license::{classifier::classify, matrix};
use crate::models::{PackageCompat, PackageInfo};

/// Build the compatibility report: one [`PackageCompat`] per input package,
/// in input order, no filtering or deduplication.
///
/// The project license is classified once and that category is reused for
/// every dependency check.
pub fn build_report(project_license: &str, packages: &[PackageInfo]) -> Vec<PackageCompat> {
    let project_category = classify(project_license);

    packages
        .iter()
        .map(|info| {
            let category = classify(&info.license);
            PackageCompat {
                info: info.clone(),
                category,
                license_compat: matrix::compatible(project_category, category),
            }
        })
        .collect()
}
