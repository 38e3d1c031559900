use crate::models::LicenseCategory;

const N: usize = LicenseCategory::COUNT;

/// Compatibility table, fully enumerated: `COMPAT[project][dependency]`
/// answers "may a dependency of this category be combined into a project
/// of that category without violating the dependency's terms".
///
/// Direction matters: a strong-copyleft project may absorb a permissive
/// dependency, but not the other way around. `Unknown` on either side is
/// never compatible — an unclassified license is flagged for manual review
/// rather than waved through. Proprietary dependencies are never
/// auto-approved; their terms cannot be read off a category tag.
///
/// Column order matches [`LicenseCategory::index`]:
/// public-domain, permissive, weak copyleft, strong copyleft,
/// proprietary, unknown.
#[rustfmt::skip]
const COMPAT: [[bool; N]; N] = [
    // project: public domain
    [true,  false, false, false, false, false],
    // project: permissive
    [true,  true,  true,  false, false, false],
    // project: weak copyleft
    [true,  true,  true,  false, false, false],
    // project: strong copyleft
    [true,  true,  true,  true,  false, false],
    // project: proprietary
    [true,  true,  true,  false, false, false],
    // project: unknown
    [false, false, false, false, false, false],
];

/// Look up the compatibility verdict for a dependency of category `dep`
/// inside a project of category `project`. Pure table lookup; never fails.
pub fn compatible(project: LicenseCategory, dep: LicenseCategory) -> bool {
    COMPAT[project.index()][dep.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LicenseCategory::*;

    const ALL: [LicenseCategory; 6] = [
        PublicDomain,
        Permissive,
        WeakCopyleft,
        StrongCopyleft,
        Proprietary,
        Unknown,
    ];

    #[test]
    fn test_unknown_is_never_compatible() {
        for cat in ALL {
            assert!(!compatible(Unknown, cat));
            assert!(!compatible(cat, Unknown));
        }
    }

    #[test]
    fn test_permissive_pairs() {
        assert!(compatible(Permissive, Permissive));
        assert!(compatible(Permissive, PublicDomain));
        assert!(compatible(Permissive, WeakCopyleft));
    }

    #[test]
    fn test_direction_matters() {
        // A permissive project cannot absorb a strong-copyleft dependency,
        // but a strong-copyleft project can absorb a permissive one.
        assert!(!compatible(Permissive, StrongCopyleft));
        assert!(compatible(StrongCopyleft, Permissive));
        assert!(compatible(StrongCopyleft, StrongCopyleft));
    }

    #[test]
    fn test_proprietary_dependency_never_auto_approved() {
        for cat in ALL {
            assert!(!compatible(cat, Proprietary));
        }
    }

    #[test]
    fn test_public_domain_project_only_takes_public_domain() {
        assert!(compatible(PublicDomain, PublicDomain));
        assert!(!compatible(PublicDomain, Permissive));
        assert!(!compatible(PublicDomain, WeakCopyleft));
    }

    #[test]
    fn test_proprietary_project_takes_permissive() {
        assert!(compatible(Proprietary, Permissive));
        assert!(compatible(Proprietary, WeakCopyleft));
        assert!(!compatible(Proprietary, StrongCopyleft));
    }
}
