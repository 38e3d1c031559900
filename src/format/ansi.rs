use std::io::Write;

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{LicenseCategory, PackageCompat};

/// Colored terminal report: summary line followed by a full table.
pub fn render(records: &[PackageCompat], out: &mut dyn Write) -> std::io::Result<()> {
    let total = records.len();
    let compatible = records.iter().filter(|r| r.license_compat).count();
    let incompatible = total - compatible;

    writeln!(
        out,
        " {} v{}",
        "license-compat".bold(),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(
        out,
        " Total: {}  {} compatible  {} incompatible\n",
        total,
        compatible.to_string().green(),
        if incompatible > 0 {
            incompatible.to_string().red().to_string()
        } else {
            incompatible.to_string()
        },
    )?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Compatible").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        let category_color = match record.category {
            LicenseCategory::PublicDomain => Color::Cyan,
            LicenseCategory::Permissive => Color::Green,
            LicenseCategory::WeakCopyleft => Color::Yellow,
            LicenseCategory::StrongCopyleft => Color::Red,
            LicenseCategory::Proprietary => Color::Magenta,
            LicenseCategory::Unknown => Color::DarkGrey,
        };

        let (compat_str, compat_color) = if record.license_compat {
            ("✓ yes", Color::Green)
        } else {
            ("✗ no", Color::Red)
        };

        table.add_row(vec![
            Cell::new(&record.info.name),
            Cell::new(&record.info.version),
            Cell::new(super::license_label(record)),
            Cell::new(record.category.to_string()).fg(category_color),
            Cell::new(compat_str)
                .fg(compat_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    writeln!(out, "{}", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::sample_records;

    #[test]
    fn test_render_summary_and_rows() {
        let mut out = Vec::new();
        render(&sample_records(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("license-compat"));
        assert!(text.contains("Total: 2"));
        assert!(text.contains("requests"));
        assert!(text.contains("mystery"));
    }
}
