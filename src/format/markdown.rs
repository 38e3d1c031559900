use std::io::Write;

use crate::models::PackageCompat;

/// GitHub-flavored pipe table.
pub fn render(records: &[PackageCompat], out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "| Name | Version | License | Category | Compatible |")?;
    writeln!(out, "|------|---------|---------|----------|------------|")?;

    for record in records {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            escape(&record.info.name),
            escape(&record.info.version),
            escape(super::license_label(record)),
            record.category,
            if record.license_compat { "yes" } else { "no" },
        )?;
    }

    Ok(())
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::sample_records;

    #[test]
    fn test_render_pipe_table() {
        let mut out = Vec::new();
        render(&sample_records(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("| Name |"));
        assert!(text.contains("| requests | 2.28.1 | Apache 2.0 | Permissive | yes |"));
        assert!(text.contains("| mystery | 0.1.0 | unknown | Unknown | no |"));
    }

    #[test]
    fn test_pipes_in_cells_are_escaped() {
        let mut records = sample_records();
        records[0].info.license = "MIT | Apache".to_string();

        let mut out = Vec::new();
        render(&records, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("MIT \\| Apache"));
    }
}
