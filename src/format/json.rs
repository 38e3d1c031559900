use std::io::Write;

use anyhow::Result;

use crate::models::PackageCompat;

/// Pretty-printed JSON array of report records.
pub fn render(records: &[PackageCompat], out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::sample_records;

    #[test]
    fn test_render_round_trips() {
        let mut out = Vec::new();
        render(&sample_records(), &mut out).unwrap();

        let parsed: Vec<PackageCompat> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].info.name, "requests");
        assert!(parsed[0].license_compat);
        assert!(!parsed[1].license_compat);
    }

    #[test]
    fn test_license_compat_is_a_bool_field() {
        let mut out = Vec::new();
        render(&sample_records(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value[0]["license_compat"].is_boolean());
    }
}
