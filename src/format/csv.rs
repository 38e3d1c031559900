use std::io::Write;

use crate::models::PackageCompat;

/// RFC 4180 style CSV with a header row.
pub fn render(records: &[PackageCompat], out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "name,version,license,category,compatible,homepage,author")?;

    for record in records {
        let fields = [
            record.info.name.as_str(),
            record.info.version.as_str(),
            record.info.license.as_str(),
            &record.category.to_string(),
            if record.license_compat { "true" } else { "false" },
            record.info.homepage.as_deref().unwrap_or(""),
            record.info.author.as_deref().unwrap_or(""),
        ]
        .map(quote);
        writeln!(out, "{}", fields.join(","))?;
    }

    Ok(())
}

/// Quote a field when it contains a separator, quote, or newline; embedded
/// quotes are doubled.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
