use std::io::Write;

use crate::models::PackageCompat;

const HEADERS: [&str; 5] = ["Name", "Version", "License", "Category", "Compatible"];

/// Plain aligned table, one row per dependency.
pub fn render(records: &[PackageCompat], out: &mut dyn Write) -> std::io::Result<()> {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.info.name.clone(),
                r.info.version.clone(),
                super::license_label(r).to_string(),
                r.category.to_string(),
                if r.license_compat { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    write_row(out, &HEADERS.map(str::to_string), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }

    Ok(())
}

fn write_row<S: AsRef<str>>(out: &mut dyn Write, cells: &[S], widths: &[usize; 5]) -> std::io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell.as_ref(), width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}
