//! Catalogue assembly and CSV export

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, TvSubsError};
use crate::types::ResolvedShow;

/// Default name of the exported catalogue file.
pub const OUTPUT_FILE: &str = "television_subreddit_id.csv";

/// CSV header, fixed column order.
pub const CSV_HEADER: [&str; 3] = ["ShowName", "subreddit_id", "Type"];

/// Zip the three parallel columns into catalogue rows.
///
/// # Errors
/// `TvSubsError::LengthMismatch` if the columns differ in length. The
/// pipeline keeps them index-aligned, so a mismatch is an upstream logic
/// defect rather than a recoverable condition.
pub fn assemble(
    names: &[String],
    ids: &[String],
    categories: &[String],
) -> Result<Vec<ResolvedShow>> {
    if names.len() != ids.len() || names.len() != categories.len() {
        return Err(TvSubsError::LengthMismatch {
            names: names.len(),
            ids: ids.len(),
            categories: categories.len(),
        });
    }

    Ok(names
        .iter()
        .zip(ids)
        .zip(categories)
        .map(|((name, id), category)| ResolvedShow {
            name: name.clone(),
            subreddit_id: id.clone(),
            category: category.clone(),
        })
        .collect())
}

/// Serialize catalogue rows as CSV, header first, one line per row.
pub fn write_catalog<W: Write>(writer: W, rows: &[ResolvedShow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write the catalogue to `path`, creating or truncating the file.
pub fn export_catalog(path: &Path, rows: &[ResolvedShow]) -> Result<()> {
    let file = File::create(path)?;
    write_catalog(file, rows)
}
