//! CSV export of search results, split into "has website" / "no website" rows.

use std::io::Write;

use chrono::NaiveDate;
use thiserror::Error;

use crate::BusinessRecord;

pub const HEADERS: [&str; 8] = [
    "Business Name",
    "Category",
    "Phone",
    "Address",
    "Website",
    "Status",
    "Social Links",
    "Verification Notes",
];

const HAS_WEBSITE: &str = "Has Website";
const NO_WEBSITE: &str = "No Website";
const SOCIALS_JOIN: &str = "; ";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Splits records by website presence, preserving provider order in each half.
#[must_use]
pub fn partition_by_website(
    records: &[BusinessRecord],
) -> (Vec<&BusinessRecord>, Vec<&BusinessRecord>) {
    records.iter().partition(|r| r.has_website())
}

/// Writes the header row, then every with-website row, then every
/// no-website row.
///
/// Fields are quoted only when they contain a comma, quote, or line break;
/// embedded quotes are doubled.
///
/// # Errors
///
/// Returns [`ExportError`] if writing to `writer` fails.
pub fn write_csv<W: Write>(
    writer: W,
    with_website: &[&BusinessRecord],
    no_website: &[&BusinessRecord],
) -> Result<W, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADERS)?;

    for biz in with_website {
        let socials = biz.socials().join(SOCIALS_JOIN);
        wtr.write_record([
            biz.name(),
            biz.category(),
            biz.phone(),
            biz.address(),
            biz.website().unwrap_or_default(),
            HAS_WEBSITE,
            socials.as_str(),
            biz.verification_notes(),
        ])?;
    }

    for biz in no_website {
        wtr.write_record([
            biz.name(),
            biz.category(),
            biz.phone(),
            biz.address(),
            "",
            NO_WEBSITE,
            "",
            biz.verification_notes(),
        ])?;
    }

    wtr.flush()?;
    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

/// Renders the full export for `records` into a string.
///
/// # Errors
///
/// Returns [`ExportError`] if the CSV writer fails.
pub fn to_csv_string(records: &[BusinessRecord]) -> Result<String, ExportError> {
    let (with_website, no_website) = partition_by_website(records);
    let bytes = write_csv(Vec::new(), &with_website, &no_website)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Download filename for an export produced on `date`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("local_biz_scout_export_{}.csv", date.format("%Y-%m-%d"))
}
