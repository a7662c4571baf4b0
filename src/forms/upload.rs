//! CSV import of record collections.

use std::io::Read;

use crate::domain::record::Record;
use crate::domain::types::FieldValue;
use crate::forms::FormError;

/// Uploaded CSV payload with a header row naming the record fields.
#[derive(Debug, Default)]
pub struct UploadRecordsForm {
    pub csv: String,
}

impl UploadRecordsForm {
    pub fn parse(&self) -> Result<Vec<Record>, FormError> {
        parse_records_csv(self.csv.as_bytes())
    }
}

/// Reads a headered CSV into records.
///
/// Headers are trimmed and blank headers skipped. Empty cells leave the field
/// absent; other cells are typed with [`FieldValue::parse`].
pub fn parse_records_csv<R: Read>(reader: R) -> Result<Vec<Record>, FormError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;
        let record = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, cell)| !header.is_empty() && !cell.is_empty())
            .map(|(header, cell)| (header.to_string(), FieldValue::parse(cell)))
            .collect::<Record>();
        records.push(record);
    }

    Ok(records)
}
