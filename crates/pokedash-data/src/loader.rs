//! CSV loading.

use crate::error::DataError;
use crate::record::Record;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load records from a CSV file.
pub fn load_records(path: &Path) -> Result<Vec<Record>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Read records from any CSV source with a header row.
///
/// Numeric fields are validated up front; rows numbered from 2 to account
/// for the header line.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize().enumerate() {
        let row = index + 2;
        let record: Record = result.map_err(|source| DataError::Row { row, source })?;
        record.validate(row)?;
        records.push(record);
    }
    if records.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(records)
}
