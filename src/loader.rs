//! Seed loading: semicolon-delimited text with a header row of field names.

use crate::error::LoadError;
use crate::store::Record;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub const SEED_DELIMITER: u8 = b';';

/// Read and parse the seed file. Any failure is fatal for startup; nothing is partially loaded.
pub async fn load_seed(path: &Path) -> Result<Vec<Record>, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_seed(bytes.as_slice())?;
    tracing::info!(path = %path.display(), records = records.len(), "seed data loaded");
    Ok(records)
}

/// Parse delimited rows into records keyed by the header row. Values stay strings.
pub fn parse_seed<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(SEED_DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(LoadError::MissingHeader);
    }
    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        out.push(record);
    }
    Ok(out)
}
