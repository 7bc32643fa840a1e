//! POI batch ingestion.
//!
//! Reads one or more vendor CSV exports with columns
//! {id, name, address, type, wgslng, wgslat}. Rows that fail to parse
//! (typically unparseable coordinates) are rejected and counted, never
//! fatal; the batches are concatenated in argument order.

use std::io::Read;
use std::path::PathBuf;

use center_map_poi_models::RawPoi;

/// Reads and merges every POI batch.
///
/// # Errors
///
/// Returns an error when a file cannot be opened or read.
pub fn read_batches(paths: &[PathBuf]) -> Result<Vec<RawPoi>, Box<dyn std::error::Error>> {
    let mut merged = Vec::new();
    for path in paths {
        let file = std::fs::File::open(path)?;
        let (mut raws, rejected) = parse_batch(file);
        log::info!(
            "Read {} POIs from {} ({rejected} malformed rows rejected)",
            raws.len(),
            path.display(),
        );
        merged.append(&mut raws);
    }
    Ok(merged)
}

/// Parses one CSV batch, returning the valid records and the count of
/// rejected rows.
pub fn parse_batch<R: Read>(reader: R) -> (Vec<RawPoi>, usize) {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut raws = Vec::new();
    let mut rejected = 0_usize;
    for record in csv_reader.deserialize::<RawPoi>() {
        match record {
            Ok(raw) => raws.push(raw),
            Err(err) => {
                rejected += 1;
                log::debug!("Rejected POI row: {err}");
            }
        }
    }
    (raws, rejected)
}
