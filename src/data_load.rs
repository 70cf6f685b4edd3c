use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::BufReader, path::Path};

use crate::data::{record::BedMethylRecord, MethylationTable};

/// Reads the whole header-free pileup into memory and checks the row count
/// against the expected number for the dataset. A mismatch is fatal and
/// happens before any output is written.
pub fn load_pileup<P: AsRef<Path>>(path: P, expected_rows: usize) -> Result<MethylationTable> {
    let path_ref = path.as_ref();

    let file = File::open(path_ref)
        .with_context(|| format!("Failed to open pileup at: {:?}", path_ref))?;
    let reader = BufReader::new(file);
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .flexible(false)
        .from_reader(reader);

    let mut records: Vec<BedMethylRecord> = Vec::new();
    for (line_num, row) in rdr.deserialize::<BedMethylRecord>().enumerate() {
        let record = row.with_context(|| {
            format!(
                "Failed to parse pileup record at line {} in {:?}",
                line_num + 1,
                path_ref
            )
        })?;
        records.push(record);
    }

    println!("  {:4} rows  READ: {}", records.len(), path_ref.display());

    if records.len() != expected_rows {
        bail!(
            "Row count mismatch in {:?}: found {} rows, expected {}",
            path_ref,
            records.len(),
            expected_rows
        );
    }

    Ok(MethylationTable::new(records))
}
