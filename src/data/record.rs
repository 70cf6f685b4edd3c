use serde::{Deserialize, Deserializer, Serialize};

use crate::data::{modtype::ModType, strand::Strand};

/// One row of the 11-column, header-free bedMethyl pileup table.
///
/// Field order matches the file layout exactly; the three compatibility
/// fields are carried through untouched so a written record reproduces
/// the full row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedMethylRecord {
    pub rname: String,

    pub start: u64,

    pub end: u64,

    pub mod_type: ModType,

    pub score: u32,

    pub strand: Strand,

    compat0: String,

    compat1: String,

    compat2: String,

    pub coverage: u32,

    /// `None` when the field is empty, NaN or not a number at all.
    #[serde(deserialize_with = "percent_from_field")]
    pub percent_modified: Option<f64>,
}

fn percent_from_field<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(Some(value)),
        _ => Ok(None),
    }
}
