pub mod modtype;
pub mod record;
pub mod strand;

use record::BedMethylRecord;

/// Semantic names for the 11 positional pileup columns.
pub const COLUMN_LABELS: [&str; 11] = [
    "RNAME",    // reference sequence name
    "POS",      // 0-based start position
    "END",      // 0-based exclusive end position
    "METH",     // abbreviated name of the modified base examined
    "SCORE",    //
    "STRAND",   // strand of the reference sequence, "+" or "-"
    "IGNORE0",  // compatibility only
    "IGNORE1",  // compatibility only
    "IGNORE2",  // compatibility only
    "COVERAGE", // read coverage at the reference position
    "PERC",     // percentage of modified bases, 100 * Nmod/(Nmod + Ncanon)
];

/// The whole pileup table, held in memory in file order.
#[derive(Debug)]
pub struct MethylationTable {
    pub records: Vec<BedMethylRecord>,
}

impl MethylationTable {
    pub fn new(records: Vec<BedMethylRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every row without a defined modification percentage. Row order
    /// among the retained rows is unchanged.
    pub fn prune_missing_percentage(&mut self) {
        self.records
            .retain(|record| record.percent_modified.is_some());
    }
}

/// Prints the A..K column letters above the semantic labels so a drifted
/// column layout is easy to spot by eye.
pub fn print_column_alignment() {
    let letters: Vec<String> = ('A'..='K').map(|c| format!("{:8}", c)).collect();
    let labels: Vec<String> = COLUMN_LABELS
        .iter()
        .map(|label| format!("{:8}", label))
        .collect();

    println!("COLUMNS: {}", letters.join(" "));
    println!("COLUMNS: {}", labels.join(" "));
}
