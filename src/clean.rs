use anyhow::{bail, Context, Result};
use log::info;
use std::path::Path;

use crate::{
    argparser::Args,
    data::{print_column_alignment, MethylationTable},
    data_load::load_pileup,
};

fn check_extension(path: &Path, expected: &str) -> Result<()> {
    match path.extension() {
        Some(ext) if ext == expected => Ok(()),
        Some(ext) => bail!(
            "Incorrect file extension {:?} for {:?}. Should be {}",
            ext,
            path,
            expected
        ),
        None => bail!(
            "No filename provided for output. Should be a .{} file.",
            expected
        ),
    }
}

/// Serializes the table as tab-separated values, no header, preserving row
/// and column order. The destination directory must already exist.
pub fn write_pileup<P: AsRef<Path>>(path: P, table: &MethylationTable) -> Result<()> {
    let path_ref = path.as_ref();

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .from_path(path_ref)
        .with_context(|| format!("Failed to create file at: {:?}", path_ref))?;

    for record in &table.records {
        wtr.serialize(record)
            .with_context(|| format!("Failed to write record to: {:?}", path_ref))?;
    }
    wtr.flush()?;

    println!("  {:4} rows WROTE: {}", table.len(), path_ref.display());
    Ok(())
}

/// The whole pipeline: load, row-count check, drop undefined percentages,
/// column diagnostic, write the .txt and .tsv copies. Any failure aborts
/// the run with nothing salvaged.
pub fn clean_pileup(args: Args) -> Result<()> {
    check_extension(Path::new(&args.output), "tsv")?;
    check_extension(Path::new(&args.output_txt), "txt")?;

    let mut table = load_pileup(&args.pileup, args.expected_rows)
        .with_context(|| format!("Error loading pileup from path: '{}'", args.pileup))?;

    table.prune_missing_percentage();
    info!(
        "{} rows remain after dropping undefined modification percentages",
        table.len()
    );

    print_column_alignment();

    // The .txt file is a byte-identical copy of the .tsv, kept for opening
    // in spreadsheet tools.
    write_pileup(&args.output_txt, &table)?;
    write_pileup(&args.output, &table)?;

    Ok(())
}
