use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        default_value = "data/hxb2f.meth.tsv",
        help = "Tab-separated methylation pileup with 11 columns and no header."
    )]
    pub pileup: String,

    #[arg(
        short,
        long,
        default_value = "data/hxb2f.meth_cleaned.tsv",
        help = "Destination for the cleaned table. Should be a .tsv file."
    )]
    pub output: String,

    #[arg(
        long,
        default_value = "data/hxb2f.meth_cleaned.txt",
        help = "Byte-identical copy of the cleaned table, for opening in spreadsheet tools."
    )]
    pub output_txt: String,

    #[arg(
        long,
        default_value_t = 4147,
        help = "Expected number of rows in the pileup. A mismatch aborts the run before anything is written."
    )]
    pub expected_rows: usize,
}
