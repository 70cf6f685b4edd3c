use anyhow::Result;
use clap::Parser;
use humantime::format_duration;
use log::info;
use std::time::Instant;

mod argparser;
mod clean;
mod data;
mod data_load;

use argparser::Args;
use clean::clean_pileup;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    clean_pileup(args)?;

    let elapsed = start.elapsed();
    info!("Finished in {}", format_duration(elapsed));
    Ok(())
}
