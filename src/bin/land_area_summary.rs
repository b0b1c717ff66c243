use anyhow::{bail, Context, Result};
use landstat::batch::{run_area_batch, AreaBatchConfig};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: land_area_summary <output.csv> <raster> [raster ...]");
    }

    let config = AreaBatchConfig {
        output_csv: PathBuf::from(&args[0]),
        inputs: args[1..].iter().map(PathBuf::from).collect(),
    };

    let report = run_area_batch(&config).context("area batch failed")?;
    println!(
        "Wrote {} rows to {}",
        report.records.len(),
        config.output_csv.display()
    );

    if !report.failures.is_empty() {
        for (path, err) in &report.failures {
            eprintln!("failed: {}: {}", path.display(), err);
        }
        bail!(
            "{} of {} rasters could not be processed",
            report.failures.len(),
            config.inputs.len()
        );
    }
    Ok(())
}
