use anyhow::{bail, Context, Result};
use landstat::batch::{run_transition_analysis, TransitionConfig};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 5 {
        bail!("usage: land_transition <raster1> <raster2> <year1> <year2> <output-dir>");
    }

    let year1: u32 = args[2].parse().context("year1 must be an integer")?;
    let year2: u32 = args[3].parse().context("year2 must be an integer")?;
    let output_dir = PathBuf::from(&args[4]);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("cannot create {}", output_dir.display()))?;

    let config = TransitionConfig {
        raster1: PathBuf::from(&args[0]),
        raster2: PathBuf::from(&args[1]),
        year1,
        year2,
        output_raster: output_dir.join(format!("transition_raster_{}_{}.tif", year1, year2)),
        output_table: output_dir.join(format!("transition_table_{}_{}.csv", year1, year2)),
        output_dir,
    };

    run_transition_analysis(&config).context("transition analysis failed")?;
    println!(
        "Transition products for {}-{} written to {}",
        year1,
        year2,
        config.output_dir.display()
    );
    Ok(())
}
