//! Batch drivers composing the core computations with raster and CSV I/O.
//!
//! Inputs arrive as explicit configuration rather than hardcoded file lists,
//! so the same drivers serve any batch definition.

use crate::core::area::{summarize_area, ClassAreaRecord};
use crate::core::matrix::build_transition_matrix;
use crate::core::transition::encode_transitions;
use crate::io::raster::{read_class_raster, write_transition_raster};
use crate::io::table::{write_area_summary, write_transition_matrix, write_transition_table};
use crate::types::{LandError, LandResult};
use rayon::prelude::*;
use std::path::PathBuf;

/// Inputs and destination for one area-summary batch run
#[derive(Debug, Clone)]
pub struct AreaBatchConfig {
    pub inputs: Vec<PathBuf>,
    pub output_csv: PathBuf,
}

/// Outcome of an area batch: the rows written and the files that failed
#[derive(Debug)]
pub struct AreaBatchReport {
    pub records: Vec<ClassAreaRecord>,
    pub failures: Vec<(PathBuf, LandError)>,
}

/// Summarize every configured raster and write one aggregated CSV.
///
/// Files are independent, so they are summarized in parallel; the CSV keeps
/// the configured input order regardless of completion order. A file that
/// cannot be read is reported in the returned report instead of aborting
/// the rest of the batch.
pub fn run_area_batch(config: &AreaBatchConfig) -> LandResult<AreaBatchReport> {
    log::info!("Summarizing {} rasters", config.inputs.len());

    let results: Vec<(PathBuf, LandResult<Vec<ClassAreaRecord>>)> = config
        .inputs
        .par_iter()
        .map(|path| {
            let summary = read_class_raster(path).map(|raster| summarize_area(&raster));
            (path.clone(), summary)
        })
        .collect();

    let mut records = Vec::new();
    let mut failures = Vec::new();
    for (path, result) in results {
        match result {
            Ok(rows) => records.extend(rows),
            Err(e) => {
                log::error!("Skipping {}: {}", path.display(), e);
                failures.push((path, e));
            }
        }
    }

    write_area_summary(&config.output_csv, &records)?;
    log::info!(
        "Area batch complete: {} rows, {} failed files",
        records.len(),
        failures.len()
    );

    Ok(AreaBatchReport { records, failures })
}

/// One transition analysis run over a time-stamped raster pair
#[derive(Debug, Clone)]
pub struct TransitionConfig {
    pub raster1: PathBuf,
    pub raster2: PathBuf,
    pub year1: u32,
    pub year2: u32,
    pub output_raster: PathBuf,
    pub output_table: PathBuf,
    /// Directory receiving the year-parameterized matrix CSV
    pub output_dir: PathBuf,
}

impl TransitionConfig {
    /// Matrix destination, named by the year pair
    pub fn matrix_path(&self) -> PathBuf {
        self.output_dir.join(format!(
            "final_transition_matrix_{}_{}.csv",
            self.year1, self.year2
        ))
    }
}

/// Run the transition encoder and matrix builder over one raster pair,
/// writing the combined raster, the lookup table, and the matrix CSV.
pub fn run_transition_analysis(config: &TransitionConfig) -> LandResult<()> {
    log::info!(
        "Transition analysis {} ({}) -> {} ({})",
        config.raster1.display(),
        config.year1,
        config.raster2.display(),
        config.year2
    );

    let first = read_class_raster(&config.raster1)?;
    let second = read_class_raster(&config.raster2)?;

    let product = encode_transitions(&first, &second)?;
    write_transition_raster(&config.output_raster, &product.combined, &first)?;
    write_transition_table(&config.output_table, &product.table)?;

    let matrix = build_transition_matrix(&first, &second)?;
    write_transition_matrix(config.matrix_path(), &matrix)?;

    log::info!(
        "Transition analysis {}-{} complete",
        config.year1,
        config.year2
    );
    Ok(())
}
