use crate::core::area::ClassAreaRecord;
use crate::core::matrix::TransitionMatrix;
use crate::core::transition::TransitionTable;
use crate::types::{LandError, LandResult};
use csv::Writer;
use std::path::Path;

fn open_writer(path: &Path) -> LandResult<Writer<std::fs::File>> {
    Writer::from_path(path).map_err(|e| LandError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write the aggregated area summary for a batch of rasters.
///
/// Headers come from the record's field names; when every input failed and
/// there are no rows, the header line is still written.
pub fn write_area_summary<P: AsRef<Path>>(path: P, records: &[ClassAreaRecord]) -> LandResult<()> {
    let path = path.as_ref();
    log::info!("Writing area summary ({} rows): {}", records.len(), path.display());

    let mut writer = open_writer(path)?;
    if records.is_empty() {
        writer.write_record(["Land Use Class", "Pixel Count", "Area (sq meters)", "Raster Name"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the transition code lookup table.
pub fn write_transition_table<P: AsRef<Path>>(path: P, table: &TransitionTable) -> LandResult<()> {
    let path = path.as_ref();
    log::info!("Writing transition table ({} rows): {}", table.len(), path.display());

    let mut writer = open_writer(path)?;
    for record in table {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the transition matrix with class codes as row and column labels.
/// Layout: blank corner cell, one column per class, each row led by its class.
pub fn write_transition_matrix<P: AsRef<Path>>(
    path: P,
    matrix: &TransitionMatrix,
) -> LandResult<()> {
    let path = path.as_ref();
    log::info!(
        "Writing {}x{} transition matrix: {}",
        matrix.classes().len(),
        matrix.classes().len(),
        path.display()
    );

    let mut writer = open_writer(path)?;

    let mut header = vec![String::new()];
    header.extend(matrix.classes().iter().map(|c| c.to_string()));
    writer.write_record(&header)?;

    for (i, class) in matrix.classes().iter().enumerate() {
        let mut row = vec![class.to_string()];
        row.extend(matrix.counts().row(i).iter().map(|n| n.to_string()));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
