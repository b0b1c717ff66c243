use crate::types::ClassRaster;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-class pixel count and ground area for one source raster.
///
/// Field renames define the CSV column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassAreaRecord {
    #[serde(rename = "Land Use Class")]
    pub class: i32,
    #[serde(rename = "Pixel Count")]
    pub pixel_count: u64,
    #[serde(rename = "Area (sq meters)")]
    pub area: f64,
    #[serde(rename = "Raster Name")]
    pub raster_name: String,
}

/// Count pixels per distinct class and convert counts to ground area.
///
/// Cells equal to the raster's no-data sentinel are excluded; without a
/// sentinel every cell participates. Records come back sorted ascending
/// by class code, tagged with the raster's name.
pub fn summarize_area(raster: &ClassRaster) -> Vec<ClassAreaRecord> {
    let pixel_area = raster.pixel_area();
    log::debug!(
        "Summarizing {} ({} cells, pixel area {})",
        raster.name,
        raster.data.len(),
        pixel_area
    );

    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for &value in raster.data.iter() {
        if raster.nodata == Some(value) {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(class, pixel_count)| ClassAreaRecord {
            class,
            pixel_count,
            area: pixel_count as f64 * pixel_area,
            raster_name: raster.name.clone(),
        })
        .collect()
}
