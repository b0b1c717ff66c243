use crate::types::{
    ClassRaster, GeoTransform, LandError, LandResult, TransitionArray, TRANSITION_NODATA,
};
use gdal::{Dataset, DriverManager};
use ndarray::Array2;
use std::path::Path;

/// Read a classified raster: band 1 as integer class codes, plus the
/// no-data sentinel, pixel size, and georeferencing metadata.
pub fn read_class_raster<P: AsRef<Path>>(path: P) -> LandResult<ClassRaster> {
    let path = path.as_ref();
    log::info!("Reading classified raster: {}", path.display());

    let dataset = Dataset::open(path).map_err(|e| LandError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let geo_transform = dataset.geo_transform()?;
    let (width, height) = dataset.raster_size();
    log::debug!("Raster size: {}x{}", width, height);
    log::debug!("Geotransform: {:?}", geo_transform);

    let rasterband = dataset.rasterband(1)?;
    let nodata = rasterband.no_data_value().map(|v| v as i32);
    let band_data = rasterband.read_as::<i32>((0, 0), (width, height), (width, height), None)?;

    let data = Array2::from_shape_vec((height, width), band_data.data)
        .map_err(|e| LandError::Processing(format!("Failed to reshape raster data: {}", e)))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ClassRaster {
        name,
        data,
        nodata,
        geo_transform: GeoTransform::from_gdal(geo_transform),
        projection: dataset.projection(),
    })
}

/// Write a combined transition raster as a single-band u16 GeoTIFF,
/// inheriting georeferencing from the first input of the pair.
pub fn write_transition_raster<P: AsRef<Path>>(
    path: P,
    combined: &TransitionArray,
    reference: &ClassRaster,
) -> LandResult<()> {
    let path = path.as_ref();
    log::info!("Writing transition raster: {}", path.display());

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let (height, width) = combined.dim();

    let mut dataset = driver
        .create_with_band_type::<u16, _>(path, width as isize, height as isize, 1)
        .map_err(|e| LandError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    dataset.set_geo_transform(&reference.geo_transform.to_gdal())?;
    if !reference.projection.is_empty() {
        dataset.set_projection(&reference.projection)?;
    }

    let mut rasterband = dataset.rasterband(1)?;
    let flat_data: Vec<u16> = combined.iter().copied().collect();
    let buffer = gdal::raster::Buffer::new((width, height), flat_data);
    rasterband.write((0, 0), (width, height), &buffer)?;
    rasterband.set_no_data_value(Some(f64::from(TRANSITION_NODATA)))?;

    log::info!("Transition raster saved successfully");
    Ok(())
}
