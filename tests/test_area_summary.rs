use landstat::io::table::write_area_summary;
use landstat::{summarize_area, ClassRaster, GeoTransform};
use ndarray::array;

fn raster(data: ndarray::Array2<i32>, nodata: Option<i32>, pixel: f64) -> ClassRaster {
    ClassRaster {
        name: "lc_2014".to_string(),
        data,
        nodata,
        geo_transform: GeoTransform::from_gdal([500_000.0, pixel, 0.0, 4_650_000.0, 0.0, -pixel]),
        projection: String::new(),
    }
}

#[test]
fn test_counts_sum_to_non_missing_cells() {
    let raster = raster(
        array![[1, 1, -9999], [2, 2, 2], [-9999, 3, 1]],
        Some(-9999),
        30.0,
    );
    let records = summarize_area(&raster);

    let total: u64 = records.iter().map(|r| r.pixel_count).sum();
    assert_eq!(total, 7);

    // One record per distinct class, ascending
    let classes: Vec<i32> = records.iter().map(|r| r.class).collect();
    assert_eq!(classes, vec![1, 2, 3]);
}

#[test]
fn test_area_is_count_times_pixel_area() {
    let raster = raster(array![[1, 1], [1, 1]], Some(0), 10.0);
    let records = summarize_area(&raster);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].class, 1);
    assert_eq!(records[0].pixel_count, 4);
    assert!((records[0].area - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_summary_csv_layout() {
    let raster = raster(array![[1, 1], [1, 1]], Some(0), 10.0);
    let records = summarize_area(&raster);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("land_use_area_summary.csv");
    write_area_summary(&path, &records).expect("Failed to write summary");

    let contents = std::fs::read_to_string(&path).expect("Failed to read back CSV");
    assert_eq!(
        contents,
        "Land Use Class,Pixel Count,Area (sq meters),Raster Name\n1,4,400.0,lc_2014\n"
    );
}

#[test]
fn test_empty_summary_still_writes_headers() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty_summary.csv");
    write_area_summary(&path, &[]).expect("Failed to write summary");

    let contents = std::fs::read_to_string(&path).expect("Failed to read back CSV");
    assert_eq!(
        contents,
        "Land Use Class,Pixel Count,Area (sq meters),Raster Name\n"
    );
}
