use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 2D grid of land-use class codes, one value per spatial cell
pub type ClassArray = Array2<i32>;

/// Combined transition raster (from-class * 100 + to-class per cell)
pub type TransitionArray = Array2<u16>;

/// No-data marker reserved in written transition rasters. Packed codes
/// never exceed 9999, so the marker cannot collide with a real value.
pub const TRANSITION_NODATA: u16 = 65535;

/// Geospatial transformation parameters (GDAL coefficient order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoTransform {
    pub top_left_x: f64,
    pub pixel_width: f64,
    pub rotation_x: f64,
    pub top_left_y: f64,
    pub rotation_y: f64,
    pub pixel_height: f64,
}

impl GeoTransform {
    pub fn from_gdal(t: [f64; 6]) -> Self {
        Self {
            top_left_x: t[0],
            pixel_width: t[1],
            rotation_x: t[2],
            top_left_y: t[3],
            rotation_y: t[4],
            pixel_height: t[5],
        }
    }

    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.top_left_x,
            self.pixel_width,
            self.rotation_x,
            self.top_left_y,
            self.rotation_y,
            self.pixel_height,
        ]
    }

    /// Ground size of one pixel as absolute (x, y) scale coefficients
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.pixel_width.abs(), self.pixel_height.abs())
    }
}

/// A classified raster decoded into memory, together with the metadata
/// the statistics and output writers need: the no-data sentinel, pixel
/// size, and the georeferencing carried through to derived rasters.
#[derive(Debug, Clone)]
pub struct ClassRaster {
    /// Source identifier used to tag output rows (file stem)
    pub name: String,
    pub data: ClassArray,
    pub nodata: Option<i32>,
    pub geo_transform: GeoTransform,
    /// Projection WKT, empty when the source carries none
    pub projection: String,
}

impl ClassRaster {
    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Ground area of one pixel (pixel_size_x * pixel_size_y)
    pub fn pixel_area(&self) -> f64 {
        let (px, py) = self.geo_transform.pixel_size();
        px * py
    }
}

/// Ordered (from, to) land-use class pair.
///
/// The pair is the internal currency; only the raster serialization packs
/// it into a single `from * 100 + to` code, which restricts both classes
/// to two decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transition {
    pub from: u16,
    pub to: u16,
}

impl Transition {
    /// Largest class code the packed encoding can represent
    pub const MAX_CLASS: u16 = 99;

    pub fn new(from: u16, to: u16) -> Self {
        Self { from, to }
    }

    /// Packed code for the combined raster. Valid only when both classes
    /// are within [0, MAX_CLASS]; the encoder validates this before packing.
    pub fn code(&self) -> u16 {
        self.from * 100 + self.to
    }

    pub fn from_code(code: u16) -> Self {
        Self {
            from: code / 100,
            to: code % 100,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class {} to Class {}", self.from, self.to)
    }
}

/// Error types for land-use statistics
#[derive(Debug, thiserror::Error)]
pub enum LandError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Shape mismatch: {first:?} vs {second:?}")]
    ShapeMismatch {
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error("Class code {0} outside the transition encoding range 0..=99")]
    ClassRange(i32),

    #[error("Processing error: {0}")]
    Processing(String),
}

/// Result type for land-use statistics operations
pub type LandResult<T> = Result<T, LandError>;
