//! landstat: land-use area and transition statistics from classified rasters
//!
//! This library computes per-class pixel area summaries across batches of
//! classified rasters, and land-use transition products for time-stamped
//! raster pairs: a combined transition raster, a transition label table,
//! and a class-by-class transition matrix.

pub mod batch;
pub mod core;
pub mod io;
pub mod types;

// Re-export main types and functions for easier access
pub use types::{
    ClassArray, ClassRaster, GeoTransform, LandError, LandResult, Transition, TransitionArray,
    TRANSITION_NODATA,
};

pub use core::{
    build_transition_matrix, encode_transitions, summarize_area, ClassAreaRecord,
    TransitionMatrix, TransitionProduct, TransitionRecord, TransitionTable, DEFAULT_NODATA,
};

pub use batch::{
    run_area_batch, run_transition_analysis, AreaBatchConfig, AreaBatchReport, TransitionConfig,
};

pub use io::{
    read_class_raster, write_area_summary, write_transition_matrix, write_transition_raster,
    write_transition_table,
};
