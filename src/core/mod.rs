//! Core land-use statistics modules

pub mod area;
pub mod matrix;
pub mod transition;

// Re-export main types
pub use area::{summarize_area, ClassAreaRecord};
pub use matrix::{build_transition_matrix, TransitionMatrix};
pub use transition::{
    encode_transitions, TransitionProduct, TransitionRecord, TransitionTable, DEFAULT_NODATA,
};
