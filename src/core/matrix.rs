use crate::types::{ClassRaster, LandError, LandResult};
use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};

/// Class-by-class transition counts between two rasters.
///
/// Axes are the sorted union of class values from either side, so the two
/// rasters may carry different class sets. Entry (i, j) counts cells that
/// held `classes[i]` in the first raster and `classes[j]` in the second.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    classes: Vec<i32>,
    counts: Array2<u64>,
}

impl TransitionMatrix {
    /// Sorted class values labelling both axes
    pub fn classes(&self) -> &[i32] {
        &self.classes
    }

    pub fn counts(&self) -> &Array2<u64> {
        &self.counts
    }

    /// Count for a (from, to) pair; zero when either class is absent
    pub fn count(&self, from: i32, to: i32) -> u64 {
        let i = match self.classes.binary_search(&from) {
            Ok(i) => i,
            Err(_) => return 0,
        };
        let j = match self.classes.binary_search(&to) {
            Ok(j) => j,
            Err(_) => return 0,
        };
        self.counts[[i, j]]
    }

    /// Sum of all entries; equals the cell count of the input pair
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Build the transition matrix for a raster pair.
///
/// This path is deliberately unmasked: no-data values participate as
/// ordinary classes, unlike the area summarizer and the transition encoder.
///
/// Counting is a single pass over the zipped pair accumulating into a map
/// keyed by (from, to), then materialized dense, so cost is O(N + K^2)
/// in cell count N and class count K.
pub fn build_transition_matrix(
    first: &ClassRaster,
    second: &ClassRaster,
) -> LandResult<TransitionMatrix> {
    let shape1 = first.shape();
    let shape2 = second.shape();
    if shape1 != shape2 {
        return Err(LandError::ShapeMismatch {
            first: shape1,
            second: shape2,
        });
    }

    let mut class_set: BTreeSet<i32> = first.data.iter().copied().collect();
    class_set.extend(second.data.iter().copied());
    let classes: Vec<i32> = class_set.into_iter().collect();

    log::info!(
        "Building {0}x{0} transition matrix over {1} cells",
        classes.len(),
        first.data.len()
    );

    let mut pair_counts: HashMap<(i32, i32), u64> = HashMap::new();
    for (&from, &to) in first.data.iter().zip(second.data.iter()) {
        *pair_counts.entry((from, to)).or_insert(0) += 1;
    }

    let index: HashMap<i32, usize> = classes.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    let mut counts = Array2::zeros((classes.len(), classes.len()));
    for ((from, to), n) in pair_counts {
        counts[[index[&from], index[&to]]] = n;
    }

    Ok(TransitionMatrix { classes, counts })
}
