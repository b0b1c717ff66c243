use crate::types::{ClassRaster, LandError, LandResult, Transition, TransitionArray};
use serde::Serialize;
use std::collections::BTreeSet;

/// Sentinel assumed when a source raster defines no no-data value
pub const DEFAULT_NODATA: i32 = 65535;

/// One row of the transition lookup table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRecord {
    #[serde(rename = "Transition Value")]
    pub value: u16,
    #[serde(rename = "Transition")]
    pub label: String,
}

/// Lookup table mapping packed transition codes to labels, ascending by code
pub type TransitionTable = Vec<TransitionRecord>;

/// Combined transition raster plus its value lookup table
#[derive(Debug, Clone)]
pub struct TransitionProduct {
    pub combined: TransitionArray,
    pub table: TransitionTable,
}

/// Encode a raster pair into a combined transition raster.
///
/// No-data cells become class 0 on each side before packing, so no-data is
/// not distinguishable from a real class 0 in the output. This matches the
/// tabulated products downstream and differs deliberately from the area
/// summarizer (which excludes no-data) and the matrix builder (which leaves
/// it unmasked).
///
/// Classes must lie in [0, 99]; anything else would collide under the
/// `from * 100 + to` packing and is rejected with `ClassRange`.
pub fn encode_transitions(
    first: &ClassRaster,
    second: &ClassRaster,
) -> LandResult<TransitionProduct> {
    let shape1 = first.shape();
    let shape2 = second.shape();
    if shape1 != shape2 {
        return Err(LandError::ShapeMismatch {
            first: shape1,
            second: shape2,
        });
    }

    log::info!(
        "Encoding transitions {} -> {} ({}x{} cells)",
        first.name,
        second.name,
        shape1.0,
        shape1.1
    );

    let nodata1 = first.nodata.unwrap_or(DEFAULT_NODATA);
    let nodata2 = second.nodata.unwrap_or(DEFAULT_NODATA);

    let mut combined = TransitionArray::zeros(shape1);
    for ((r, c), cell) in combined.indexed_iter_mut() {
        let from = normalize_class(first.data[[r, c]], nodata1)?;
        let to = normalize_class(second.data[[r, c]], nodata2)?;
        *cell = Transition::new(from, to).code();
    }

    let codes: BTreeSet<u16> = combined.iter().copied().collect();
    let table = codes
        .into_iter()
        .map(|code| TransitionRecord {
            value: code,
            label: Transition::from_code(code).to_string(),
        })
        .collect();

    Ok(TransitionProduct { combined, table })
}

/// No-data becomes class 0; everything else must fit the two-digit packing
fn normalize_class(value: i32, nodata: i32) -> LandResult<u16> {
    if value == nodata {
        return Ok(0);
    }
    if !(0..=i32::from(Transition::MAX_CLASS)).contains(&value) {
        return Err(LandError::ClassRange(value));
    }
    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassArray, GeoTransform};
    use ndarray::array;

    fn raster(data: ClassArray, nodata: Option<i32>) -> ClassRaster {
        ClassRaster {
            name: "fixture".to_string(),
            data,
            nodata,
            geo_transform: GeoTransform::from_gdal([0.0, 1.0, 0.0, 0.0, 0.0, -1.0]),
            projection: String::new(),
        }
    }

    #[test]
    fn test_combined_values_and_table() {
        let first = raster(array![[1, 1], [2, 2]], None);
        let second = raster(array![[1, 2], [1, 2]], None);

        let product = encode_transitions(&first, &second).unwrap();
        assert_eq!(product.combined, array![[101, 102], [201, 202]]);

        let values: Vec<u16> = product.table.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![101, 102, 201, 202]);
        assert_eq!(product.table[1].label, "Class 1 to Class 2");
    }

    #[test]
    fn test_every_cell_has_a_table_row() {
        let first = raster(array![[3, 45], [0, 3]], None);
        let second = raster(array![[45, 3], [0, 3]], None);

        let product = encode_transitions(&first, &second).unwrap();
        for &code in product.combined.iter() {
            assert!(product.table.iter().any(|r| r.value == code));
        }
        // from=3, to=45 packs to 345
        assert!(product
            .table
            .iter()
            .any(|r| r.value == 345 && r.label == "Class 3 to Class 45"));
    }

    #[test]
    fn test_nodata_is_zero_filled() {
        let first = raster(array![[5, -1], [-1, 5]], Some(-1));
        let second = raster(array![[5, 5], [5, 5]], None);

        let product = encode_transitions(&first, &second).unwrap();
        // No-data in the first raster contributes "Class 0 to ..." rows
        assert_eq!(product.combined, array![[505, 5], [5, 505]]);
    }

    #[test]
    fn test_default_sentinel_when_unset() {
        // 65535 is treated as no-data even though the raster defines none
        let first = raster(array![[65535, 2]], None);
        let second = raster(array![[4, 4]], None);

        let product = encode_transitions(&first, &second).unwrap();
        assert_eq!(product.combined, array![[4, 204]]);
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let first = raster(array![[1, 2]], None);
        let second = raster(array![[1], [2]], None);

        match encode_transitions(&first, &second) {
            Err(LandError::ShapeMismatch { first, second }) => {
                assert_eq!(first, (1, 2));
                assert_eq!(second, (2, 1));
            }
            other => panic!("expected shape mismatch, got {:?}", other.map(|p| p.combined)),
        }
    }

    #[test]
    fn test_class_above_99_is_rejected() {
        let first = raster(array![[100]], None);
        let second = raster(array![[1]], None);

        assert!(matches!(
            encode_transitions(&first, &second),
            Err(LandError::ClassRange(100))
        ));
    }

    #[test]
    fn test_round_trip_over_packable_range() {
        for from in [0u16, 1, 42, 99] {
            for to in [0u16, 7, 99] {
                let code = Transition::new(from, to).code();
                let decoded = Transition::from_code(code);
                assert_eq!((decoded.from, decoded.to), (from, to));
            }
        }
    }
}
