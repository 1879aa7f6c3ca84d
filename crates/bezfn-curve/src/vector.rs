//! Control-point vector type and cardinality checks.

use bezfn_core::{BezError, Result};

/// A control-point coordinate vector; its length is the curve's cardinality.
pub type Vector = nalgebra::DVector<f64>;

/// All-zero vector of the given cardinality.
pub fn zero(cardinality: usize) -> Vector {
    Vector::zeros(cardinality)
}

/// Check that `points` is non-empty and that every point has the same
/// cardinality, returning that cardinality.
pub fn uniform_cardinality(points: &[Vector]) -> Result<usize> {
    let first = points.first().ok_or(BezError::EmptyControlPoints)?;
    let expected = first.len();
    for (index, point) in points.iter().enumerate().skip(1) {
        if point.len() != expected {
            return Err(BezError::CardinalityMismatch {
                index,
                expected,
                found: point.len(),
            });
        }
    }
    Ok(expected)
}
