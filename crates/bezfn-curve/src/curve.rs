//! Bézier curve state and evaluators.

use bezfn_core::{BezError, Result, Validate};
use serde::{Deserialize, Serialize};

use crate::bernstein::bernstein;
use crate::invert::{self, Inversion};
use crate::vector::{self, uniform_cardinality, Vector};

/// Default Newton-Raphson iteration budget for the inverse approximator.
pub const DEFAULT_REFINEMENT: usize = 10;

/// Trait for parametric curves evaluated over a scalar parameter.
pub trait ParametricCurve {
    /// Evaluate the curve position at parameter `t`.
    fn point_at(&self, t: f64) -> Vector;

    /// Evaluate the tangent (derivative with respect to `t`) at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}

/// A Bézier curve of arbitrary order (control-point count) and cardinality
/// (point dimensionality).
///
/// Order names follow the control-point count: 2 = linear, 3 = quadratic,
/// 4 = cubic, and so on. Evaluation accepts any real `t`; only the inverse
/// approximator clamps to the `[0, 1]` domain.
///
/// e.g. `Bezier::new(vec![dvector![0.0, 0.0], dvector![0.75, 0.25], dvector![1.0, 1.0]])`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    points: Vec<Vector>,
    refinement: usize,
}

impl Bezier {
    /// Create a curve from its control points.
    ///
    /// Fails if `points` is empty or the points disagree on cardinality.
    pub fn new(points: Vec<Vector>) -> Result<Self> {
        uniform_cardinality(&points)?;
        Ok(Self {
            points,
            refinement: DEFAULT_REFINEMENT,
        })
    }

    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    /// Number of control points.
    pub fn order(&self) -> usize {
        self.points.len()
    }

    /// Dimensionality of the control-point vectors.
    pub fn cardinality(&self) -> usize {
        self.points[0].len()
    }

    pub fn refinement_iterations(&self) -> usize {
        self.refinement
    }

    /// Replace the entire control-point list.
    pub fn set_points(&mut self, points: Vec<Vector>) -> Result<()> {
        uniform_cardinality(&points)?;
        self.points = points;
        Ok(())
    }

    /// Replace a single control point in place.
    pub fn set_point(&mut self, index: usize, point: Vector) -> Result<()> {
        if index >= self.points.len() {
            return Err(BezError::PointIndexOutOfRange {
                index,
                order: self.points.len(),
            });
        }
        let expected = self.cardinality();
        if point.len() != expected {
            return Err(BezError::CardinalityMismatch {
                index,
                expected,
                found: point.len(),
            });
        }
        self.points[index] = point;
        Ok(())
    }

    /// Replace the Newton-Raphson iteration budget. Larger values give
    /// greater precision on steep curves at the cost of speed.
    pub fn set_refinement_iterations(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(BezError::InvalidRefinement(n));
        }
        self.refinement = n;
        Ok(())
    }

    /// Scalar derivative `d(axis_y)/d(axis_x)` at parameter `t`, i.e. the
    /// ratio of two components of the tangent vector.
    ///
    /// Returns `0.0` when the `axis_x` component of the tangent vanishes.
    /// The true slope there is undefined or infinite; the zero keeps
    /// Newton stepping finite near vertical tangents.
    pub fn slope(&self, axis_x: usize, axis_y: usize, t: f64) -> f64 {
        self.debug_check_axes(axis_x, axis_y);
        invert::component_ratio(&self.tangent_at(t), axis_x, axis_y)
    }

    /// Treat the curve as an implicit function along `axis_x` and report the
    /// `axis_y` value corresponding to `target_x`, via Newton-Raphson.
    ///
    /// Only accurate when the curve is monotonic along `axis_x` over
    /// `[0, 1]`; non-monotonic curves may yield any one of the valid
    /// inverses, or a clamped boundary value.
    pub fn approximate(&self, axis_x: usize, axis_y: usize, target_x: f64) -> f64 {
        self.approximate_full(axis_x, axis_y, target_x).value
    }

    /// [`approximate`](Self::approximate) with the final parameter and
    /// residual exposed, so callers can judge convergence quality.
    pub fn approximate_full(&self, axis_x: usize, axis_y: usize, target_x: f64) -> Inversion {
        self.debug_check_axes(axis_x, axis_y);
        invert::newton_invert(self, self.refinement, axis_x, axis_y, target_x)
    }

    /// 2D shorthand: `y = f(x)` for a curve whose axis 0 is x and axis 1 is y.
    pub fn y_x(&self, x: f64) -> f64 {
        self.approximate(0, 1, x)
    }

    /// 2D shorthand: `x = f⁻¹(y)`.
    pub fn x_y(&self, y: f64) -> f64 {
        self.approximate(1, 0, y)
    }

    fn debug_check_axes(&self, axis_x: usize, axis_y: usize) {
        debug_assert!(
            axis_x < self.cardinality() && axis_y < self.cardinality(),
            "axes ({}, {}) out of range for cardinality {}",
            axis_x,
            axis_y,
            self.cardinality()
        );
    }
}

impl ParametricCurve for Bezier {
    fn point_at(&self, t: f64) -> Vector {
        let n = self.points.len() - 1;
        let mut b = vector::zero(self.cardinality());
        for (i, point) in self.points.iter().enumerate() {
            b += point * bernstein(i, n, t);
        }
        b
    }

    fn tangent_at(&self, t: f64) -> Vector {
        // The derivative is itself a degree-reduced Bézier curve over the
        // control-point differences, scaled by n. An order-1 curve has an
        // empty sum: constant curve, zero tangent everywhere.
        let n = self.points.len() - 1;
        let mut g = vector::zero(self.cardinality());
        for i in 0..n {
            g += (&self.points[i + 1] - &self.points[i]) * bernstein(i, n - 1, t);
        }
        g * n as f64
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl Validate for Bezier {
    fn validate(&self) -> Result<()> {
        uniform_cardinality(&self.points)?;
        if self.refinement == 0 {
            return Err(BezError::InvalidRefinement(self.refinement));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    fn quadratic() -> Bezier {
        Bezier::new(vec![
            dvector![0.0, 0.0],
            dvector![0.5, 1.0],
            dvector![1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_endpoint_interpolation() {
        let curve = quadratic();
        let p0 = curve.point_at(0.0);
        let p1 = curve.point_at(1.0);
        assert!((&p0 - &curve.points()[0]).norm() < 1e-12);
        assert!((&p1 - &curve.points()[2]).norm() < 1e-12);

        // Midpoint of quadratic Bezier: 0.25*P0 + 0.5*P1 + 0.25*P2
        let pm = curve.point_at(0.5);
        assert!((pm[0] - 0.5).abs() < 1e-12);
        assert!((pm[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_point_curve_is_constant() {
        let curve = Bezier::new(vec![dvector![0.3, 0.7]]).unwrap();
        for &t in &[-1.0, 0.0, 0.5, 1.0, 2.0] {
            let p = curve.point_at(t);
            assert_eq!(p[0], 0.3);
            assert_eq!(p[1], 0.7);

            let g = curve.tangent_at(t);
            assert_eq!(g, vector::zero(2), "non-zero tangent at t={}", t);
        }
    }

    #[test]
    fn test_linear_curve_is_exact_lerp() {
        let curve = Bezier::new(vec![dvector![0.0, 1.0], dvector![2.0, 3.0]]).unwrap();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let p = curve.point_at(t);
            assert!((p[0] - 2.0 * t).abs() < 1e-12, "x at t={}: {}", t, p[0]);
            assert!((p[1] - (1.0 + 2.0 * t)).abs() < 1e-12, "y at t={}: {}", t, p[1]);
        }
    }

    #[test]
    fn test_tangent_matches_finite_differences() {
        let curve = Bezier::new(vec![
            dvector![0.0, 0.0],
            dvector![0.75, 0.25],
            dvector![0.9, 0.8],
            dvector![1.0, 1.0],
        ])
        .unwrap();

        let h = 1e-5;
        for &t in &[0.2, 0.5, 0.8] {
            let g = curve.tangent_at(t);
            let numeric = (curve.point_at(t + h) - curve.point_at(t - h)) / (2.0 * h);
            assert!(
                (&g - &numeric).norm() < 1e-6,
                "tangent mismatch at t={}: {:?} vs {:?}",
                t,
                g,
                numeric
            );
        }
    }

    #[test]
    fn test_slope_zero_denominator_guard() {
        // Vertical line: tangent is [0, 1] everywhere, slope reports 0
        let curve = Bezier::new(vec![dvector![0.0, 0.0], dvector![0.0, 1.0]]).unwrap();
        for &t in &[0.0, 0.25, 0.5, 1.0] {
            let g = curve.tangent_at(t);
            assert_eq!(g[0], 0.0);
            assert_eq!(g[1], 1.0);
            assert_eq!(curve.slope(0, 1, t), 0.0, "guard failed at t={}", t);
        }
    }

    #[test]
    fn test_slope_of_diagonal_line() {
        let curve = Bezier::new(vec![dvector![0.0, 0.0], dvector![1.0, 2.0]]).unwrap();
        assert!((curve.slope(0, 1, 0.5) - 2.0).abs() < 1e-12);
        assert!((curve.slope(1, 0, 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_constructor_rejects_bad_input() {
        assert_eq!(Bezier::new(vec![]), Err(BezError::EmptyControlPoints));
        assert_eq!(
            Bezier::new(vec![dvector![0.0, 0.0], dvector![1.0]]),
            Err(BezError::CardinalityMismatch {
                index: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_mutators_validate() {
        let mut curve = quadratic();
        assert_eq!(
            curve.set_point(3, dvector![0.0, 0.0]),
            Err(BezError::PointIndexOutOfRange { index: 3, order: 3 })
        );
        assert_eq!(
            curve.set_point(1, dvector![0.0]),
            Err(BezError::CardinalityMismatch {
                index: 1,
                expected: 2,
                found: 1,
            })
        );
        assert_eq!(
            curve.set_refinement_iterations(0),
            Err(BezError::InvalidRefinement(0))
        );
        assert_eq!(curve.set_points(vec![]), Err(BezError::EmptyControlPoints));

        // Valid mutations take effect on the next evaluation
        curve.set_point(1, dvector![0.5, 0.0]).unwrap();
        let pm = curve.point_at(0.5);
        assert!((pm[1] - 0.0).abs() < 1e-12);

        curve
            .set_points(vec![dvector![1.0, 1.0, 1.0], dvector![2.0, 2.0, 2.0]])
            .unwrap();
        assert_eq!(curve.order(), 2);
        assert_eq!(curve.cardinality(), 3);

        curve.set_refinement_iterations(25).unwrap();
        assert_eq!(curve.refinement_iterations(), 25);
    }

    #[test]
    fn test_validate_trait() {
        let curve = quadratic();
        assert!(curve.validate().is_ok());
    }

    #[test]
    fn test_domain_is_unit_interval() {
        assert_eq!(quadratic().domain(), (0.0, 1.0));
    }

    #[test]
    fn test_evaluation_outside_domain_extrapolates() {
        // Linear curve extrapolates exactly; no clamping in the evaluator
        let curve = Bezier::new(vec![dvector![0.0, 0.0], dvector![1.0, 1.0]]).unwrap();
        let p = curve.point_at(2.0);
        assert!((p[0] - 2.0).abs() < 1e-12);
        assert!((p[1] - 2.0).abs() < 1e-12);
    }
}
