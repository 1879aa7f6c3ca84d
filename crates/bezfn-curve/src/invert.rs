//! Newton-Raphson inversion of a parametric curve along one axis.

use bezfn_core::Tolerance;

use crate::curve::ParametricCurve;
use crate::vector::Vector;

/// Outcome of a Newton-Raphson inversion.
///
/// `value` alone preserves the plain-scalar behavior of
/// [`Bezier::approximate`](crate::Bezier::approximate); the parameter and
/// residual are exposed so callers can judge convergence quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion {
    /// Curve value along the requested output axis at the final parameter.
    pub value: f64,
    /// Final curve parameter `t` in `[0, 1]`.
    pub parameter: f64,
    /// `|point_at(t)[axis_x] - target_x|` at the final parameter.
    pub residual: f64,
}

impl Inversion {
    /// Whether the final residual is zero within `tol`.
    pub fn converged(&self, tol: Tolerance) -> bool {
        tol.is_zero(self.residual)
    }
}

/// Ratio of two components of a tangent vector, `g[axis_y] / g[axis_x]`.
///
/// Returns 0 when the denominator component vanishes, so Newton stepping
/// stays finite near vertical tangents. The true slope there is undefined
/// or infinite; callers relying on the mathematical slope must check the
/// tangent themselves.
pub(crate) fn component_ratio(g: &Vector, axis_x: usize, axis_y: usize) -> f64 {
    if g[axis_x] == 0.0 {
        0.0
    } else {
        g[axis_y] / g[axis_x]
    }
}

/// Solve `point_at(t)[axis_x] == target_x` for `t` by Newton-Raphson and
/// report the curve value along `axis_y` there.
///
/// The initial guess is `target_x` itself, which is only sensible because
/// the intended use keeps both the parameter and the axis values in
/// `[0, 1]`. The parameter is clamped back into `[0, 1]` after every step;
/// there is no convergence check beyond the fixed iteration budget and an
/// exact-hit early exit, so precision is entirely a function of the budget
/// and the curve's steepness. Accuracy is only guaranteed for curves
/// monotonic along `axis_x` over the unit interval.
pub fn newton_invert<C: ParametricCurve>(
    curve: &C,
    iterations: usize,
    axis_x: usize,
    axis_y: usize,
    target_x: f64,
) -> Inversion {
    let mut t = target_x;

    for _ in 0..iterations {
        let x1 = curve.point_at(t)[axis_x];

        // Exact-equality early exit is an optimization only; the budget
        // remains the termination guarantee.
        if x1 == target_x {
            break;
        }

        let dydx = component_ratio(&curve.tangent_at(t), axis_x, axis_y);

        t -= (x1 - target_x) * dydx;
        t = t.clamp(0.0, 1.0);
    }

    let p = curve.point_at(t);
    Inversion {
        value: p[axis_y],
        parameter: t,
        residual: (p[axis_x] - target_x).abs(),
    }
}
