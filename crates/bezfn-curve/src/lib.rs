//! Generalized Bézier curves: evaluation, differentials, and approximate
//! inversion so a parametric curve can be queried as `y = f(x)`.

pub mod bernstein;
pub mod curve;
pub mod invert;
pub mod vector;

pub use curve::{Bezier, ParametricCurve};
pub use invert::Inversion;
pub use vector::Vector;
