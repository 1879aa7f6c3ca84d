//! Bernstein basis evaluation for Bézier curves.
//!
//! No caching: curve orders in this domain are single digits, so the
//! multiplicative binomial is cheap enough to recompute per call.

/// Binomial coefficient C(n, k) as `f64`.
///
/// Computed with the iterative multiplicative formula so the full
/// factorials are never materialized.
pub fn binomial(n: usize, k: usize) -> f64 {
    debug_assert!(k <= n, "binomial requires k <= n, got C({}, {})", n, k);
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 0..k {
        c = c * (n - i) as f64 / (i + 1) as f64;
    }
    c
}

/// Single Bernstein polynomial term `B_{i,n}(t) = C(n,i) * t^i * (1-t)^(n-i)`.
pub fn bernstein(i: usize, n: usize, t: f64) -> f64 {
    debug_assert!(i <= n, "Bernstein term requires i <= n, got B_{{{},{}}}", i, n);
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}
