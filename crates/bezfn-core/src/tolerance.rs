/// Tolerance management for approximate-inversion quality checks.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Tolerance for axis-value comparisons (in curve units)
    pub value: f64,
}

impl Tolerance {
    pub const DEFAULT_VALUE: f64 = 1e-7;

    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn default_precision() -> Self {
        Self {
            value: Self::DEFAULT_VALUE,
        }
    }

    pub fn loose() -> Self {
        Self { value: 1e-4 }
    }

    pub fn tight() -> Self {
        Self { value: 1e-10 }
    }

    /// Check if two values are equal within tolerance
    pub fn value_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.value
    }

    /// Check if a value is zero within tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.value
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
