use crate::error::Result;

/// Validate structural integrity of a curve or other geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
