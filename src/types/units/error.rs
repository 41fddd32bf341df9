use crate::types::dimension::{BaseDimension, Dimension};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown unit registry key: {0}")]
    MissingKey(String),

    #[error("Compound units not allowed for {key}: {units}")]
    CompoundUnit { key: BaseDimension, units: String },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Incompatible dimensions: cannot express [{from}] in [{to}]")]
    IncompatibleDimensions { from: Dimension, to: Dimension },

    #[error("Shape mismatch: {left} elements vs {right} elements")]
    ShapeMismatch { left: usize, right: usize },
}
