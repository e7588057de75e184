//! Error types for generator construction.
//!
//! The engine is total once a generator has been built: stepping, running
//! and combining never fail. Every error here is detected while validating
//! the parameters of a primitive, before any seed is touched, so a failed
//! construction never consumes a raw word.

use std::fmt;
use thiserror::Error;

/// The offending bounds of a rejected range.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::error::Bounds;
///
/// let bounds = Bounds::Int { low: 10, high: 5 };
/// assert_eq!(format!("{}", bounds), "[10, 5]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    /// Inclusive integer bounds.
    Int {
        /// Lower bound
        low: i64,
        /// Upper bound
        high: i64,
    },
    /// Floating-point bounds.
    Float {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Int { low, high } => write!(f, "[{}, {}]", low, high),
            Bounds::Float { low, high } => write!(f, "[{}, {})", low, high),
        }
    }
}

/// Generator construction error.
///
/// # Variants
/// - `InvalidRange`: upper bound below lower bound, or unusable float bounds
/// - `InvalidWeights`: weighted choice with no usable weight
/// - `InvalidParameter`: distribution or selector parameter out of domain
///
/// # Examples
///
/// ```rust
/// use seedgen_core::error::Bounds;
/// use seedgen_core::sampling::IntRange;
/// use seedgen_core::GenError;
///
/// let err = IntRange::new(10, 5).unwrap_err();
/// assert_eq!(err, GenError::InvalidRange(Bounds::Int { low: 10, high: 5 }));
/// assert_eq!(err.to_string(), "Invalid range: [10, 5]");
/// ```
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GenError {
    /// Upper bound is below the lower bound (or a float bound is unusable).
    #[error("Invalid range: {0}")]
    InvalidRange(Bounds),

    /// Weights are negative, non-finite, or sum to zero.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Named parameter outside its domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
