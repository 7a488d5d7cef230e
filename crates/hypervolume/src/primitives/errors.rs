//! Error types for hypervolume operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while computing a
//! hypervolume: malformed input, invalid configuration, and the WFG recursion
//! ceiling being reached.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending row, lengths, or limit.
//! * **Explicit states**: Every failure is returned as a value; nothing in the
//!   crate retries internally.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Caller errors**: Row/reference length disagreement, non-finite values.
//! 2. **Configuration errors**: Zero depth ceiling, unknown algorithm name,
//!    duplicated builder parameters.
//! 3. **Pathological input**: The WFG decomposition needs more nested limit
//!    sets than the configured ceiling allows.
//!
//! ## Non-goals
//!
//! * An empty front is not an error; it has hypervolume zero.
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for hypervolume operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HypervolumeError {
    /// A row does not have the same number of objectives as the reference point.
    DimensionMismatch {
        /// Index of the first offending row.
        row: usize,
        /// Number of objectives in the reference point.
        expected: usize,
        /// Number of objectives in the row.
        got: usize,
    },

    /// The WFG decomposition needed more nested limit sets than allowed.
    RecursionLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// The reference point has no objectives but the front is non-empty.
    EmptyReference,

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The recursion ceiling must allow at least one frame.
    InvalidMaxDepth(usize),

    /// The algorithm selector is not one of `wfg` or `zn`.
    UnknownAlgorithm(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HypervolumeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DimensionMismatch { row, expected, got } => write!(
                f,
                "Dimension mismatch: row {row} has {got} objectives, reference has {expected}"
            ),
            Self::RecursionLimitExceeded { limit } => {
                write!(f, "Recursion limit exceeded: more than {limit} nested limit sets")
            }
            Self::EmptyReference => write!(f, "Reference point has no objectives"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidMaxDepth(depth) => {
                write!(f, "Invalid max_depth: {depth} (must be at least 1)")
            }
            Self::UnknownAlgorithm(name) => {
                write!(f, "Unknown algorithm: '{name}' (expected 'wfg' or 'zn')")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for HypervolumeError {}
