//! Input validation for hypervolume configuration and data.
//!
//! ## Purpose
//!
//! This module checks that caller rows and the reference point form a
//! well-posed problem before any transformation runs, and that builder
//! parameters are usable.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Whole-front rejection**: A single bad row rejects the computation; no
//!   partial result is ever produced.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validated rows all have the reference point's length.
//! * Validated values are finite.
//!
//! ## Non-goals
//!
//! * This module does not clamp, translate, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::HypervolumeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for hypervolume configuration and input data.
///
/// All methods return `Result<(), HypervolumeError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate rows against the reference point.
    ///
    /// An empty `rows` slice is valid for any reference.
    pub fn validate_inputs<T: Float, R: AsRef<[T]>>(
        rows: &[R],
        reference: &[T],
    ) -> Result<(), HypervolumeError> {
        if rows.is_empty() {
            return Ok(());
        }

        // Check 1: Reference has at least one objective
        if reference.is_empty() {
            return Err(HypervolumeError::EmptyReference);
        }

        // Check 2: Reference is finite
        Self::validate_point(reference, "reference")?;

        // Check 3: Every row matches the reference length
        let nobj = reference.len();
        for (i, row) in rows.iter().enumerate() {
            let got = row.as_ref().len();
            if got != nobj {
                return Err(HypervolumeError::DimensionMismatch {
                    row: i,
                    expected: nobj,
                    got,
                });
            }
        }

        // Check 4: All values finite
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.as_ref().iter().enumerate() {
                if !v.is_finite() {
                    return Err(HypervolumeError::InvalidNumericValue(format!(
                        "rows[{}][{}]={}",
                        i,
                        j,
                        v.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate a single point for finiteness.
    pub fn validate_point<T: Float>(point: &[T], name: &str) -> Result<(), HypervolumeError> {
        for (j, &v) in point.iter().enumerate() {
            if !v.is_finite() {
                return Err(HypervolumeError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    j,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the WFG recursion ceiling.
    pub fn validate_max_depth(max_depth: usize) -> Result<(), HypervolumeError> {
        if max_depth == 0 {
            return Err(HypervolumeError::InvalidMaxDepth(max_depth));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), HypervolumeError> {
        if let Some(param) = duplicate_param {
            return Err(HypervolumeError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
