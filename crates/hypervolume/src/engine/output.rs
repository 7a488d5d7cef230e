//! Output types for hypervolume computations.
//!
//! ## Purpose
//!
//! This module defines [`HypervolumeResult`], which carries the hypervolume
//! of one front together with what produced it and any optional outputs.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Contributions and diagnostics are `Option`s,
//!   populated only when requested.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `value` is never negative.
//! * When present, `contributions` has one entry per input row, in input order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::math::dominance::Sense;
use crate::primitives::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Hypervolume of one front and its optional by-products.
#[derive(Debug, Clone, PartialEq)]
pub struct HypervolumeResult<T> {
    /// Volume dominated by the front and bounded by the reference point.
    pub value: T,

    /// Algorithm that produced the value.
    pub algorithm: Algorithm,

    /// Orientation of the reference corner.
    pub sense: Sense,

    /// Number of input rows.
    pub points: usize,

    /// Number of objectives.
    pub nobj: usize,

    /// Exclusive hypervolume of each row, in input order.
    pub contributions: Option<Vec<T>>,

    /// Recursion statistics.
    pub diagnostics: Option<Diagnostics>,
}

impl<T: Float> HypervolumeResult<T> {
    /// Check if exclusive contributions were computed.
    pub fn has_contributions(&self) -> bool {
        self.contributions.is_some()
    }

    /// Check if diagnostics were collected.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }

    /// Sum of the exclusive contributions, if they were computed.
    pub fn exclusive_total(&self) -> Option<T> {
        self.contributions
            .as_ref()
            .map(|c| c.iter().fold(T::zero(), |acc, &v| acc + v))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for HypervolumeResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:   {}", self.algorithm)?;
        writeln!(f, "  Sense:       {:?}", self.sense)?;
        writeln!(f, "  Points:      {}", self.points)?;
        writeln!(f, "  Objectives:  {}", self.nobj)?;
        writeln!(f, "  Hypervolume: {}", self.value)?;

        if let Some(diagnostics) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diagnostics)?;
        }

        if let Some(contributions) = &self.contributions {
            writeln!(f)?;
            writeln!(f, "Exclusive Contributions:")?;
            writeln!(f, "  {:>6}  {:>14}", "Row", "Exclusive")?;
            writeln!(f, "  {}", "-".repeat(22))?;
            for (i, c) in contributions.iter().enumerate() {
                writeln!(f, "  {:>6}  {:>14.6}", i, c)?;
            }
        }

        Ok(())
    }
}
