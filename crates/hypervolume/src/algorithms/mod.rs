//! Layer 3: Algorithms
//!
//! This layer implements the two exact hypervolume decompositions. Both sit
//! behind [`VolumeEngine`], so the engine layer and the exclusive
//! contribution evaluation can treat them interchangeably.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::math::dominance::Sense;
use crate::primitives::diagnostics::Diagnostics;
use crate::primitives::errors::HypervolumeError;
use crate::primitives::front::Front;

// Inclusion–exclusion over limit sets.
pub mod wfg;

// Recursive axis peeling.
pub mod zn;

// ============================================================================
// Algorithm Selector
// ============================================================================

/// Hypervolume decomposition strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Inclusion–exclusion over limit sets (minimization frame).
    #[default]
    Wfg,

    /// Recursive axis peeling (maximization relative to the origin).
    Zn,
}

impl Algorithm {
    /// Lowercase selector name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wfg => "wfg",
            Self::Zn => "zn",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HypervolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("wfg") {
            Ok(Self::Wfg)
        } else if name.eq_ignore_ascii_case("zn") {
            Ok(Self::Zn)
        } else {
            Err(HypervolumeError::UnknownAlgorithm(name.to_string()))
        }
    }
}

// ============================================================================
// Engine Seam
// ============================================================================

/// A strategy for computing the volume a front dominates in its own frame.
pub trait VolumeEngine<T: Float> {
    /// The orientation in which this engine reads coordinates.
    fn sense(&self) -> Sense;

    /// Volume of the box spanned by a single point.
    fn inclusive(&self, point: &[T]) -> T;

    /// Total volume dominated by `front`.
    ///
    /// The front need not be filtered; engines discard dominated points first.
    fn volume(&self, front: &Front<T>, diagnostics: &mut Diagnostics)
    -> Result<T, HypervolumeError>;
}
