//! High-level API for hypervolume computation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder that
//! validates configuration once and yields a reusable calculator, and the
//! one-shot [`hypervolume`] function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Computation is generic over `Float` types.
//! * **Stateless**: A calculator holds only configuration; every `compute`
//!   call owns its own bookkeeping, so one calculator can serve many threads.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HypervolumeBuilder`] via `Hypervolume::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.sense()`, etc.).
//! 3. Call `.build()` to get a [`HypervolumeCalculator`].
//! 4. Call `.compute(rows, reference)` for each front.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{HypervolumeConfig, HypervolumeExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::Algorithm;
pub use crate::algorithms::wfg::{DEFAULT_MAX_DEPTH, WfgEngine, wfg_hypervolume};
pub use crate::algorithms::zn::{ZnEngine, zn_hypervolume};
pub use crate::algorithms::VolumeEngine;
pub use crate::engine::output::HypervolumeResult;
pub use crate::evaluation::contributions::exclusive_contributions;
pub use crate::math::dominance::{Dominance, Sense, compare, nondominated};
pub use crate::primitives::diagnostics::Diagnostics;
pub use crate::primitives::errors::HypervolumeError;
pub use crate::primitives::front::Front;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring hypervolume computations.
#[derive(Debug, Clone, Default)]
pub struct HypervolumeBuilder {
    /// Decomposition strategy (default: WFG).
    pub algorithm: Option<Algorithm>,

    /// Orientation of the reference corner (default: Minimize).
    pub sense: Option<Sense>,

    /// WFG recursion ceiling (default: 1000).
    pub max_depth: Option<usize>,

    /// Include recursion diagnostics in output.
    pub return_diagnostics: Option<bool>,

    /// Include per-row exclusive contributions in output.
    pub return_contributions: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl HypervolumeBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the decomposition algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set whether the reference point is the largest or smallest corner.
    pub fn sense(mut self, sense: Sense) -> Self {
        if self.sense.is_some() {
            self.duplicate_param = Some("sense");
        }
        self.sense = Some(sense);
        self
    }

    /// Set the WFG ceiling on nested limit sets.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        if self.max_depth.is_some() {
            self.duplicate_param = Some("max_depth");
        }
        self.max_depth = Some(max_depth);
        self
    }

    /// Include recursion diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Include per-row exclusive contributions in output.
    pub fn return_contributions(mut self) -> Self {
        self.return_contributions = Some(true);
        self
    }

    /// Validate the configuration and produce a calculator.
    pub fn build(self) -> Result<HypervolumeCalculator, HypervolumeError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        Validator::validate_max_depth(max_depth)?;

        Ok(HypervolumeCalculator {
            config: HypervolumeConfig {
                algorithm: self.algorithm.unwrap_or_default(),
                sense: self.sense.unwrap_or_default(),
                max_depth,
                return_contributions: self.return_contributions.unwrap_or(false),
            },
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Validated, reusable hypervolume configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HypervolumeCalculator {
    config: HypervolumeConfig,
    return_diagnostics: bool,
}

impl HypervolumeCalculator {
    /// The selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// The configured sense.
    pub fn sense(&self) -> Sense {
        self.config.sense
    }

    /// The configured WFG depth ceiling.
    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Compute the hypervolume of `rows` relative to `reference`.
    pub fn compute<T, R>(
        &self,
        rows: &[R],
        reference: &[T],
    ) -> Result<HypervolumeResult<T>, HypervolumeError>
    where
        T: Float,
        R: AsRef<[T]>,
    {
        let output = HypervolumeExecutor::run_with_config(rows, reference, &self.config)?;

        Ok(HypervolumeResult {
            value: output.value,
            algorithm: self.config.algorithm,
            sense: self.config.sense,
            points: rows.len(),
            nobj: reference.len(),
            contributions: output.contributions,
            diagnostics: self.return_diagnostics.then_some(output.diagnostics),
        })
    }

    /// Compute the hypervolume of several independent fronts.
    ///
    /// Each front gets its own result; one failure does not affect the others.
    pub fn compute_each<T, R, F>(
        &self,
        fronts: &[F],
        reference: &[T],
    ) -> Vec<Result<HypervolumeResult<T>, HypervolumeError>>
    where
        T: Float,
        R: AsRef<[T]>,
        F: AsRef<[R]>,
    {
        fronts
            .iter()
            .map(|front| self.compute(front.as_ref(), reference))
            .collect()
    }
}

// ============================================================================
// One-Shot Entry Point
// ============================================================================

/// Hypervolume of a minimization front relative to `reference`.
///
/// Rows are clamped to the reference, then handed to `algorithm`. An empty
/// front yields zero.
pub fn hypervolume<T, R>(rows: &[R], reference: &[T], algorithm: Algorithm) -> Result<T, HypervolumeError>
where
    T: Float,
    R: AsRef<[T]>,
{
    let config = HypervolumeConfig {
        algorithm,
        ..HypervolumeConfig::default()
    };
    HypervolumeExecutor::run_with_config(rows, reference, &config).map(|output| output.value)
}
