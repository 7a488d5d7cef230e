//! Execution engine for hypervolume computations.
//!
//! ## Purpose
//!
//! This module owns the path from validated caller rows to a scalar: it
//! clamps every point into the reference box, converts the clamped front into
//! the coordinate frame of the selected algorithm, and dispatches.
//!
//! ## Design notes
//!
//! * **Clamp**: A coordinate worse than the reference is replaced by the
//!   reference value, so every transformed coordinate is on the dominated
//!   side and all offsets are non-negative.
//! * **WFG frame**: Clamped rows with the original reference, minimization.
//!   Under [`Sense::Maximize`] both are mirrored through the origin.
//! * **ZN frame**: Offsets `|reference - clamped|`, maximization from the origin.
//! * **Per-call state**: Diagnostics are created here and returned; nothing
//!   outlives the call.
//!
//! ## Invariants
//!
//! * Inputs are validated before any transformation.
//! * The returned value is never negative.
//!
//! ## Non-goals
//!
//! * This module does not scale, quantize, or flip individual objectives.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::wfg::{DEFAULT_MAX_DEPTH, WfgEngine};
use crate::algorithms::zn::ZnEngine;
use crate::algorithms::{Algorithm, VolumeEngine};
use crate::engine::validator::Validator;
use crate::evaluation::contributions::exclusive_contributions;
use crate::math::dominance::Sense;
use crate::primitives::diagnostics::Diagnostics;
use crate::primitives::errors::HypervolumeError;
use crate::primitives::front::Front;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one hypervolume computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HypervolumeConfig {
    /// Decomposition strategy.
    pub algorithm: Algorithm,

    /// Orientation of the reference corner.
    pub sense: Sense,

    /// WFG ceiling on simultaneously live frames.
    pub max_depth: usize,

    /// Compute the exclusive contribution of every row.
    pub return_contributions: bool,
}

impl Default for HypervolumeConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            sense: Sense::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            return_contributions: false,
        }
    }
}

/// Output from hypervolume execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Hypervolume of the front.
    pub value: T,

    /// Exclusive contribution of every row, in input order (if requested).
    pub contributions: Option<Vec<T>>,

    /// Recursion statistics of the main computation.
    pub diagnostics: Diagnostics,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver for hypervolume computations.
pub struct HypervolumeExecutor;

impl HypervolumeExecutor {
    /// Validate, transform, and compute.
    pub fn run_with_config<T, R>(
        rows: &[R],
        reference: &[T],
        config: &HypervolumeConfig,
    ) -> Result<ExecutorOutput<T>, HypervolumeError>
    where
        T: Float,
        R: AsRef<[T]>,
    {
        Validator::validate_max_depth(config.max_depth)?;
        Validator::validate_inputs(rows, reference)?;

        let mut diagnostics = Diagnostics::new();
        if rows.is_empty() {
            return Ok(ExecutorOutput {
                value: T::zero(),
                contributions: config.return_contributions.then(Vec::new),
                diagnostics,
            });
        }

        debug!(
            algorithm = config.algorithm.as_str(),
            points = rows.len(),
            nobj = reference.len(),
            "computing hypervolume"
        );

        let clamped = Self::clamp(rows, reference, config.sense)?;
        let (value, contributions) = match config.algorithm {
            Algorithm::Wfg => {
                let engine;
                let front = match config.sense {
                    Sense::Minimize => {
                        engine = WfgEngine::with_max_depth(reference, config.max_depth);
                        clamped
                    }
                    Sense::Maximize => {
                        let mirrored: Vec<T> = reference.iter().map(|&r| -r).collect();
                        engine = WfgEngine::with_max_depth(&mirrored, config.max_depth);
                        clamped.negated()
                    }
                };
                Self::evaluate(&engine, &front, config, &mut diagnostics)?
            }
            Algorithm::Zn => {
                let offsets = Self::offsets(&clamped, reference);
                Self::evaluate(&ZnEngine, &offsets, config, &mut diagnostics)?
            }
        };

        debug!(
            value = value.to_f64().unwrap_or(f64::NAN),
            calls = diagnostics.total_calls(),
            peak_depth = diagnostics.peak_depth,
            "hypervolume computed"
        );

        Ok(ExecutorOutput {
            value,
            contributions,
            diagnostics,
        })
    }

    /// Run one engine over its prepared front.
    fn evaluate<T, E>(
        engine: &E,
        front: &Front<T>,
        config: &HypervolumeConfig,
        diagnostics: &mut Diagnostics,
    ) -> Result<(T, Option<Vec<T>>), HypervolumeError>
    where
        T: Float,
        E: VolumeEngine<T>,
    {
        let value = engine.volume(front, diagnostics)?.max(T::zero());
        let contributions = if config.return_contributions {
            Some(exclusive_contributions(engine, front, &mut Diagnostics::new())?)
        } else {
            None
        };
        Ok((value, contributions))
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Replace every coordinate worse than the reference by the reference value.
    pub fn clamp<T, R>(rows: &[R], reference: &[T], sense: Sense) -> Result<Front<T>, HypervolumeError>
    where
        T: Float,
        R: AsRef<[T]>,
    {
        let mut front = Front::with_capacity(reference.len(), rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != reference.len() {
                return Err(HypervolumeError::DimensionMismatch {
                    row: front.len(),
                    expected: reference.len(),
                    got: row.len(),
                });
            }
            front.push_from(row.iter().zip(reference).map(|(&v, &r)| sense.better(v, r)));
        }
        Ok(front)
    }

    /// Distance of every clamped coordinate from the reference.
    pub fn offsets<T: Float>(clamped: &Front<T>, reference: &[T]) -> Front<T> {
        let mut front = Front::with_capacity(clamped.nobj(), clamped.len());
        for point in clamped.iter() {
            front.push_from(point.iter().zip(reference).map(|(&c, &r)| (r - c).abs()));
        }
        front
    }
}
