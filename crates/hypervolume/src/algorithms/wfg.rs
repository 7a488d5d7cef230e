//! WFG hypervolume: inclusion–exclusion over limit sets.
//!
//! ## Purpose
//!
//! This module computes the hypervolume of a front under minimization, with
//! the reference point as the dominated corner. The total is the sum of each
//! point's exclusive volume, and each exclusive volume is the point's box
//! minus the hypervolume of the points after it, clipped to that box:
//!
//! ```text
//! wfg(F)       = Σ_k excl(F, k)
//! excl(F, k)   = incl(F[k]) - wfg(nds(limit(F, k)))
//! limit(F, k)  = { worse(F[k], F[i]) : i > k }
//! ```
//!
//! ## Design notes
//!
//! * **Explicit stack**: Each nested `wfg` call is a [`Frame`] holding its
//!   front, the index of the point being resolved, that point's inclusive
//!   volume, and the running sum. Nothing recurses on the machine stack.
//! * **Depth ceiling**: Pushing a frame beyond `max_depth` live frames fails
//!   with `RecursionLimitExceeded` and the computation is abandoned.
//! * **Base cases**: Empty, single-point, one- and two-objective fronts are
//!   evaluated in place. Two objectives use a sorted sweep.
//! * **Filtering**: Every limit set passes through the dominance filter
//!   before it is evaluated, which keeps nested fronts small in practice.
//!
//! ## Invariants
//!
//! * Every point of interest is no worse than the reference in any objective.
//! * The result does not depend on input order.
//!
//! ## Non-goals
//!
//! * No objective slicing or point-ordering heuristics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;
use tracing::{trace, warn};

// Internal dependencies
use crate::algorithms::VolumeEngine;
use crate::math::dominance::{Sense, nondominated};
use crate::math::volume::{inclusive_volume, limit_set};
use crate::primitives::diagnostics::Diagnostics;
use crate::primitives::errors::HypervolumeError;
use crate::primitives::front::Front;

/// Default ceiling on simultaneously live frames.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

// ============================================================================
// Frame
// ============================================================================

/// One pending `wfg` evaluation.
struct Frame<T> {
    /// Non-dominated front being summed.
    front: Front<T>,

    /// Index of the point whose exclusive volume is being resolved.
    index: usize,

    /// Inclusive volume of `front[index]`, waiting for its child's result.
    inclusive: T,

    /// Sum of the exclusive volumes resolved so far.
    volume: T,
}

impl<T: Float> Frame<T> {
    fn new(front: Front<T>) -> Self {
        Self {
            front,
            index: 0,
            inclusive: T::zero(),
            volume: T::zero(),
        }
    }

    /// Close out `front[index]` given the volume its limit set covers.
    #[inline]
    fn resolve(&mut self, inclusive: T, covered: T) {
        self.volume = self.volume + (inclusive - covered);
        self.index += 1;
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.index == self.front.len()
    }
}

// ============================================================================
// Engine
// ============================================================================

/// WFG engine bound to a reference point.
#[derive(Debug, Clone)]
pub struct WfgEngine<T> {
    reference: Vec<T>,
    max_depth: usize,
}

impl<T: Float> WfgEngine<T> {
    /// Create an engine with the default depth ceiling.
    pub fn new(reference: &[T]) -> Self {
        Self::with_max_depth(reference, DEFAULT_MAX_DEPTH)
    }

    /// Create an engine with an explicit depth ceiling.
    pub fn with_max_depth(reference: &[T], max_depth: usize) -> Self {
        Self {
            reference: reference.to_vec(),
            max_depth,
        }
    }

    /// The reference point.
    pub fn reference(&self) -> &[T] {
        &self.reference
    }

    /// The configured depth ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Hypervolume of `front` relative to the reference point.
    pub fn compute(
        &self,
        front: &Front<T>,
        diagnostics: &mut Diagnostics,
    ) -> Result<T, HypervolumeError> {
        if front.is_empty() {
            return Ok(T::zero());
        }
        if front.nobj() != self.reference.len() {
            return Err(HypervolumeError::DimensionMismatch {
                row: 0,
                expected: self.reference.len(),
                got: front.nobj(),
            });
        }
        if self.max_depth == 0 {
            return Err(HypervolumeError::InvalidMaxDepth(0));
        }

        let root = nondominated(front, Sense::Minimize);
        diagnostics.record_filter();
        diagnostics.record_call(0);
        if let Some(volume) = self.base_case(&root) {
            return Ok(volume.max(T::zero()));
        }

        let mut stack: Vec<Frame<T>> = Vec::with_capacity(self.max_depth.min(64));
        stack.push(Frame::new(root));

        loop {
            let depth = stack.len();
            let Some(frame) = stack.last_mut() else {
                return Ok(T::zero());
            };

            if frame.is_done() {
                let finished = frame.volume;
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => {
                        let inclusive = parent.inclusive;
                        parent.resolve(inclusive, finished);
                    }
                    None => return Ok(finished.max(T::zero())),
                }
                continue;
            }

            let k = frame.index;
            let n = frame.front.len();
            let inclusive = inclusive_volume(frame.front.point(k), &self.reference);

            if k + 1 == n {
                frame.resolve(inclusive, T::zero());
                continue;
            }

            let limit = nondominated(
                &limit_set(&frame.front, k, k + 1..n, Sense::Minimize),
                Sense::Minimize,
            );
            diagnostics.record_filter();
            diagnostics.record_call(depth);

            if let Some(covered) = self.base_case(&limit) {
                frame.resolve(inclusive, covered);
                continue;
            }

            if depth >= self.max_depth {
                warn!(
                    limit = self.max_depth,
                    points = limit.len(),
                    nobj = limit.nobj(),
                    "wfg recursion limit exceeded"
                );
                return Err(HypervolumeError::RecursionLimitExceeded {
                    limit: self.max_depth,
                });
            }

            trace!(depth, points = limit.len(), "descending into limit set");
            frame.inclusive = inclusive;
            stack.push(Frame::new(limit));
        }
    }

    // ========================================================================
    // Base Cases
    // ========================================================================

    /// Evaluate fronts that need no further decomposition.
    fn base_case(&self, front: &Front<T>) -> Option<T> {
        match (front.len(), front.nobj()) {
            (0, _) => Some(T::zero()),
            (1, _) => Some(inclusive_volume(front.point(0), &self.reference)),
            (_, 0) => Some(T::one()),
            (_, 1) => {
                let best = front
                    .iter()
                    .map(|p| p[0])
                    .fold(front.point(0)[0], |a, b| Sense::Minimize.better(a, b));
                Some((best - self.reference[0]).abs())
            }
            (_, 2) => Some(self.sweep_2d(front)),
            _ => None,
        }
    }

    /// Two-objective hypervolume by sweeping points in order of the first objective.
    fn sweep_2d(&self, front: &Front<T>) -> T {
        let (r0, r1) = (self.reference[0], self.reference[1]);

        let mut points: Vec<(T, T)> = front.iter().map(|p| (p[0], p[1])).collect();
        points.sort_unstable_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Equal)
                .then(a.1.partial_cmp(&b.1).unwrap_or(Equal))
        });

        let mut volume = T::zero();
        let mut lowest = r1;
        for (i, &(x, y)) in points.iter().enumerate() {
            lowest = lowest.min(y);
            let next_x = points.get(i + 1).map_or(r0, |p| p.0);
            volume = volume + (next_x - x) * (r1 - lowest);
        }
        volume
    }
}

impl<T: Float> VolumeEngine<T> for WfgEngine<T> {
    fn sense(&self) -> Sense {
        Sense::Minimize
    }

    fn inclusive(&self, point: &[T]) -> T {
        inclusive_volume(point, &self.reference)
    }

    fn volume(
        &self,
        front: &Front<T>,
        diagnostics: &mut Diagnostics,
    ) -> Result<T, HypervolumeError> {
        self.compute(front, diagnostics)
    }
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Hypervolume of a minimization front relative to `reference`.
///
/// Uses [`DEFAULT_MAX_DEPTH`]; build a [`WfgEngine`] for a different ceiling.
pub fn wfg_hypervolume<T: Float>(front: &Front<T>, reference: &[T]) -> Result<T, HypervolumeError> {
    WfgEngine::new(reference).compute(front, &mut Diagnostics::new())
}
