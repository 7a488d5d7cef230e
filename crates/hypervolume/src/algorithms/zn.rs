//! ZN hypervolume: recursive axis peeling.
//!
//! ## Purpose
//!
//! This module computes the hypervolume of a front under maximization
//! relative to the origin. Callers translate their data so that every
//! coordinate is an offset from the reference point (larger is better, the
//! origin is the dominated corner).
//!
//! ## Key concepts
//!
//! Every surviving point dominates the box `[0, nadir]`. Peeling that box off
//! one axis at a time leaves, for axis `a`, a slab of thickness `nadir[a]`
//! whose cross-section is the hypervolume of the front's *silhouette* (the
//! front with axis `a` dropped). After each slab the points are translated
//! down by `nadir[a]` along that axis. Once every axis is peeled, the
//! translated points describe the remaining "staircase" and the procedure
//! repeats on them.
//!
//! ```text
//! zn(F) = Σ_a nadir[a] · zn(nds(silhouette_a(F'))) + zn(F'')
//! ```
//!
//! ## Design notes
//!
//! * **Termination**: Each pass translates at least one point onto an axis
//!   plane, where it is discarded, so the outer loop runs at most `len` times.
//! * **Bounded stack**: The staircase remainder is a loop, not a call; only
//!   the silhouette recursion nests, and it drops one axis per level.
//! * **Base cases**: Zero objectives contribute the multiplicative identity;
//!   one objective is the largest coordinate.
//!
//! ## Non-goals
//!
//! * No extremal-point ("nadir contributor") shortcuts.

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::algorithms::VolumeEngine;
use crate::math::dominance::{Sense, nondominated};
use crate::math::volume::{box_volume, nadir};
use crate::primitives::diagnostics::Diagnostics;
use crate::primitives::errors::HypervolumeError;
use crate::primitives::front::Front;

// ============================================================================
// Engine
// ============================================================================

/// ZN engine; the origin is the reference point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZnEngine;

impl ZnEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Hypervolume of `front` relative to the origin.
    pub fn compute<T: Float>(&self, front: &Front<T>, diagnostics: &mut Diagnostics) -> T {
        if front.is_empty() {
            return T::zero();
        }
        let filtered = nondominated(front, Sense::Maximize);
        diagnostics.record_filter();
        self.peel(filtered, 0, diagnostics)
    }

    /// Peel `points` down to nothing, accumulating the slabs.
    fn peel<T: Float>(&self, mut points: Front<T>, level: usize, diagnostics: &mut Diagnostics) -> T {
        let mut volume = T::zero();

        loop {
            points.retain(|p| p.iter().all(|&v| v > T::zero()));
            if points.is_empty() {
                return volume;
            }
            diagnostics.record_call(level);

            let nobj = points.nobj();
            match nobj {
                0 => return volume + T::one(),
                1 => {
                    let top = points.iter().map(|p| p[0]).fold(T::zero(), |a, b| a.max(b));
                    return volume + top;
                }
                _ => {}
            }

            trace!(level, points = points.len(), nobj, "peeling nadir box");
            let corner = nadir(&points, Sense::Maximize);

            for (axis, &depth) in corner.iter().enumerate() {
                let silhouette = nondominated(&points.project(axis), Sense::Maximize);
                diagnostics.record_filter();
                let down_one = self.peel(silhouette, level + 1, diagnostics);
                volume = volume + depth * down_one;

                for i in 0..points.len() {
                    let p = points.point_mut(i);
                    p[axis] = p[axis] - depth;
                }
            }
        }
    }
}

impl<T: Float> VolumeEngine<T> for ZnEngine {
    fn sense(&self) -> Sense {
        Sense::Maximize
    }

    fn inclusive(&self, point: &[T]) -> T {
        if point.iter().any(|&v| v <= T::zero()) {
            T::zero()
        } else {
            box_volume(point)
        }
    }

    fn volume(
        &self,
        front: &Front<T>,
        diagnostics: &mut Diagnostics,
    ) -> Result<T, HypervolumeError> {
        Ok(self.compute(front, diagnostics))
    }
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Hypervolume of a maximization front relative to the origin.
pub fn zn_hypervolume<T: Float>(front: &Front<T>) -> T {
    ZnEngine.compute(front, &mut Diagnostics::new())
}
