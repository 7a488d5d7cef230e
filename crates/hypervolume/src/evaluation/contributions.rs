//! Exclusive hypervolume contributions.
//!
//! ## Purpose
//!
//! This module computes, for every point of a front, the volume that only
//! that point dominates: its box minus the part of the box any other point
//! also covers.
//!
//! ```text
//! excl(F, k) = incl(F[k]) - V(nds({ worse(F[k], F[i]) : i ≠ k }))
//! ```
//!
//! ## Design notes
//!
//! * **Engine-agnostic**: Works through [`VolumeEngine`], in whichever frame
//!   the engine reads coordinates.
//! * **Input order**: Contributions are reported in the front's order.
//!
//! ## Invariants
//!
//! * Dominated points and exact duplicates contribute zero.
//! * The sum of contributions never exceeds the total hypervolume.
//!
//! ## Non-goals
//!
//! * No ranking, greedy reduction or incremental updates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::VolumeEngine;
use crate::math::volume::limit_set;
use crate::primitives::diagnostics::Diagnostics;
use crate::primitives::errors::HypervolumeError;
use crate::primitives::front::Front;

/// Exclusive hypervolume of every point in `front`, in input order.
pub fn exclusive_contributions<T, E>(
    engine: &E,
    front: &Front<T>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<T>, HypervolumeError>
where
    T: Float,
    E: VolumeEngine<T> + ?Sized,
{
    let n = front.len();
    let sense = engine.sense();
    let mut out = Vec::with_capacity(n);

    for k in 0..n {
        let inclusive = engine.inclusive(front.point(k));
        let limit = limit_set(front, k, (0..n).filter(|&i| i != k), sense);
        // `volume` filters the limit set itself.
        let covered = engine.volume(&limit, diagnostics)?;
        out.push((inclusive - covered).max(T::zero()));
    }

    Ok(out)
}
