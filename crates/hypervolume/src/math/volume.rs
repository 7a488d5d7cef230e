//! Axis-aligned box volumes and derived fronts.
//!
//! ## Purpose
//!
//! This module provides the volume of the box a single point spans, the
//! componentwise worst corner of a front, and the limit set construction that
//! the WFG decomposition and exclusive contributions are built on.
//!
//! ## Key concepts
//!
//! * **Inclusive volume**: `Π_j |p[j] - r[j]|`, the box between a point and
//!   the reference.
//! * **Limit set**: For a pivot `front[k]` and some other members, the
//!   componentwise worse corner of each pair. It is exactly the part of the
//!   pivot's box those members also cover.
//! * **Nadir**: Componentwise worst value across a front.
//!
//! ## Non-goals
//!
//! * This module does not filter dominated points from the fronts it builds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::dominance::Sense;
use crate::primitives::front::Front;

/// Volume of the box between `point` and `reference`.
#[inline]
pub fn inclusive_volume<T: Float>(point: &[T], reference: &[T]) -> T {
    point
        .iter()
        .zip(reference)
        .fold(T::one(), |acc, (&p, &r)| acc * (p - r).abs())
}

/// Volume of the box between `point` and the origin.
#[inline]
pub fn box_volume<T: Float>(point: &[T]) -> T {
    point.iter().fold(T::one(), |acc, &p| acc * p)
}

/// Pair `front[k]` with each member in `others`, keeping the worse coordinate.
pub fn limit_set<T, I>(front: &Front<T>, k: usize, others: I, sense: Sense) -> Front<T>
where
    T: Float,
    I: IntoIterator<Item = usize>,
{
    let pivot = front.point(k);
    let others = others.into_iter();
    let mut out = Front::with_capacity(front.nobj(), others.size_hint().0);

    for i in others {
        out.push_from(
            pivot
                .iter()
                .zip(front.point(i))
                .map(|(&p, &q)| sense.worse(p, q)),
        );
    }
    out
}

/// Componentwise worst coordinates of a non-empty front.
pub fn nadir<T: Float>(front: &Front<T>, sense: Sense) -> Vec<T> {
    let mut corner = front.point(0).to_vec();
    for point in front.iter().skip(1) {
        for (c, &v) in corner.iter_mut().zip(point) {
            *c = sense.worse(*c, v);
        }
    }
    corner
}
