//! Pareto dominance and non-dominated filtering.
//!
//! ## Purpose
//!
//! This module defines the optimization [`Sense`], the pairwise [`compare`]
//! relation, and [`nondominated`], which reduces a front to the points no
//! other point dominates. Both engines call the filter on every derived front
//! they recurse into.
//!
//! ## Design notes
//!
//! * **Single pass**: `compare` walks the coordinates once, tracking whether
//!   each side is better somewhere, and stops as soon as both are.
//! * **Archive**: `nondominated` grows an archive of input indices; a
//!   candidate dominated by a member is dropped at once, members it dominates
//!   are evicted, and survivors are appended.
//! * **Stable output**: The archive is emitted in input order.
//!
//! ## Invariants
//!
//! * The output is an antichain: no member dominates another.
//! * Duplicates are retained; equal points neither dominate nor are dominated.
//! * Every removed point is dominated by some surviving point.
//!
//! ## Non-goals
//!
//! * No sorting-based or divide-and-conquer filters; worst case is
//!   `O(n² · nobj)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::front::Front;

// ============================================================================
// Sense
// ============================================================================

/// Which direction along each axis counts as better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    /// Smaller values are better; the reference is the componentwise worst corner.
    #[default]
    Minimize,

    /// Larger values are better.
    Maximize,
}

impl Sense {
    /// Whether `a` is strictly better than `b`.
    #[inline]
    pub fn beats<T: Float>(self, a: T, b: T) -> bool {
        match self {
            Self::Minimize => a < b,
            Self::Maximize => a > b,
        }
    }

    /// The worse of two values.
    #[inline]
    pub fn worse<T: Float>(self, a: T, b: T) -> T {
        if self.beats(a, b) { b } else { a }
    }

    /// The better of two values.
    #[inline]
    pub fn better<T: Float>(self, a: T, b: T) -> T {
        if self.beats(b, a) { b } else { a }
    }
}

// ============================================================================
// Pairwise Relation
// ============================================================================

/// Outcome of comparing point `a` against point `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// `a` is at least as good everywhere and strictly better somewhere.
    Dominates,

    /// `b` dominates `a`.
    Dominated,

    /// Equal in every coordinate.
    Equal,

    /// Each is strictly better than the other somewhere.
    NonDominated,
}

/// Compare two points of equal length under `sense`.
pub fn compare<T: Float>(a: &[T], b: &[T], sense: Sense) -> Dominance {
    debug_assert_eq!(a.len(), b.len());
    let mut a_better = false;
    let mut b_better = false;

    for (&x, &y) in a.iter().zip(b) {
        if sense.beats(x, y) {
            a_better = true;
            if b_better {
                return Dominance::NonDominated;
            }
        } else if sense.beats(y, x) {
            b_better = true;
            if a_better {
                return Dominance::NonDominated;
            }
        }
    }

    match (a_better, b_better) {
        (true, false) => Dominance::Dominates,
        (false, true) => Dominance::Dominated,
        (false, false) => Dominance::Equal,
        (true, true) => Dominance::NonDominated,
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Return the non-dominated subset of `front` under `sense`.
pub fn nondominated<T: Float>(front: &Front<T>, sense: Sense) -> Front<T> {
    if front.len() <= 1 {
        return front.clone();
    }

    let mut archive: Vec<usize> = Vec::with_capacity(front.len());

    'candidates: for candidate in 0..front.len() {
        let point = front.point(candidate);
        let mut i = 0;
        while i < archive.len() {
            match compare(front.point(archive[i]), point, sense) {
                Dominance::Dominates => continue 'candidates,
                Dominance::Dominated => {
                    archive.swap_remove(i);
                }
                Dominance::Equal | Dominance::NonDominated => i += 1,
            }
        }
        archive.push(candidate);
    }

    archive.sort_unstable();

    let mut out = Front::with_capacity(front.nobj(), archive.len());
    for &i in &archive {
        out.push(front.point(i));
    }
    out
}
