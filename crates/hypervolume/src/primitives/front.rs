//! Flat storage for fronts of objective vectors.
//!
//! ## Purpose
//!
//! This module provides [`Front`], the owned collection of points every
//! engine consumes and produces. Points are stored row-major in a single
//! buffer so that limit sets and silhouettes are cheap to build and never
//! alias the front they were derived from.
//!
//! ## Design notes
//!
//! * **Flat**: One `Vec<T>` holds `len * nobj` values; `point(i)` is a slice.
//! * **Zero-dimensional fronts**: The point count is tracked separately, so a
//!   front of `nobj == 0` points (the base of the axis-peeling recursion) is
//!   representable.
//! * **Owned derivations**: `project` and `retain` never expose the storage of
//!   another front.
//!
//! ## Invariants
//!
//! * `values.len() == len * nobj` at all times.
//! * Every point has exactly `nobj` coordinates.
//!
//! ## Non-goals
//!
//! * This module does not check numeric validity (handled by the validator).
//! * This module does not interpret coordinates as better or worse.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::HypervolumeError;

// ============================================================================
// Front
// ============================================================================

/// An owned set of points sharing the same number of objectives.
#[derive(Debug, Clone, PartialEq)]
pub struct Front<T> {
    nobj: usize,
    len: usize,
    values: Vec<T>,
}

impl<T: Float> Front<T> {
    /// Create an empty front of `nobj`-dimensional points.
    pub fn new(nobj: usize) -> Self {
        Self::with_capacity(nobj, 0)
    }

    /// Create an empty front with room for `capacity` points.
    pub fn with_capacity(nobj: usize, capacity: usize) -> Self {
        Self {
            nobj,
            len: 0,
            values: Vec::with_capacity(nobj * capacity),
        }
    }

    /// Build a front from rows, rejecting any row whose length is not `nobj`.
    pub fn from_rows<R: AsRef<[T]>>(nobj: usize, rows: &[R]) -> Result<Self, HypervolumeError> {
        let mut front = Self::with_capacity(nobj, rows.len());
        for row in rows {
            front.try_push(row.as_ref())?;
        }
        Ok(front)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of objectives per point.
    #[inline]
    pub fn nobj(&self) -> usize {
        self.nobj
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the front holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Coordinates of point `i`.
    #[inline]
    pub fn point(&self, i: usize) -> &[T] {
        &self.values[i * self.nobj..(i + 1) * self.nobj]
    }

    /// Mutable coordinates of point `i`.
    #[inline]
    pub fn point_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.values[i * self.nobj..(i + 1) * self.nobj]
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.len).map(move |i| self.point(i))
    }

    /// Copy the points out as owned rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter().map(<[T]>::to_vec).collect()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a point, rejecting it if its length is not `nobj`.
    pub fn try_push(&mut self, point: &[T]) -> Result<(), HypervolumeError> {
        if point.len() != self.nobj {
            return Err(HypervolumeError::DimensionMismatch {
                row: self.len,
                expected: self.nobj,
                got: point.len(),
            });
        }
        self.push(point);
        Ok(())
    }

    /// Append a point whose length is already known to be `nobj`.
    #[inline]
    pub(crate) fn push(&mut self, point: &[T]) {
        debug_assert_eq!(point.len(), self.nobj);
        self.values.extend_from_slice(point);
        self.len += 1;
    }

    /// Append a point built coordinate by coordinate.
    #[inline]
    pub(crate) fn push_from<I: IntoIterator<Item = T>>(&mut self, coords: I) {
        let before = self.values.len();
        self.values.extend(coords);
        debug_assert_eq!(self.values.len() - before, self.nobj);
        self.len += 1;
    }

    /// Keep only the points for which `keep` returns true, preserving order.
    pub fn retain<F: FnMut(&[T]) -> bool>(&mut self, mut keep: F) {
        let nobj = self.nobj;
        let mut write = 0;
        for read in 0..self.len {
            if keep(&self.values[read * nobj..(read + 1) * nobj]) {
                if write != read {
                    self.values
                        .copy_within(read * nobj..(read + 1) * nobj, write * nobj);
                }
                write += 1;
            }
        }
        self.len = write;
        self.values.truncate(write * nobj);
    }

    // ========================================================================
    // Derivations
    // ========================================================================

    /// Drop coordinate `axis` from every point (the silhouette along `axis`).
    pub fn project(&self, axis: usize) -> Self {
        debug_assert!(axis < self.nobj);
        let mut out = Self::with_capacity(self.nobj - 1, self.len);
        for point in self.iter() {
            out.push_from(
                point
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != axis)
                    .map(|(_, &v)| v),
            );
        }
        out
    }

    /// Negate every coordinate, mirroring the front through the origin.
    pub fn negated(&self) -> Self {
        Self {
            nobj: self.nobj,
            len: self.len,
            values: self.values.iter().map(|&v| -v).collect(),
        }
    }
}
