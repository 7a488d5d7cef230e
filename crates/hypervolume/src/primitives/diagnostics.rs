//! Per-invocation recursion counters.
//!
//! ## Purpose
//!
//! This module defines [`Diagnostics`], the bookkeeping value threaded by
//! `&mut` through one top-level hypervolume computation. It records how many
//! sub-problems were evaluated at each recursion level, how deep the
//! recursion went, and how often the dominance filter ran.
//!
//! ## Design notes
//!
//! * **Call-local**: A fresh value is created for every top-level call and
//!   dropped (or returned) at its end. There is no process-wide counter, so
//!   independent computations on separate threads never interfere.
//! * **Cheap**: Recording is a vector index and an increment.
//!
//! ## Key concepts
//!
//! * **Level**: For WFG, the stack depth of the frame (0 = the input front).
//!   For ZN, the number of axes already dropped (0 = full dimensionality).
//!
//! ## Non-goals
//!
//! * This module does not time anything or enforce budgets.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Diagnostics
// ============================================================================

/// Recursion statistics collected during a single hypervolume computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Sub-problems evaluated at each recursion level.
    pub calls_per_level: Vec<usize>,

    /// Deepest level reached, counted in levels (1 = only the input front).
    pub peak_depth: usize,

    /// Number of dominance filter invocations.
    pub filter_calls: usize,
}

impl Diagnostics {
    /// Create an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sub-problem evaluated at `level`.
    #[inline]
    pub fn record_call(&mut self, level: usize) {
        if self.calls_per_level.len() <= level {
            self.calls_per_level.resize(level + 1, 0);
        }
        self.calls_per_level[level] += 1;
        self.peak_depth = self.peak_depth.max(level + 1);
    }

    /// Record one dominance filter invocation.
    #[inline]
    pub fn record_filter(&mut self) {
        self.filter_calls += 1;
    }

    /// Total sub-problems evaluated across all levels.
    pub fn total_calls(&self) -> usize {
        self.calls_per_level.iter().sum()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Recursion Diagnostics:")?;
        writeln!(f, "  Total calls:  {}", self.total_calls())?;
        writeln!(f, "  Peak depth:   {}", self.peak_depth)?;
        writeln!(f, "  Filter calls: {}", self.filter_calls)?;
        for (level, calls) in self.calls_per_level.iter().enumerate() {
            writeln!(f, "  Level {:>3}: {:>10}", level, calls)?;
        }
        Ok(())
    }
}
