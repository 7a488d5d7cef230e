//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure geometric building blocks both engines share:
//! - The Pareto dominance relation and the non-dominated filter
//! - Axis-aligned box volumes, limit sets and componentwise extremes
//!
//! These carry no algorithm-specific control flow.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dominance relation and non-dominated filtering.
pub mod dominance;

/// Box volumes and derived fronts.
pub mod volume;
