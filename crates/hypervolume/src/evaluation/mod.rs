//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives per-point quantities from the engines: the exclusive
//! hypervolume each point contributes to its front.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exclusive hypervolume contributions.
pub mod contributions;
