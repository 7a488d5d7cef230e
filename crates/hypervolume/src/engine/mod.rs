//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer turns caller rows into engine-ready fronts and back into a
//! result. It validates input, clamps points to the reference, translates
//! them into the frame the selected algorithm expects, and dispatches.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Transformation and dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for hypervolume computations.
pub mod output;
