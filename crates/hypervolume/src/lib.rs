//! # Hypervolume — exact hypervolume indicator for Rust
//!
//! The hypervolume indicator is the volume of objective space dominated by a
//! set of points (a *front*) and bounded by a fixed *reference point*. It is
//! the standard quality measure for approximations of Pareto-optimal fronts in
//! multi-objective optimization: a larger hypervolume means a front that is
//! closer to the true Pareto front and better spread along it.
//!
//! Two exact algorithms are provided behind one interface:
//!
//! * **WFG**: recursive inclusion–exclusion over *limit sets*. Each point's
//!   exclusive volume is its box minus the hypervolume of the remaining points
//!   clipped to that box. Evaluated on an explicit, depth-bounded stack.
//! * **ZN**: recursive axis peeling. The box shared by all points is sliced
//!   off one axis at a time, each slab being a lower-dimensional hypervolume
//!   problem on the front's *silhouette*.
//!
//! Both agree to floating-point tolerance on identical inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use hypervolume::prelude::*;
//!
//! // Minimization: smaller is better, the reference is the nadir corner.
//! let front: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
//! let reference = [3.0, 3.0];
//!
//! let hv = hypervolume(&front, &reference, Wfg)?;
//! assert!((hv - 3.0).abs() < 1e-12);
//! # Result::<(), HypervolumeError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use hypervolume::prelude::*;
//!
//! let front: Vec<Vec<f64>> = vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![2.0, 3.0, 1.0],
//!     vec![3.0, 1.0, 2.0],
//! ];
//!
//! let calculator = Hypervolume::new()
//!     .algorithm(Zn)            // Axis-peeling decomposition
//!     .sense(Minimize)          // Reference point is the worst corner
//!     .max_depth(64)            // WFG recursion ceiling
//!     .return_diagnostics()     // Per-level call counts
//!     .return_contributions()   // Exclusive volume of every point
//!     .build()?;
//!
//! let result = calculator.compute(&front, &[4.0, 4.0, 4.0])?;
//! assert!((result.value - 13.0).abs() < 1e-12);
//! println!("{}", result);
//! # Result::<(), HypervolumeError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `compute` returns `Result<HypervolumeResult<T>, HypervolumeError>`:
//!
//! - **`DimensionMismatch`**: a row's length differs from the reference's.
//! - **`RecursionLimitExceeded`**: the WFG depth ceiling tripped; the front
//!   is abandoned.
//! - An empty front is not an error and yields `0.0`.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! hypervolume = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - While, L., Bradstreet, L., Barone, L. (2012). "A Fast Way of Calculating
//!   Exact Hypervolumes". IEEE Transactions on Evolutionary Computation.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - front storage, errors, recursion bookkeeping.
mod primitives;

// Layer 2: Math - dominance relation and box volumes.
mod math;

// Layer 3: Algorithms - the WFG and ZN engines.
mod algorithms;

// Layer 4: Evaluation - per-point exclusive contributions.
mod evaluation;

// Layer 5: Engine - validation, transformation and dispatch.
mod engine;

// High-level fluent API.
mod api;

// Standard hypervolume prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm::{Wfg, Zn},
        Algorithm, Diagnostics, Dominance, Front, HypervolumeBuilder as Hypervolume,
        HypervolumeCalculator, HypervolumeError, HypervolumeResult,
        Sense::{Maximize, Minimize},
        Sense, VolumeEngine, WfgEngine, ZnEngine, compare, exclusive_contributions, hypervolume,
        nondominated, wfg_hypervolume, zn_hypervolume,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
