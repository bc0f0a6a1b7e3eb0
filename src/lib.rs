//! Cuckoo search over gridded 2D fitness landscapes
//!
//! The crate has two halves:
//!
//! - [`landscape`]: samples a raw objective (sphere, Griewank, Himmelblau,
//!   Ackley, Rastrigin) on a grid and answers nearest-grid-point fitness
//!   queries through a k-d tree.
//! - [`algorithms`]: the cuckoo search itself. Every step performs one
//!   rejection-sampled Lévy flight and one pairwise replacement.
//!
//! Randomness is always supplied by the caller, so seeded runs are
//! reproducible and independent searches can share one landscape across
//! threads.
//!
//! ## Example Usage
//!
//! ```rust
//! use cuckoo_landscape::{Bounds, CuckooSearch, FitnessLandscape, LandscapeKind, SearchConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let bounds = Bounds::new(-5.0, 5.0, -3.0, 3.0).unwrap();
//! let landscape = FitnessLandscape::new(LandscapeKind::Sphere, bounds, 100).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(1234);
//! let config = SearchConfig { step_scale: 0.5, ..SearchConfig::with_individuals(10) };
//! let mut search = CuckooSearch::new(&landscape, config, &mut rng).unwrap();
//!
//! for _ in 0..200 {
//!     search.step(&mut rng).unwrap();
//! }
//! assert!(search.best_fitness() <= landscape.max_fitness());
//! ```

#![warn(clippy::all)]

pub mod algorithms;
pub mod common;
pub mod config;
pub mod error;
pub mod landscape;
pub mod runner;

pub use algorithms::{CuckooSearch, Levy, StepOutcome};
pub use common::*;
pub use config::ExperimentConfig;
pub use error::{OptimizationError, OptimizationResult};
pub use landscape::{FitnessLandscape, LandscapeKind, SpatialIndex};
pub use runner::{run, run_batch};
