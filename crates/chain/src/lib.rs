//! Discrete-time Markov chain model for enemy attack patterns.
//!
//! A [`ChainModel`] pairs labelled states with a validated row-stochastic
//! [`TransitionMatrix`]. [`simulate`] walks the chain with an injected
//! random number generator, and [`stationary_distribution`] gives the
//! theoretical long-run share of each state.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │    model     │────▶│   simulate     │────▶│     Sequence     │
//!  │ (validate P) │     │ (inverse CDF)  │     │ (steps + 1 ids)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tell_chain::{ChainModel, StateId, simulate};
//!
//! let model = ChainModel::boss();
//! let mut rng = StdRng::seed_from_u64(42);
//! let seq = simulate(&model, 100, StateId::new(0), &mut rng).unwrap();
//! assert_eq!(seq.len(), 101);
//! ```

pub mod error;
pub mod model;
pub mod simulate;
pub mod state;
pub mod stationary;
pub mod transition;

pub use error::ChainError;
pub use model::{BOSS_LABELS, BOSS_MATRIX, ChainModel};
pub use simulate::{MAX_STEPS, Sequence, simulate, simulate_into};
pub use state::{StateId, StateSet};
pub use stationary::{Stationary, StationaryConfig, stationary_distribution};
pub use transition::{ROW_SUM_TOLERANCE, TransitionMatrix};
