//! Ball bookkeeping
//!
//! Entities, the random source they are spawned from, and the manager that
//! owns them. Everything here is single-threaded and deterministic for a
//! given source:
//! - Seeded RNG only (injected, never owned)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod manager;
pub mod rng;
pub mod state;

pub use manager::{BallManager, Snapshot};
pub use rng::{SharedRng, UniformSource, sample_range, shared};
pub use state::Ball;
