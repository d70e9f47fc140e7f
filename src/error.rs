//! Crate error type

use std::cell::BorrowMutError;
use std::collections::TryReserveError;

/// Ways that spawning, selection, or settings handling can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SimError {
    /// A caller-supplied value is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No ball with this id is currently managed.
    #[error("no ball with id {0}")]
    NoSuchBall(u32),
    /// The shared random source could not be borrowed.
    #[error("random source unavailable: {0}")]
    RngUnavailable(#[from] BorrowMutError),
    /// Storage for the requested number of balls could not be reserved.
    #[error("could not reserve ball storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings IO error: {0}")]
    Io(#[from] std::io::Error),
}
