//! Error types for the Hanoi solver
//!
//! [`HanoiError`] covers everything that can go wrong while constructing or
//! running a [`HanoiSolver`](super::engine::HanoiSolver). Only
//! [`HanoiError::InvalidDiskCount`] is expected in normal use (it drives the
//! input retry loop); stack and move errors raised during a solve indicate a
//! defect in the algorithm, not bad input.

use crate::peg::{Disk, PegLabel, StackError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HanoiError {
    /// Disk count outside `1..=max`
    #[error("Invalid disk count {requested}: must be between 1 and {max}")]
    InvalidDiskCount { requested: i64, max: u32 },

    /// Push/pop failure on a peg
    #[error("Peg operation failed: {0}")]
    Stack(#[from] StackError),

    /// A move would put a larger disk on a smaller one
    #[error("Illegal move of disk {disk} from {from} to {to}: would rest on disk {onto}")]
    IllegalMove {
        disk: Disk,
        onto: Disk,
        from: PegLabel,
        to: PegLabel,
    },

    /// `solve` called on a solver that has already run
    #[error("Solver has already run; construct a new solver to solve again")]
    AlreadySolved,

    /// Snapshot history exceeded its byte budget
    #[error("Snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// Stepping past either end of the history, or history disabled
    #[error("History operation failed: {message}")]
    HistoryBoundary { message: String },

    /// Observer failed to write its output
    #[error("Failed to render state: {0}")]
    Render(#[from] io::Error),
}
