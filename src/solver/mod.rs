//! Tower of Hanoi solver
//!
//! This module provides the solving logic:
//! - [`engine`]: [`HanoiSolver`], the recursive solver and its history navigation
//! - [`errors`]: Error types
//! - [`observer`]: The [`MoveObserver`] trait through which moves are reported
//!
//! # Algorithm
//!
//! To move `n` disks from a source peg to a target peg:
//!
//! ```text
//! move n-1 disks  source → spare   (via target)
//! move disk n     source → target
//! move n-1 disks  spare  → target  (via source)
//! ```
//!
//! which takes exactly `2^n - 1` moves. Recursion depth equals the disk count,
//! bounded by [`constants::MAX_DISKS`].

pub mod constants;
pub mod engine;
pub mod errors;
pub mod observer;

pub use engine::{minimum_moves, HanoiSolver, SolveState};
pub use errors::HanoiError;
pub use observer::{MoveObserver, NullObserver};
