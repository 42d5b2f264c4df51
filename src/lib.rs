//! # Introduction
//!
//! hanoi-tty solves the Tower of Hanoi on three fixed-capacity stacks,
//! rendering the pegs after every move. A solve can optionally record a
//! snapshot per move, which is then navigated forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Driver → HanoiSolver → BoundedStack push/pop → MoveObserver (render) → Snapshots → TUI
//! ```
//!
//! 1. [`peg`]: [`peg::BoundedStack`] and the [`peg::Disk`] / [`peg::PegLabel`] types.
//! 2. [`solver`]: the recursive [`solver::HanoiSolver`], its errors and the
//!    [`solver::MoveObserver`] event seam.
//! 3. [`render`]: text layout of the three towers.
//! 4. [`snapshot`]: per-move history with a configurable memory limit.
//! 5. [`driver`]: prompt loop and end-of-solve report.
//! 6. [`ui`]: ratatui-based history viewer; not part of the stable library API.
//!
//! The [`tree`] module is a separate exercise: an arena-backed binary tree
//! with the four classic traversal orders.

pub mod driver;
pub mod peg;
pub mod render;
pub mod snapshot;
pub mod solver;
pub mod tree;
pub mod ui;
