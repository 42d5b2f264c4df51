//! Move events emitted by the solver
//!
//! The solver reports its progress through a [`MoveObserver`]: once before
//! the first move and once after every move, with the pegs already updated.
//! Rendering is an observer concern; the solver itself never prints.

use super::engine::HanoiSolver;
use crate::snapshot::MoveRecord;
use std::io;

pub trait MoveObserver {
    /// Called once before the first move, with the initial peg state
    fn on_start(&mut self, _solver: &HanoiSolver) -> io::Result<()> {
        Ok(())
    }

    /// Called after each move has been applied
    fn on_move(&mut self, record: &MoveRecord, solver: &HanoiSolver) -> io::Result<()>;
}

/// Observer that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MoveObserver for NullObserver {
    fn on_move(&mut self, _record: &MoveRecord, _solver: &HanoiSolver) -> io::Result<()> {
        Ok(())
    }
}
