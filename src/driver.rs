//! Interactive driver: prompt for a disk count, solve, report
//!
//! The driver is written against [`BufRead`]/[`Write`] so the binary can
//! hand it stdin/stdout while tests feed it in-memory buffers.

use crate::render::TextRenderer;
use crate::solver::{minimum_moves, HanoiError, HanoiSolver, NullObserver};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Hanoi(#[from] HanoiError),

    #[error("Input closed before a valid number of disks was entered")]
    InputClosed,
}

/// How a session should run
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Disk count to use instead of prompting
    pub disks: Option<i64>,
    /// Skip the per-move transcript
    pub quiet: bool,
    /// Record per-move history within this many bytes
    pub history_limit: Option<usize>,
}

/// Outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub disks: u32,
    pub moves: u64,
    pub minimum: u64,
    /// False when the solve stopped early because history ran out of room
    pub completed: bool,
}

fn build_solver(disks: i64, history_limit: Option<usize>) -> Result<HanoiSolver, HanoiError> {
    match history_limit {
        Some(limit) => HanoiSolver::with_history(disks, limit),
        None => HanoiSolver::new(disks),
    }
}

/// Prompt until a valid disk count is entered and return a solver for it
pub fn prompt_for_solver<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    history_limit: Option<usize>,
) -> Result<HanoiSolver, DriverError> {
    let mut line = String::new();
    loop {
        write!(output, "Enter the number of disks: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(DriverError::InputClosed);
        }

        let disks = match line.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                debug!(input = line.trim(), "Rejected non-integer input");
                writeln!(output, "Please enter a valid integer number.")?;
                continue;
            }
        };

        match build_solver(disks, history_limit) {
            Ok(solver) => return Ok(solver),
            Err(HanoiError::InvalidDiskCount { requested, max }) => {
                debug!(requested, "Rejected disk count");
                if requested <= 0 {
                    writeln!(output, "Please enter a positive number.")?;
                } else {
                    writeln!(output, "Please enter a number no greater than {}.", max)?;
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Run one session: obtain a solver, solve it, print the summary
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
) -> Result<(HanoiSolver, SessionReport), DriverError> {
    let mut solver = match options.disks {
        Some(disks) => build_solver(disks, options.history_limit)?,
        None => prompt_for_solver(input, output, options.history_limit)?,
    };

    let result = if options.quiet {
        solver.solve(&mut NullObserver)
    } else {
        let mut renderer = TextRenderer::new(&mut *output);
        solver.solve(&mut renderer)
    };

    let completed = match result {
        Ok(()) => true,
        Err(HanoiError::SnapshotLimitExceeded { current, limit }) => {
            warn!(current, limit, moves = solver.moves(), "History full, solve stopped early");
            writeln!(
                output,
                "\nHistory limit of {} bytes reached after {} moves; solve stopped.",
                limit,
                solver.moves()
            )?;
            false
        }
        Err(e) => return Err(e.into()),
    };

    let report = SessionReport {
        disks: solver.num_disks(),
        moves: solver.moves(),
        minimum: minimum_moves(solver.num_disks()),
        completed,
    };

    if completed {
        writeln!(output, "\nPuzzle solved in {} moves!", report.moves)?;
        writeln!(output, "Minimum possible moves: {}", report.minimum)?;
    }

    output.flush()?;
    Ok((solver, report))
}
