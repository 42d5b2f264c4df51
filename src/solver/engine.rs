// Execution engine for the Hanoi solver

use super::constants::MAX_DISKS;
use super::errors::HanoiError;
use super::observer::MoveObserver;
use crate::peg::{BoundedStack, Disk, PegLabel};
use crate::snapshot::{MoveRecord, Snapshot, SnapshotManager};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Progress of a solver through its single solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    Unsolved,
    Solving,
    Solved,
}

/// Minimum number of moves for `num_disks` disks (2^n - 1), saturating at `u64::MAX`
pub fn minimum_moves(num_disks: u32) -> u64 {
    if num_disks >= 64 {
        u64::MAX
    } else {
        (1u64 << num_disks) - 1
    }
}

/// Three-peg Tower of Hanoi solver
#[derive(Debug)]
pub struct HanoiSolver {
    num_disks: u32,

    /// Pegs A (source), B (spare), C (target), indexed by `PegLabel::index`
    pegs: [BoundedStack<Disk>; 3],

    moves: u64,

    state: SolveState,

    /// How many times each disk has been moved
    disk_moves: FxHashMap<Disk, u64>,

    /// Per-move history, when recording was requested at construction
    history: Option<SnapshotManager>,

    /// Current position in history (for stepping backward/forward)
    history_position: usize,
}

impl HanoiSolver {
    /// Create a solver with `num_disks` disks stacked on peg A
    pub fn new(num_disks: i64) -> Result<Self, HanoiError> {
        let num_disks = match u32::try_from(num_disks) {
            Ok(n) if (1..=MAX_DISKS).contains(&n) => n,
            _ => {
                return Err(HanoiError::InvalidDiskCount {
                    requested: num_disks,
                    max: MAX_DISKS,
                })
            }
        };

        let capacity = num_disks as usize;
        let mut pegs = PegLabel::ALL.map(|label| BoundedStack::new(capacity, label.to_string()));

        // Largest first so it ends up at the bottom
        for size in (1..=num_disks).rev() {
            pegs[PegLabel::A.index()].push(Disk::new(size))?;
        }

        Ok(HanoiSolver {
            num_disks,
            pegs,
            moves: 0,
            state: SolveState::Unsolved,
            disk_moves: FxHashMap::default(),
            history: None,
            history_position: 0,
        })
    }

    /// Create a solver that records a snapshot after every move, within
    /// `memory_limit` bytes
    pub fn with_history(num_disks: i64, memory_limit: usize) -> Result<Self, HanoiError> {
        let mut solver = Self::new(num_disks)?;
        solver.history = Some(SnapshotManager::new(memory_limit));
        Ok(solver)
    }

    /// Move all disks from A to C, reporting each move to `observer`
    pub fn solve(&mut self, observer: &mut dyn MoveObserver) -> Result<(), HanoiError> {
        if self.state != SolveState::Unsolved {
            return Err(HanoiError::AlreadySolved);
        }
        self.state = SolveState::Solving;

        info!(disks = self.num_disks, "Solving Tower of Hanoi");
        self.take_snapshot(None)?;
        observer.on_start(self)?;

        self.solve_recursive(
            self.num_disks,
            PegLabel::A,
            PegLabel::C,
            PegLabel::B,
            observer,
        )?;

        self.state = SolveState::Solved;
        info!(moves = self.moves, "Solved");
        Ok(())
    }

    fn solve_recursive(
        &mut self,
        n: u32,
        source: PegLabel,
        target: PegLabel,
        spare: PegLabel,
        observer: &mut dyn MoveObserver,
    ) -> Result<(), HanoiError> {
        if n == 1 {
            return self.move_disk(source, target, observer);
        }

        self.solve_recursive(n - 1, source, spare, target, observer)?;
        self.move_disk(source, target, observer)?;
        self.solve_recursive(n - 1, spare, target, source, observer)
    }

    /// Move the top disk of `from` onto `to`
    pub fn move_disk(
        &mut self,
        from: PegLabel,
        to: PegLabel,
        observer: &mut dyn MoveObserver,
    ) -> Result<(), HanoiError> {
        let disk = self.pegs[from.index()].pop()?;

        if let Ok(&onto) = self.pegs[to.index()].peek() {
            if onto < disk {
                // Put it back so the pegs stay consistent
                self.pegs[from.index()].push(disk)?;
                return Err(HanoiError::IllegalMove {
                    disk,
                    onto,
                    from,
                    to,
                });
            }
        }

        if let Err(e) = self.pegs[to.index()].push(disk) {
            self.pegs[from.index()].push(disk)?;
            return Err(e.into());
        }

        self.moves += 1;
        *self.disk_moves.entry(disk).or_insert(0) += 1;

        let record = MoveRecord {
            ordinal: self.moves,
            disk,
            from,
            to,
        };
        debug!(ordinal = record.ordinal, "{}", record);

        self.take_snapshot(Some(record))?;
        observer.on_move(&record, self)?;
        Ok(())
    }

    /// Record the current pegs in history, if enabled
    fn take_snapshot(&mut self, last_move: Option<MoveRecord>) -> Result<(), HanoiError> {
        let Some(history) = self.history.as_mut() else {
            return Ok(());
        };

        let snapshot = Snapshot {
            pegs: PegLabel::ALL.map(|label| self.pegs[label.index()].snapshot().to_vec()),
            last_move,
            move_count: self.moves,
        };

        history
            .push(snapshot)
            .map_err(|_| HanoiError::SnapshotLimitExceeded {
                current: history.memory_usage(),
                limit: history.memory_limit(),
            })?;

        self.history_position = history.len() - 1;
        Ok(())
    }

    // ========== History navigation ==========

    fn history_ref(&self) -> Result<&SnapshotManager, HanoiError> {
        self.history.as_ref().ok_or_else(|| HanoiError::HistoryBoundary {
            message: "History recording is disabled".to_string(),
        })
    }

    /// Step backward in history
    pub fn step_backward(&mut self) -> Result<(), HanoiError> {
        self.history_ref()?;
        if self.history_position == 0 {
            return Err(HanoiError::HistoryBoundary {
                message: "Already at the initial state".to_string(),
            });
        }
        self.history_position -= 1;
        Ok(())
    }

    /// Step forward in history
    pub fn step_forward(&mut self) -> Result<(), HanoiError> {
        let total = self.history_ref()?.len();
        if self.history_position + 1 >= total {
            return Err(HanoiError::HistoryBoundary {
                message: "No more moves recorded".to_string(),
            });
        }
        self.history_position += 1;
        Ok(())
    }

    /// Rewind to the initial state
    pub fn rewind_to_start(&mut self) -> Result<(), HanoiError> {
        if self.history_ref()?.is_empty() {
            return Err(HanoiError::HistoryBoundary {
                message: "No snapshots available".to_string(),
            });
        }
        self.history_position = 0;
        Ok(())
    }

    /// Jump to the last recorded state
    pub fn jump_to_end(&mut self) -> Result<(), HanoiError> {
        let total = self.history_ref()?.len();
        if total == 0 {
            return Err(HanoiError::HistoryBoundary {
                message: "No snapshots available".to_string(),
            });
        }
        self.history_position = total - 1;
        Ok(())
    }

    /// Snapshot at the current history position
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.history.as_ref()?.get(self.history_position)
    }

    /// Moves made up to the current history position, oldest first
    pub fn moves_so_far(&self) -> Vec<MoveRecord> {
        match &self.history {
            Some(history) => history.moves_through(self.history_position).copied().collect(),
            None => Vec::new(),
        }
    }

    /// Recorded history, if enabled
    pub fn history(&self) -> Option<&SnapshotManager> {
        self.history.as_ref()
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.history.as_ref().map_or(0, SnapshotManager::len)
    }

    // ========== Getters ==========

    pub fn num_disks(&self) -> u32 {
        self.num_disks
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    pub fn peg(&self, label: PegLabel) -> &BoundedStack<Disk> {
        &self.pegs[label.index()]
    }

    /// Bottom-to-top contents of pegs A, B, C
    pub fn peg_contents(&self) -> [&[Disk]; 3] {
        [
            self.pegs[0].snapshot(),
            self.pegs[1].snapshot(),
            self.pegs[2].snapshot(),
        ]
    }

    /// Number of times `disk` has been moved so far
    pub fn disk_move_count(&self, disk: Disk) -> u64 {
        self.disk_moves.get(&disk).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::observer::NullObserver;

    #[test]
    fn test_minimum_moves() {
        assert_eq!(minimum_moves(1), 1);
        assert_eq!(minimum_moves(3), 7);
        assert_eq!(minimum_moves(10), 1023);
        assert_eq!(minimum_moves(63), (1u64 << 63) - 1);
        assert_eq!(minimum_moves(64), u64::MAX);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for n in [0, -5, MAX_DISKS as i64 + 1] {
            assert!(matches!(
                HanoiSolver::new(n),
                Err(HanoiError::InvalidDiskCount { requested, .. }) if requested == n
            ));
        }
    }

    #[test]
    fn test_move_onto_smaller_disk_is_rejected() {
        let mut solver = HanoiSolver::new(2).unwrap();
        solver
            .move_disk(PegLabel::A, PegLabel::B, &mut NullObserver)
            .unwrap();

        let err = solver
            .move_disk(PegLabel::A, PegLabel::B, &mut NullObserver)
            .unwrap_err();
        assert!(matches!(err, HanoiError::IllegalMove { .. }));

        // Pegs unchanged by the rejected move
        assert_eq!(solver.peg(PegLabel::A).snapshot(), &[Disk::new(2)]);
        assert_eq!(solver.peg(PegLabel::B).snapshot(), &[Disk::new(1)]);
        assert_eq!(solver.moves(), 1);
    }

    #[test]
    fn test_move_from_empty_peg() {
        let mut solver = HanoiSolver::new(1).unwrap();
        let err = solver
            .move_disk(PegLabel::B, PegLabel::C, &mut NullObserver)
            .unwrap_err();
        assert!(matches!(err, HanoiError::Stack(_)));
        assert_eq!(solver.moves(), 0);
    }
}
