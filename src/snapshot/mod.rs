// Snapshot management for move-by-move playback

use crate::peg::{Disk, PegLabel};
use std::fmt;
use std::mem;

/// A single disk transfer, numbered from 1 in the order it was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub ordinal: u64,
    pub disk: Disk,
    pub from: PegLabel,
    pub to: PegLabel,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

/// Peg contents after a move (or before the first one)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Bottom-to-top contents of pegs A, B, C
    pub pegs: [Vec<Disk>; 3],
    /// The move that produced this state; `None` for the initial state
    pub last_move: Option<MoveRecord>,
    pub move_count: u64,
}

impl Snapshot {
    pub fn peg(&self, label: PegLabel) -> &[Disk] {
        &self.pegs[label.index()]
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let disks: usize = self.pegs.iter().map(Vec::len).sum();
        mem::size_of::<Self>() + disks * mem::size_of::<Disk>()
    }
}

/// Manages the recorded history of a solve
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Moves recorded up to and including `index`, oldest first
    pub fn moves_through(&self, index: usize) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.snapshots
            .iter()
            .take(index.saturating_add(1))
            .filter_map(|s| s.last_move.as_ref())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
