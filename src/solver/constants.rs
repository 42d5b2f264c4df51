// Constants for the Hanoi solver

/// Largest disk count accepted; 2^64 - 1 moves is the most a `u64` counter can hold
pub const MAX_DISKS: u32 = 64;

/// Default byte budget for the per-move snapshot history (256 MB)
pub const DEFAULT_HISTORY_LIMIT: usize = 256 * 1024 * 1024;

/// Marker drawn for an empty slot on a peg
pub const PLACEHOLDER: char = '|';

/// Blank columns between adjacent towers
pub const TOWER_SPACING: usize = 4;
