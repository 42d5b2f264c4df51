//! Peg storage for the solver
//!
//! This module provides the storage primitives the solver moves disks between:
//! - [`disk`]: The [`Disk`] size newtype and [`PegLabel`] identities
//! - [`stack`]: [`BoundedStack`], a fixed-capacity LIFO container with a label
//!
//! # Ordering
//!
//! A peg holds disks strictly decreasing in size from bottom to top. The
//! stack itself does not enforce this; [`is_well_ordered`] is used by the
//! solver (and its tests) to check the invariant after each move.

pub mod disk;
pub mod stack;

pub use disk::{Disk, PegLabel};
pub use stack::{BoundedStack, StackError};

/// Check that a bottom-to-top slice of disks never places a larger disk on a
/// smaller one
pub fn is_well_ordered(disks: &[Disk]) -> bool {
    disks.windows(2).all(|pair| pair[0] > pair[1])
}
