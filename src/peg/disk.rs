// Disk sizes and peg identities

use std::fmt;

/// A disk, identified by its relative size (1 = smallest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(u32);

impl Disk {
    pub fn new(size: u32) -> Self {
        Disk(size)
    }

    pub fn size(self) -> u32 {
        self.0
    }

    /// Width in characters when drawn as a bar of `=`
    pub fn width(self) -> usize {
        self.0 as usize * 2 + 1
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the three pegs a stack represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegLabel {
    A,
    B,
    C,
}

impl PegLabel {
    /// All labels in display order (left to right)
    pub const ALL: [PegLabel; 3] = [PegLabel::A, PegLabel::B, PegLabel::C];

    /// Position of this peg in display order
    pub fn index(self) -> usize {
        match self {
            PegLabel::A => 0,
            PegLabel::B => 1,
            PegLabel::C => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            PegLabel::A => 'A',
            PegLabel::B => 'B',
            PegLabel::C => 'C',
        }
    }
}

impl fmt::Display for PegLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
