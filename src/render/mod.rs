//! Text rendering of peg state
//!
//! [`render_state`] lays the three towers out side by side, top of each peg
//! first, padding short pegs with placeholder slots:
//!
//! ```text
//!  =================================
//!    ===         |          |
//!   =====        |          |
//!  =======       |          |
//!  =======    =======    =======
//!     A          B          C
//!  =================================
//! ```
//!
//! [`TextRenderer`] is a [`MoveObserver`] that writes the move line and the
//! rendered state to any [`Write`] after every move.

use crate::peg::{Disk, PegLabel};
use crate::snapshot::MoveRecord;
use crate::solver::constants::{PLACEHOLDER, TOWER_SPACING};
use crate::solver::{HanoiSolver, MoveObserver};
use std::io::{self, Write};

/// Peg rows from top to bottom, each with one optional disk per peg.
///
/// Every peg is padded with empty slots up to `height` rows.
pub fn levels(pegs: [&[Disk]; 3], height: usize) -> Vec<[Option<Disk>; 3]> {
    (0..height)
        .rev()
        .map(|row| pegs.map(|peg| peg.get(row).copied()))
        .collect()
}

/// Column width needed to draw the largest of `num_disks` disks
pub fn column_width(num_disks: u32) -> usize {
    Disk::new(num_disks).width()
}

/// Draw one slot of a tower, centered in a column of `width` characters
pub fn slot(disk: Option<Disk>, width: usize) -> String {
    match disk {
        Some(disk) => {
            let padding = " ".repeat(width.saturating_sub(disk.width()) / 2);
            format!("{padding}{}{padding}", "=".repeat(disk.width()))
        }
        None => {
            let padding = " ".repeat((width - 1) / 2);
            format!("{padding}{}{padding}", PLACEHOLDER)
        }
    }
}

/// Render the three towers as text lines
pub fn render_state(pegs: [&[Disk]; 3], num_disks: u32) -> Vec<String> {
    let width = column_width(num_disks);
    let spacing = " ".repeat(TOWER_SPACING);
    let total_width = (width + TOWER_SPACING) * 3;
    let rule = format!(" {}", "=".repeat(total_width));

    let mut lines = Vec::with_capacity(num_disks as usize + 4);
    lines.push(rule.clone());

    for row in levels(pegs, num_disks as usize) {
        let cells: Vec<String> = row.iter().map(|disk| slot(*disk, width)).collect();
        lines.push(format!(" {}", cells.join(spacing.as_str())));
    }

    let base = "=".repeat(width);
    lines.push(format!(" {}", [base.as_str(); 3].join(spacing.as_str())));

    let label_padding = " ".repeat((width - 1) / 2);
    let labels: Vec<String> = PegLabel::ALL
        .iter()
        .map(|label| format!("{label_padding}{label}{label_padding}"))
        .collect();
    lines.push(format!(" {}", labels.join(spacing.as_str())));

    lines.push(rule);
    lines
}

/// Observer writing a move-by-move transcript with rendered towers
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_state(&mut self, solver: &HanoiSolver) -> io::Result<()> {
        writeln!(self.out, "\nCurrent State:")?;
        for line in render_state(solver.peg_contents(), solver.num_disks()) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}

impl<W: Write> MoveObserver for TextRenderer<W> {
    fn on_start(&mut self, solver: &HanoiSolver) -> io::Result<()> {
        writeln!(
            self.out,
            "\nSolving Tower of Hanoi with {} disks",
            solver.num_disks()
        )?;
        writeln!(self.out, "Initial state:")?;
        self.write_state(solver)
    }

    fn on_move(&mut self, record: &MoveRecord, solver: &HanoiSolver) -> io::Result<()> {
        writeln!(self.out, "{}", record)?;
        self.write_state(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disks(sizes: &[u32]) -> Vec<Disk> {
        sizes.iter().copied().map(Disk::new).collect()
    }

    #[test]
    fn test_levels_pad_and_reverse() {
        let a = disks(&[3, 2]);
        let c = disks(&[1]);
        let rows = levels([&a, &[], &c], 3);

        assert_eq!(rows[0], [None, None, None]);
        assert_eq!(rows[1], [Some(Disk::new(2)), None, None]);
        assert_eq!(rows[2], [Some(Disk::new(3)), None, Some(Disk::new(1))]);
    }

    #[test]
    fn test_slot_centering() {
        assert_eq!(slot(Some(Disk::new(1)), 7), "  ===  ");
        assert_eq!(slot(Some(Disk::new(3)), 7), "=======");
        assert_eq!(slot(None, 7), "   |   ");
    }

    #[test]
    fn test_render_initial_three_disks() {
        let a = disks(&[3, 2, 1]);
        let lines = render_state([&a, &[], &[]], 3);

        let rule = format!(" {}", "=".repeat(33));
        let expected = vec![
            rule.clone(),
            "   ===         |          |   ".to_string(),
            "  =====        |          |   ".to_string(),
            " =======       |          |   ".to_string(),
            " =======    =======    =======".to_string(),
            "    A          B          C   ".to_string(),
            rule,
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_rows_have_uniform_width() {
        let a = disks(&[4, 1]);
        let b = disks(&[3]);
        let c = disks(&[2]);
        let lines = render_state([&a, &b, &c], 4);

        let row_width = lines[1].chars().count();
        for line in &lines[1..lines.len() - 1] {
            assert_eq!(line.chars().count(), row_width, "line {:?}", line);
        }
    }

    #[test]
    fn test_renderer_transcript_for_one_disk() {
        let mut solver = HanoiSolver::new(1).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        solver.solve(&mut renderer).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Solving Tower of Hanoi with 1 disks");
        assert_eq!(lines[2], "Initial state:");
        assert_eq!(lines[4], "Current State:");
        assert_eq!(lines[6], " ===     |      | ");
        assert!(lines.contains(&"Move disk 1 from A to C"));
        assert!(lines.contains(&"  |      |     ==="));
        assert_eq!(text.matches("Current State:").count(), 2);
    }
}
