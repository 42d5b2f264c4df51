// Integration tests for the Hanoi solver

use hanoi_tty::peg::{is_well_ordered, Disk, PegLabel};
use hanoi_tty::snapshot::MoveRecord;
use hanoi_tty::solver::{
    minimum_moves, HanoiError, HanoiSolver, MoveObserver, NullObserver, SolveState,
};
use std::io;

/// Observer that records every move and checks peg ordering after each one
#[derive(Default)]
struct CheckingObserver {
    started: bool,
    moves: Vec<MoveRecord>,
    violations: Vec<u64>,
}

impl MoveObserver for CheckingObserver {
    fn on_start(&mut self, solver: &HanoiSolver) -> io::Result<()> {
        self.started = true;
        assert_eq!(solver.moves(), 0);
        assert_eq!(solver.state(), SolveState::Solving);
        Ok(())
    }

    fn on_move(&mut self, record: &MoveRecord, solver: &HanoiSolver) -> io::Result<()> {
        // The pegs are already updated when the event fires
        assert_eq!(solver.moves(), record.ordinal);
        assert_eq!(solver.peg(record.to).peek(), Ok(&record.disk));

        if !solver.peg_contents().iter().all(|peg| is_well_ordered(peg)) {
            self.violations.push(record.ordinal);
        }
        self.moves.push(*record);
        Ok(())
    }
}

fn disks(sizes: &[u32]) -> Vec<Disk> {
    sizes.iter().copied().map(Disk::new).collect()
}

#[test]
fn test_initial_state() {
    let solver = HanoiSolver::new(4).expect("Solver creation failed");

    assert_eq!(solver.num_disks(), 4);
    assert_eq!(solver.state(), SolveState::Unsolved);
    assert_eq!(solver.peg(PegLabel::A).snapshot(), disks(&[4, 3, 2, 1]).as_slice());
    assert!(solver.peg(PegLabel::B).is_empty());
    assert!(solver.peg(PegLabel::C).is_empty());

    for label in PegLabel::ALL {
        assert_eq!(solver.peg(label).capacity(), 4);
        assert_eq!(solver.peg(label).label(), label.to_string());
    }
}

#[test]
fn test_move_count_is_minimum() {
    for n in 1..=12u32 {
        let mut solver = HanoiSolver::new(n as i64).expect("Solver creation failed");
        solver.solve(&mut NullObserver).expect("Solve failed");

        assert_eq!(solver.moves(), minimum_moves(n), "n = {}", n);
        assert_eq!(solver.moves(), (1u64 << n) - 1, "n = {}", n);
        assert_eq!(solver.state(), SolveState::Solved);
    }
}

#[test]
fn test_all_disks_end_on_target() {
    for n in 1..=10u32 {
        let mut solver = HanoiSolver::new(n as i64).expect("Solver creation failed");
        solver.solve(&mut NullObserver).expect("Solve failed");

        let expected: Vec<Disk> = (1..=n).rev().map(Disk::new).collect();
        assert_eq!(solver.peg(PegLabel::C).snapshot(), expected.as_slice());
        assert!(solver.peg(PegLabel::A).is_empty());
        assert!(solver.peg(PegLabel::B).is_empty());
    }
}

#[test]
fn test_ordering_holds_after_every_move() {
    let mut observer = CheckingObserver::default();
    let mut solver = HanoiSolver::new(8).expect("Solver creation failed");
    solver.solve(&mut observer).expect("Solve failed");

    assert!(observer.started);
    assert_eq!(observer.moves.len(), 255);
    assert!(
        observer.violations.is_empty(),
        "ordering violated after moves {:?}",
        observer.violations
    );
}

#[test]
fn test_single_disk() {
    let mut observer = CheckingObserver::default();
    let mut solver = HanoiSolver::new(1).expect("Solver creation failed");
    solver.solve(&mut observer).expect("Solve failed");

    assert_eq!(solver.moves(), 1);
    assert_eq!(
        observer.moves,
        vec![MoveRecord {
            ordinal: 1,
            disk: Disk::new(1),
            from: PegLabel::A,
            to: PegLabel::C,
        }]
    );
}

#[test]
fn test_three_disk_move_sequence() {
    let mut observer = CheckingObserver::default();
    let mut solver = HanoiSolver::new(3).expect("Solver creation failed");
    solver.solve(&mut observer).expect("Solve failed");

    use PegLabel::{A, B, C};
    let expected: [(u32, PegLabel, PegLabel); 7] = [
        (1, A, C),
        (2, A, B),
        (1, C, B),
        (3, A, C),
        (1, B, A),
        (2, B, C),
        (1, A, C),
    ];

    let actual: Vec<(u32, PegLabel, PegLabel)> = observer
        .moves
        .iter()
        .map(|m| (m.disk.size(), m.from, m.to))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(solver.moves(), 7);

    let lines: Vec<String> = observer.moves.iter().map(|m| m.to_string()).collect();
    assert_eq!(lines[0], "Move disk 1 from A to C");
    assert_eq!(lines[3], "Move disk 3 from A to C");
}

#[test]
fn test_disk_move_counts() {
    let mut solver = HanoiSolver::new(6).expect("Solver creation failed");
    solver.solve(&mut NullObserver).expect("Solve failed");

    // Disk k moves 2^(n-k) times
    for k in 1..=6u32 {
        assert_eq!(solver.disk_move_count(Disk::new(k)), 1u64 << (6 - k), "disk {}", k);
    }
    assert_eq!(solver.disk_move_count(Disk::new(7)), 0);
}

#[test]
fn test_solve_twice_is_rejected() {
    let mut solver = HanoiSolver::new(3).expect("Solver creation failed");
    solver.solve(&mut NullObserver).expect("Solve failed");

    let err = solver.solve(&mut NullObserver).unwrap_err();
    assert!(matches!(err, HanoiError::AlreadySolved));

    // Pegs untouched by the rejected call
    assert_eq!(solver.moves(), 7);
    assert_eq!(solver.peg(PegLabel::C).len(), 3);
    assert_eq!(solver.state(), SolveState::Solved);
}

#[test]
fn test_invalid_disk_counts() {
    for n in [0, -1, -5, 65, i64::MAX, i64::MIN] {
        let err = HanoiSolver::new(n).unwrap_err();
        assert!(
            matches!(err, HanoiError::InvalidDiskCount { requested, max: 64 } if requested == n),
            "n = {}",
            n
        );
    }
    assert!(HanoiSolver::new(64).is_ok());
}

#[test]
fn test_observer_error_aborts_solve() {
    struct FailingObserver;

    impl MoveObserver for FailingObserver {
        fn on_move(&mut self, record: &MoveRecord, _solver: &HanoiSolver) -> io::Result<()> {
            if record.ordinal == 2 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            Ok(())
        }
    }

    let mut solver = HanoiSolver::new(3).expect("Solver creation failed");
    let err = solver.solve(&mut FailingObserver).unwrap_err();

    assert!(matches!(err, HanoiError::Render(_)));
    assert_eq!(solver.moves(), 2);
}
