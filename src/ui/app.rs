//! Main TUI application state and logic

use crate::solver::{HanoiError, HanoiSolver};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Towers,
    Moves,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Towers => FocusedPane::Moves,
            FocusedPane::Moves => FocusedPane::Towers,
        }
    }
}

/// The main application state
pub struct App {
    /// Solver whose recorded history is being played back
    pub solver: HanoiSolver,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset of the move log
    pub moves_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between steps in play mode
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a solver's history
    pub fn new(solver: HanoiSolver, play_interval: Duration) -> Self {
        App {
            solver,
            focused_pane: FocusedPane::Towers,
            moves_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                if self.solver.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.moves_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Towers (left) | Move log (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        super::panes::render_towers_pane(
            frame,
            columns[0],
            self.solver.current_snapshot(),
            self.solver.num_disks(),
            self.focused_pane == FocusedPane::Towers,
        );

        super::panes::render_moves_pane(
            frame,
            columns[1],
            self.solver.history(),
            self.solver.history_position(),
            self.focused_pane == FocusedPane::Moves,
            &mut self.moves_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.solver.history_position(),
            self.solver.total_snapshots(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.solver.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} move(s)", stepped);
                self.moves_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.solver.step_backward();
                self.report_step(result, "Stepped backward");
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.solver.step_forward();
                self.report_step(result, "Stepped forward");
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Moves {
                    self.moves_scroll = self.moves_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Moves {
                    self.moves_scroll = self.moves_scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.play_interval)
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let result = self.solver.jump_to_end();
                self.report_step(result, "Jumped to end");
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let result = self.solver.rewind_to_start();
                self.report_step(result, "Jumped to start");
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), HanoiError>, success: &str) {
        match result {
            Ok(()) => {
                self.status_message = success.to_string();
                // Auto-scroll move log to bottom
                self.moves_scroll = usize::MAX;
            }
            Err(HanoiError::HistoryBoundary { message }) => {
                self.status_message = message;
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
