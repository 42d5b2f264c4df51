//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`towers`]: The three pegs at the current history position
//! - [`moves`]: Log of moves made up to the current position
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and borrowed solver state.

pub mod moves;
pub mod status;
pub mod towers;

pub use moves::render_moves_pane;
pub use status::render_status_bar;
pub use towers::render_towers_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane depending on focus
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
