//! Move log pane rendering

use super::border_style;
use crate::snapshot::SnapshotManager;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the move log pane.
///
/// Snapshot 0 is the initial state, so snapshots `1..=position` each carry
/// one move; only the visible window of them is materialized.
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    history: Option<&SnapshotManager>,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Moves ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let total_items = match history {
        Some(_) => position,
        None => 0,
    };

    let Some(history) = history.filter(|_| total_items > 0) else {
        let paragraph = Paragraph::new("(no moves yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let ordinal_width = total_items.to_string().len();
    let visible_items: Vec<ListItem> = (*scroll_offset..total_items)
        .take(visible_height)
        .filter_map(|i| history.get(i + 1)?.last_move)
        .map(|record| {
            let is_latest = record.ordinal as usize == total_items;
            let text_style = if is_latest {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$}. ", record.ordinal, width = ordinal_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(record.to_string(), text_style),
            ]))
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
