//! Towers pane rendering
//!
//! Draws the pegs of the current snapshot using the same layout as the text
//! renderer, with each disk colored by size and the peg that received the
//! last move highlighted.

use super::border_style;
use crate::peg::PegLabel;
use crate::render::{column_width, levels, slot};
use crate::snapshot::Snapshot;
use crate::solver::constants::TOWER_SPACING;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the towers pane
pub fn render_towers_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    num_disks: u32,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Towers ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no history recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let width = column_width(num_disks);
    let spacing = " ".repeat(TOWER_SPACING);
    let last_to = snapshot.last_move.map(|m| m.to);
    let last_from = snapshot.last_move.map(|m| m.from);

    let mut lines = Vec::with_capacity(num_disks as usize + 4);

    // Headline for the move that produced this state
    let headline = match &snapshot.last_move {
        Some(record) => Line::from(vec![
            Span::styled(
                format!("#{} ", record.ordinal),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                record.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "Initial state",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };
    lines.push(headline);
    lines.push(Line::default());

    let pegs = [
        snapshot.peg(PegLabel::A),
        snapshot.peg(PegLabel::B),
        snapshot.peg(PegLabel::C),
    ];

    for row in levels(pegs, num_disks as usize) {
        let mut spans = Vec::with_capacity(5);
        for (index, disk) in row.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(spacing.clone()));
            }
            let style = match disk {
                Some(disk) => Style::default().fg(DEFAULT_THEME.disk_color(disk.size())),
                None => Style::default().fg(DEFAULT_THEME.comment),
            };
            spans.push(Span::styled(slot(*disk, width), style));
        }
        lines.push(Line::from(spans));
    }

    // Bases and labels
    let base = "=".repeat(width);
    let label_padding = " ".repeat((width - 1) / 2);
    let mut base_spans = Vec::with_capacity(5);
    let mut label_spans = Vec::with_capacity(5);

    for label in PegLabel::ALL {
        if label != PegLabel::A {
            base_spans.push(Span::raw(spacing.clone()));
            label_spans.push(Span::raw(spacing.clone()));
        }

        let label_style = if Some(label) == last_to {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else if Some(label) == last_from {
            Style::default().fg(DEFAULT_THEME.secondary)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        base_spans.push(Span::styled(
            base.clone(),
            Style::default().fg(DEFAULT_THEME.border_normal),
        ));
        label_spans.push(Span::styled(
            format!("{label_padding}{label}{label_padding}"),
            label_style,
        ));
    }

    lines.push(Line::from(base_spans));
    lines.push(Line::from(label_spans));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
