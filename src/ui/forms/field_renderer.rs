//! Field rendering utilities for forms

use crate::state::{FieldId, InputStatus, ValidatedField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border colour for a field's status indicator
pub fn status_color(status: Option<InputStatus>, is_active: bool) -> Color {
    match status {
        Some(InputStatus::Correct) => Color::Green,
        Some(InputStatus::Error) => Color::Red,
        None if is_active => Color::Cyan,
        None => Color::DarkGray,
    }
}

/// Draw one sign-up field with its label, type hint and status colour
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    id: FieldId,
    field: &ValidatedField<String>,
    is_active: bool,
) {
    let status = field.status();
    let border_style = Style::default().fg(status_color(status, is_active));

    let value = field.value();
    let value_span = if value.is_empty() && !is_active && !field.is_touched() {
        Span::styled("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.as_str())
    };
    let cursor = if is_active { "▌" } else { "" };

    let mut spans = vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ];
    if status == Some(InputStatus::Correct) {
        spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
    }

    let title_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" {} ", id.label()), title_style),
            Span::styled(
                format!("[{}] ", id.input_type().label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
