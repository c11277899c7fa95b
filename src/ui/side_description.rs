//! Deal description panel with the sign button

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::forms::INTRO_TEXT;
use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const SIGN_LABEL: &str = "View agreement and sign";

/// One fixed row of the deal description
struct DescriptionItem {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
}

const DESCRIPTION_ITEMS: [DescriptionItem; 2] = [
    DescriptionItem {
        icon: "E",
        label: "PRICE:",
        value: "29 öre + 0.29%\" Interchange fee",
    },
    DescriptionItem {
        icon: "T",
        label: "PERIOD OF NOTICE:",
        // Digit zero: there is no notice period
        value: "0 days",
    },
];

/// Draw the deal panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.page.focus == Focus::SignButton;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .horizontal_margin(1)
        .split(inner);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Here’s your deal.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(INTRO_TEXT, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    for item in &DESCRIPTION_ITEMS {
        content.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", item.icon),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(item.label, Style::default().fg(Color::DarkGray)),
        ]));
        content.push(Line::from(format!("    {}", item.value)));
        content.push(Line::from(""));
    }

    let description = Paragraph::new(content).wrap(Wrap { trim: false });
    frame.render_widget(description, chunks[0]);

    render_action_button(frame, chunks[1], SIGN_LABEL, is_focused, Color::Magenta);
}
