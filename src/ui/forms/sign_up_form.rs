//! Sign-up form panel

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const INTRO_TEXT: &str = "To get started with PayTrim we will need some information from you.";

/// Draw the brand header, intro copy and the four fields
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.page.focus, Focus::Field(_));
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

    let mut constraints = vec![
        Constraint::Length(1), // Brand row
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Heading
        Constraint::Length(2), // Intro
    ];
    constraints.extend(FieldId::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    draw_brand_row(frame, chunks[0], app);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Get started with paytrim",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[2]);

    let intro = Paragraph::new(INTRO_TEXT)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[3]);

    for (idx, id) in FieldId::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[4 + idx],
            *id,
            app.page.form.field(*id),
            app.page.focus == Focus::Field(*id),
        );
    }
}

/// Brand mark on the left, "Sign-in instead" link on the right
fn draw_brand_row(frame: &mut Frame, area: Rect, app: &App) {
    let config = &app.page.config;
    let sign_in = format!("Sign-in instead ({})", config.sign_in_url);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(sign_in.chars().count() as u16),
        ])
        .split(area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            config.brand_name.as_str(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", config.logo_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(brand, chunks[0]);

    let link = Paragraph::new(Span::styled(
        sign_in,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    ));
    frame.render_widget(link, chunks[1]);
}
