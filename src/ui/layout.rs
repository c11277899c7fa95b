//! Layout components (header, content split, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, SIGN_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the deal panel on the right
const SIDE_PANEL_WIDTH: u16 = 44;

/// Width of the language selector button
const SELECTOR_WIDTH: u16 = 10;

const CONTACT_LABEL: &str = "Contact via Facebook Messenger";

/// Areas of the sign-up screen
pub struct PageAreas {
    pub header: Rect,
    pub form: Rect,
    pub side: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, deal panel and status bar
pub fn create_layout(area: Rect) -> PageAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                  // Form
            Constraint::Length(SIDE_PANEL_WIDTH), // Deal panel
        ])
        .split(rows[1]);

    PageAreas {
        header: rows[0],
        form: columns[0],
        side: columns[1],
        status: rows[2],
    }
}

/// Draw the header: website link, language selector and contact control
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let contact_width = CONTACT_LABEL.len() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SELECTOR_WIDTH),
            Constraint::Length(contact_width),
        ])
        .split(area);

    let link = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Back to PayTrim website",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!(" ({})", app.page.config.website_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]);
    frame.render_widget(link, chunks[0]);

    let focus = app.page.focus;
    render_button(
        frame,
        chunks[1],
        &format!("< {} >", app.page.language.label()),
        focus == Focus::LanguageSelector,
    );
    render_button(frame, chunks[2], CONTACT_LABEL, focus == Focus::Contact);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let completeness = if app.page.form.is_complete() {
        Span::styled(" ● complete ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ incomplete ", Style::default().fg(Color::Yellow))
    };

    let spans = vec![
        completeness,
        Span::styled(
            get_focus_hints(app.page.focus),
            Style::default().fg(Color::Gray),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused control
fn get_focus_hints(focus: Focus) -> String {
    let common = format!("Tab:next  S-Tab:prev  {SIGN_SHORTCUT}:sign  Esc:quit");
    match focus {
        Focus::LanguageSelector => format!("←/→:language  {common}"),
        Focus::Contact => common,
        Focus::Field(_) => format!("Bksp:delete  {CLEAR_SHORTCUT}:clear  {common}"),
        Focus::SignButton => format!("Enter:sign  {common}"),
    }
}
