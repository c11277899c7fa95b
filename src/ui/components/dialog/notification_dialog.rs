//! Sign result dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notification, NotificationKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the outcome of the sign action as a modal overlay
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let (title, color) = match notification.kind {
        NotificationKind::Success => ("Signed", Color::Green),
        NotificationKind::Failure => ("Error", Color::Red),
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: color,
            border_color: color,
            message: &notification.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
