//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod side_description;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    forms::draw_sign_up_form(frame, areas.form, app);
    side_description::draw(frame, areas.side, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Sign result is modal and drawn last
    if let Some(notification) = app.page.notification() {
        components::render_notification_dialog(frame, notification);
    }
}
