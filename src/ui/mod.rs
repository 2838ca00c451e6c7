//! UI module for rendering the TUI

mod components;
pub mod forms;
mod layout;
mod submitted;

use crate::app::App;
use crate::state::FormPhase;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.form.phase() {
        FormPhase::Editing | FormPhase::Submitting => forms::draw_form(frame, main_area, app),
        FormPhase::Submitted => submitted::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
