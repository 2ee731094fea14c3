//! UI module for rendering the TUI

mod field_renderer;
mod layout;
mod survey;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (survey_area, status_area) = layout::create_layout(area);

    survey::draw(frame, survey_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
