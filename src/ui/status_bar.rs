use crate::app::AppState;
use crate::ui::styles::status_style;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Render the status bar with the outcome of the last operation
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let message = app.status.as_deref().unwrap_or("");

    let paragraph = Paragraph::new(format!(" {}", message)).style(status_style());
    f.render_widget(paragraph, area);
}
