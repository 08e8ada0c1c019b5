use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        // Title field
        lines.push(Line::raw(""));
        let title_label = if form.editing_field == 0 {
            "Title: (editing)"
        } else {
            "Title:"
        };
        lines.push(Line::raw(title_label));

        let title_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.title, modal_title_style()),
            if form.editing_field == 0 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(title_line);
        lines.push(Line::raw(""));

        // Description field
        let description_label = if form.editing_field == 1 {
            "Description: (editing)"
        } else {
            "Description:"
        };
        lines.push(Line::raw(description_label));

        let description_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.description, modal_title_style()),
            if form.editing_field == 1 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(description_line);
        lines.push(Line::raw(""));

        // Instructions
        lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
