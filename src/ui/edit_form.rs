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

/// Render the single-field edit form
pub fn render_edit_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.edit_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("New {}:", form.field.label())));

        let value_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.value, modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]);
        lines.push(value_line);
        lines.push(Line::raw(""));

        // Instructions
        lines.push(Line::raw("Enter to submit  ·  Esc to cancel"));

        let title = format!(" Edit {} ", form.field.label());
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
