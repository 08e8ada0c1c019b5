use crate::app::AppState;
use crate::ui::styles::{border_style, completed_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let task = match app.selected_task() {
        Some(task) => task,
        None => {
            let empty = Paragraph::new("No task selected").block(block);
            f.render_widget(empty, area);
            return;
        }
    };

    let mut lines = Vec::new();

    // Title
    lines.push(Line::from(vec![
        Span::styled("Title: ", title_style()),
        Span::raw(&task.title),
    ]));
    lines.push(Line::raw(""));

    // Completion
    let completed_text = if task.completed { "yes" } else { "no" };
    let completed_span = if task.completed {
        Span::styled(completed_text, completed_style())
    } else {
        Span::styled(completed_text, default_style())
    };
    lines.push(Line::from(vec![
        Span::styled("Completed: ", title_style()),
        completed_span,
    ]));

    // State
    lines.push(Line::from(vec![
        Span::styled("State: ", title_style()),
        if task.state.is_empty() {
            Span::styled("(none)", default_style())
        } else {
            Span::raw(&task.state)
        },
    ]));
    lines.push(Line::raw(""));

    // Description
    if !task.description.trim().is_empty() {
        lines.push(Line::from(Span::styled("Description:", title_style())));
        for desc_line in task.description.lines() {
            lines.push(Line::raw(format!("  {}", desc_line)));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Description: (empty)",
            default_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
