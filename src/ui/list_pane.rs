use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, completed_style, default_style, selected_style, state_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" Tasks ({}) ", date);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.tasks.is_empty() {
        let empty = Paragraph::new("No pending tasks. Press 'a' to add one.").block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);

    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: [ ] Buy milk (waiting)
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    // Checkbox
    spans.push(Span::raw(format!("{} ", task.checkbox())));

    // Title, struck through once completed
    if task.completed {
        spans.push(Span::styled(task.title.clone(), completed_style()));
    } else {
        spans.push(Span::raw(task.title.clone()));
    }

    // State badge (if any)
    if !task.state.is_empty() {
        spans.push(Span::styled(format!(" ({})", task.state), state_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_line() {
        let task = Task::new("Buy milk".to_string(), String::new());
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[ ]"));
        assert!(line_str.contains("Buy milk"));
    }

    #[test]
    fn test_completed_task_line() {
        let mut task = Task::new("Buy milk".to_string(), String::new());
        task.completed = true;
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[x]"));
    }

    #[test]
    fn test_state_badge() {
        let mut task = Task::new("Buy milk".to_string(), String::new());
        task.state = "waiting".to_string();
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("(waiting)"));
    }
}
