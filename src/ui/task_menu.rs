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

/// Render the per-task action menu
pub fn render_task_menu(f: &mut Frame, app: &AppState, area: Rect) {
    let task = match app.selected_task() {
        Some(task) => task,
        None => return,
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the menu
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    // The task this menu acts on
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw(format!("  {} ", task.checkbox())),
        Span::styled(task.title.clone(), modal_title_style()),
    ]));
    lines.push(Line::raw(""));

    // Options
    lines.push(Line::from(vec![
        Span::styled("  [Enter/Space]", modal_title_style()),
        Span::raw(" Toggle completion"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [t]", modal_title_style()),
        Span::raw(" Edit title"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [d]", modal_title_style()),
        Span::raw(" Edit description"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [s]", modal_title_style()),
        Span::raw(" Edit state"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  [x]", modal_title_style()),
        Span::raw(" Delete task"),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Esc]", modal_title_style()),
        Span::raw(" Back"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Task Actions ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
