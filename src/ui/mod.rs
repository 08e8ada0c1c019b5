pub mod details_pane;
pub mod edit_form;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod status_bar;
pub mod styles;
pub mod task_menu;

use crate::app::AppState;
use crate::domain::UiMode;
use details_pane::render_details_pane;
use edit_form::render_edit_form;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use status_bar::render_status_bar;
use task_menu::render_task_menu;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);

    // Render status bar
    render_status_bar(f, app, layout.status_area);

    // Render task action menu if open
    if app.ui_mode == UiMode::TaskMenu {
        render_task_menu(f, app, size);
    }

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }

    // Render edit form if active
    if app.edit_form.is_some() {
        render_edit_form(f, app, size);
    }
}
