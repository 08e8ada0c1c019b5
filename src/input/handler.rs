use crate::app::AppState;
use crate::domain::{TaskField, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_add_form_mode(app, key),
        UiMode::TaskMenu => handle_task_menu_mode(app, key),
        UiMode::EditingField => handle_edit_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Open the action menu for the selected task
        KeyCode::Enter => {
            app.open_task_menu();
            Ok(false)
        }

        // Quick-toggle completion without opening the menu
        KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the add form
fn handle_add_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Switch between title and description
        KeyCode::Tab => {
            app.input_form_toggle_field();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the per-task action menu
fn handle_task_menu_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            app.close_task_menu();
            Ok(false)
        }

        // Edit a field
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.start_edit_field(TaskField::Title);
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.start_edit_field(TaskField::Description);
            Ok(false)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_edit_field(TaskField::State);
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Back to the list
        KeyCode::Esc => {
            app.close_task_menu();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the single-field edit form
fn handle_edit_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_edit_form();
            Ok(false)
        }

        // Back to the task menu
        KeyCode::Esc => {
            app.cancel_edit_form();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.edit_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.edit_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::persistence::MemoryStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        let store = MemoryStore::with_tasks(vec![
            Task::new("Test task".to_string(), String::new()),
            Task::new("Second task".to_string(), String::new()),
        ]);
        AppState::new(Box::new(store))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();

        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();

        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);

        let should_quit = handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        // Press 'a' to open the form
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());

        // Type title
        handle_key(&mut app, key(KeyCode::Char('N'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('w'))).unwrap();

        // Submit with Enter
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.tasks.len(), initial_count + 1);
        assert_eq!(app.tasks[initial_count].title, "New");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_space_quick_toggles() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.tasks[0].completed);

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(!app.tasks[0].completed);
    }

    #[test]
    fn test_menu_delete_flow() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::TaskMenu);

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.tasks.len(), initial_count - 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_menu_toggle_returns_to_list() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.tasks[0].completed);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_menu_edit_state() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingField);

        for c in "urgent".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.tasks[0].state, "urgent");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_esc_backs_out_of_menu() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::TaskMenu);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 2);
    }
}
