use crate::domain::{Task, TaskField, UiMode};
use crate::ops::{self, EditOutcome};
use crate::persistence::TaskStore;

/// Input form state for adding a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub description: String,
    pub editing_field: usize, // 0 = title, 1 = description
}

/// Form state for editing a single field of the selected task
#[derive(Debug, Clone)]
pub struct EditFormState {
    pub field: TaskField,
    pub value: String,
}

/// Main application state for the interactive interface
///
/// Holds a cached copy of the task list; every mutation goes through the
/// operations layer against the injected store and reloads the cache, so the
/// screen always reflects what is on disk.
pub struct AppState {
    store: Box<dyn TaskStore>,
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub edit_form: Option<EditFormState>,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(store: Box<dyn TaskStore>) -> Self {
        let tasks = store.load();
        Self {
            store,
            tasks,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            edit_form: None,
            status: None,
        }
    }

    /// Reload the cached list from the store after a mutation
    fn refresh(&mut self) {
        self.tasks = self.store.load();

        // Adjust selection if needed
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    /// Currently selected task, if any
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Open the action menu for the selected task
    pub fn open_task_menu(&mut self) {
        if self.selected_task().is_some() {
            self.ui_mode = UiMode::TaskMenu;
        }
    }

    pub fn close_task_menu(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Toggle completion for the selected task and persist
    pub fn toggle_selected(&mut self) {
        if self.selected_task().is_none() {
            return;
        }
        match ops::toggle(self.store.as_mut(), self.selected_index) {
            Ok(task) => {
                self.status = Some(if task.completed {
                    format!("Completed: {}", task.title)
                } else {
                    format!("Reopened: {}", task.title)
                });
            }
            Err(e) => self.status = Some(e.to_string()),
        }
        self.refresh();
    }

    /// Delete the selected task and persist
    pub fn delete_selected(&mut self) {
        if self.selected_task().is_none() {
            return;
        }
        match ops::delete(self.store.as_mut(), self.selected_index) {
            Ok(task) => self.status = Some(format!("Deleted: {}", task.title)),
            Err(e) => self.status = Some(e.to_string()),
        }
        self.ui_mode = UiMode::Normal;
        self.refresh();
    }

    /// Start adding a new task (opens the input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            title: String::new(),
            description: String::new(),
            editing_field: 0,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Toggle between editing fields in the add form (title -> description)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Add character to the add form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.title.push(c),
                _ => form.description.push(c),
            }
        }
    }

    /// Backspace in the add form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.title.pop();
                }
                _ => {
                    form.description.pop();
                }
            }
        }
    }

    /// Submit the add form, persisting the new task
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            match ops::add(self.store.as_mut(), &form.title, &form.description) {
                Ok(task) => self.status = Some(format!("Added: {}", task.title)),
                Err(e) => self.status = Some(e.to_string()),
            }
            self.ui_mode = UiMode::Normal;
            self.refresh();
        }
    }

    /// Cancel the add form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Open the single-field edit form, prefilled with the current value
    pub fn start_edit_field(&mut self, field: TaskField) {
        if let Some(task) = self.selected_task() {
            self.edit_form = Some(EditFormState {
                field,
                value: task.field(field).to_string(),
            });
            self.ui_mode = UiMode::EditingField;
        }
    }

    /// Add character to the edit form
    pub fn edit_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.edit_form {
            form.value.push(c);
        }
    }

    /// Backspace in the edit form
    pub fn edit_form_backspace(&mut self) {
        if let Some(form) = &mut self.edit_form {
            form.value.pop();
        }
    }

    /// Submit the edit form, persisting the field change if there is one
    pub fn submit_edit_form(&mut self) {
        if let Some(form) = self.edit_form.take() {
            match ops::edit_field(
                self.store.as_mut(),
                self.selected_index,
                form.field,
                &form.value,
            ) {
                Ok(EditOutcome::Updated(task)) => {
                    self.status = Some(format!("Updated {}: {}", form.field.label(), task.title));
                }
                Ok(EditOutcome::Unchanged) => self.status = Some("No changes".to_string()),
                Err(e) => self.status = Some(e.to_string()),
            }
            self.ui_mode = UiMode::Normal;
            self.refresh();
        }
    }

    /// Cancel the edit form and return to the task menu
    pub fn cancel_edit_form(&mut self) {
        self.edit_form = None;
        self.ui_mode = UiMode::TaskMenu;
    }
}
