use crate::domain::{Task, TaskField};
use crate::persistence::TaskStore;
use thiserror::Error;

/// Validation failure for a task operation
///
/// Messages are operator-facing and printed verbatim by both interfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpError {
    #[error("cannot add empty task")]
    EmptyTitle,

    #[error("invalid index")]
    InvalidIndex,

    #[error("cannot set empty {0}")]
    EmptyValue(&'static str),
}

/// Result of a field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Field changed and the store was written
    Updated(Task),
    /// New value matched the old one; nothing was written
    Unchanged,
}

/// Append a new task with the given title and description
///
/// Both inputs are trimmed; an empty title is rejected before anything is
/// loaded or written.
pub fn add(store: &mut dyn TaskStore, title: &str, description: &str) -> Result<Task, OpError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(OpError::EmptyTitle);
    }

    let mut tasks = store.load();
    let task = Task::new(title.to_string(), description.trim().to_string());
    tasks.push(task.clone());
    store.save(&tasks);
    Ok(task)
}

/// Current task sequence in insertion order
pub fn list(store: &dyn TaskStore) -> Vec<Task> {
    store.load()
}

/// Flip the completion flag of the task at a 0-based index
pub fn toggle(store: &mut dyn TaskStore, index: usize) -> Result<Task, OpError> {
    let mut tasks = store.load();
    let task = tasks.get_mut(index).ok_or(OpError::InvalidIndex)?;

    task.completed = !task.completed;
    let updated = task.clone();
    store.save(&tasks);
    Ok(updated)
}

/// Overwrite one field of the task at a 0-based index
///
/// A trimmed value equal to the current one returns `Unchanged` and leaves
/// the store untouched.
pub fn edit_field(
    store: &mut dyn TaskStore,
    index: usize,
    field: TaskField,
    value: &str,
) -> Result<EditOutcome, OpError> {
    let mut tasks = store.load();
    let task = tasks.get_mut(index).ok_or(OpError::InvalidIndex)?;

    let value = value.trim();
    if value.is_empty() {
        return Err(OpError::EmptyValue(field.label()));
    }
    if task.field(field) == value {
        return Ok(EditOutcome::Unchanged);
    }

    task.set_field(field, value.to_string());
    let updated = task.clone();
    store.save(&tasks);
    Ok(EditOutcome::Updated(updated))
}

/// Remove the task at a 0-based index; later entries shift down by one
pub fn delete(store: &mut dyn TaskStore, index: usize) -> Result<Task, OpError> {
    let mut tasks = store.load();
    if index >= tasks.len() {
        return Err(OpError::InvalidIndex);
    }

    let removed = tasks.remove(index);
    store.save(&tasks);
    Ok(removed)
}
