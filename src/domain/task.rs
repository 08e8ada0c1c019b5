use super::enums::TaskField;
use serde::{Deserialize, Serialize};

/// A single to-do entry as stored in todos.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short one-line summary
    pub title: String,
    /// Longer free text, empty when unset
    #[serde(default)]
    pub description: String,
    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
    /// Free-form state label (e.g. "waiting", "blocked")
    #[serde(default)]
    pub state: String,
}

impl Task {
    pub fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            completed: false,
            state: String::new(),
        }
    }

    /// Checkbox marker for list output
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// Read the value of an editable field
    pub fn field(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
            TaskField::State => &self.state,
        }
    }

    /// Overwrite an editable field
    pub fn set_field(&mut self, field: TaskField, value: String) {
        match field {
            TaskField::Title => self.title = value,
            TaskField::Description => self.description = value,
            TaskField::State => self.state = value,
        }
    }
}
