/// Editable field of a task, used by field edits in both interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    State,
}

impl TaskField {
    /// Display name used in form titles and status messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::State => "state",
        }
    }
}

/// UI mode for the interactive interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    TaskMenu,
    EditingField, // Editing one field of the task selected in the menu
}
