use crate::domain::Task;
use serde::Deserialize;

/// A task record as found on disk, covering every layout the file has been
/// written in. Variant order matters: records carrying a `title` must match
/// `Current` before the legacy fallback is tried.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawTask {
    /// Current four-field layout
    Current {
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        completed: bool,
        #[serde(default)]
        state: String,
    },
    /// Original layout: bare text plus a completion flag
    Legacy {
        text: String,
        #[serde(default)]
        completed: bool,
    },
}

/// Normalize a raw record into the current Task shape
pub fn migrate(raw: RawTask) -> Task {
    match raw {
        RawTask::Current {
            title,
            description,
            completed,
            state,
        } => Task {
            title,
            description,
            completed,
            state,
        },
        RawTask::Legacy { text, completed } => Task {
            title: text,
            description: String::new(),
            completed,
            state: String::new(),
        },
    }
}

/// Normalize a whole on-disk array, preserving order
pub fn migrate_all(raw: Vec<RawTask>) -> Vec<Task> {
    raw.into_iter().map(migrate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_legacy_record_migrates() {
        let raw: RawTask =
            serde_json::from_str(r#"{"text":"Water plants","completed":true}"#).unwrap();
        let task = migrate(raw);

        assert_eq!(task.title, "Water plants");
        assert_eq!(task.description, "");
        assert!(task.completed);
        assert_eq!(task.state, "");
    }

    #[test]
    fn test_current_record_passes_through() {
        let raw: RawTask = serde_json::from_str(
            r#"{"title":"Write report","description":"quarterly","completed":false,"state":"waiting"}"#,
        )
        .unwrap();
        let task = migrate(raw);

        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "quarterly");
        assert!(!task.completed);
        assert_eq!(task.state, "waiting");
    }

    #[test]
    fn test_migration_is_idempotent() {
        let raw: RawTask = serde_json::from_str(r#"{"text":"Once","completed":false}"#).unwrap();
        let migrated = migrate(raw);

        // A migrated record re-read from disk must come back unchanged
        let json = serde_json::to_string(&migrated).unwrap();
        let reread: RawTask = serde_json::from_str(&json).unwrap();
        let twice = migrate(reread);

        assert_eq!(migrated, twice);
    }

    #[test]
    fn test_mixed_array_preserves_order() {
        let raw: Vec<RawTask> = serde_json::from_str(
            r#"[
                {"text":"Old one","completed":false},
                {"title":"New one","description":"","completed":true,"state":""}
            ]"#,
        )
        .unwrap();
        let tasks = migrate_all(raw);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Old one");
        assert_eq!(tasks[1].title, "New one");
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_legacy_record_without_flag_defaults_to_pending() {
        let raw: RawTask = serde_json::from_str(r#"{"text":"No flag"}"#).unwrap();
        let task = migrate(raw);

        assert_eq!(task.title, "No flag");
        assert!(!task.completed);
    }
}
