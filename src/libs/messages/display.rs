//! Display implementation for tasklens application messages.
//!
//! Converts structured [`Message`] values into the human-readable text used
//! by the logging macros. Keeping every string here gives one place to edit
//! wording and keeps call sites type-checked.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK STORE MESSAGES ===
            Message::TasksLoaded(count) => format!("Loaded {} task(s) from storage", count),
            Message::TaskStoreEmpty => "No saved tasks found, starting with an empty collection".to_string(),
            Message::TaskStoreCorrupted(err) => format!("Saved tasks could not be parsed, discarding them: {}", err),
            Message::TaskStoreSaveFailed(err) => format!("Failed to persist tasks: {}", err),

            // === SESSION MESSAGES ===
            Message::TaskCommitted(id) => format!("Task {} committed", id),
            Message::TaskRemoved(id) => format!("Task {} removed", id),
            Message::UnknownTaskIgnored(id) => format!("No task with id {}, mutation ignored", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
        };
        write!(f, "{}", text)
    }
}
