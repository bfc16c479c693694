#[derive(Debug, Clone)]
pub enum Message {
    // === TASK STORE MESSAGES ===
    TasksLoaded(usize),
    TaskStoreEmpty,
    TaskStoreCorrupted(String),
    TaskStoreSaveFailed(String),

    // === SESSION MESSAGES ===
    TaskCommitted(String),
    TaskRemoved(String),
    UnknownTaskIgnored(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
}
