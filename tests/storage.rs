#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use std::fs;
    use tasklens::libs::store::{JsonFileStore, TaskStore};
    use tasklens::libs::task::{TaskCategory, TaskRecord, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use uuid::Uuid;

    struct StorageTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { _temp_dir: temp_dir }
        }
    }

    fn sample_task() -> TaskRecord {
        let created = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        );
        let completed = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            NaiveTime::from_hms_opt(17, 45, 0).unwrap(),
        );
        TaskRecord {
            id: Uuid::new_v4(),
            title: "Persisted".to_string(),
            description: "Round trip me".to_string(),
            status: TaskStatus::Done,
            due_date: Some(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()),
            category: TaskCategory::Pink,
            created_at: created,
            completed_at: Some(completed),
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_without_prior_state_is_empty(_ctx: &mut StorageTestContext) {
        let store = JsonFileStore::with_file_name("fresh.json").unwrap();
        let tasks = store.load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_and_load_round_trip(_ctx: &mut StorageTestContext) {
        let store = JsonFileStore::with_file_name("round_trip.json").unwrap();
        let tasks = vec![sample_task()];

        store.save(&tasks).unwrap();
        let reloaded = store.load().unwrap();

        // Dates and timestamps must come back as the same values, not as
        // strings that merely look similar.
        assert_eq!(reloaded, tasks);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_blob_uses_camel_case_field_names(_ctx: &mut StorageTestContext) {
        let store = JsonFileStore::with_file_name("naming.json").unwrap();
        store.save(&[sample_task()]).unwrap();

        let blob = fs::read_to_string(store.path()).unwrap();
        assert!(blob.contains("\"dueDate\""));
        assert!(blob.contains("\"createdAt\""));
        assert!(blob.contains("\"completedAt\""));
        assert!(blob.contains("\"inprogress\"") || blob.contains("\"done\""));
    }

    #[test]
    fn test_enum_tokens_serialize_lowercase() {
        // Wire tokens must stay as the original blob format wrote them.
        for (category, token) in TaskCategory::ALL.iter().zip([
            "\"blue\"",
            "\"purple\"",
            "\"orange\"",
            "\"green\"",
            "\"pink\"",
            "\"yellow\"",
        ]) {
            assert_eq!(serde_json::to_string(category).unwrap(), token);
        }
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"inprogress\"");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_corrupted_blob_is_discarded(_ctx: &mut StorageTestContext) {
        let store = JsonFileStore::with_file_name("corrupt.json").unwrap();
        fs::write(store.path(), "{not valid json at all").unwrap();

        // Parse failure is swallowed and treated as "no saved state".
        let tasks = store.load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_replaces_whole_collection(_ctx: &mut StorageTestContext) {
        let store = JsonFileStore::with_file_name("replace.json").unwrap();

        let mut first = sample_task();
        first.title = "First".to_string();
        let mut second = sample_task();
        second.id = Uuid::new_v4();
        second.title = "Second".to_string();

        store.save(&[first, second]).unwrap();
        let mut only = sample_task();
        only.title = "Only survivor".to_string();
        store.save(&[only.clone()]).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].title, "Only survivor");
    }
}
