#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use tasklens::libs::query::{
        filter_by_status, filter_by_text, sort_by_due_date, sort_tasks, SortDirection, SortKey, StatusFilter,
        TaskQuery,
    };
    use tasklens::libs::task::{TaskCategory, TaskRecord, TaskStatus};
    use uuid::Uuid;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            NaiveTime::from_hms_opt(h, 0, 0).unwrap(),
        )
    }

    fn task(title: &str, status: TaskStatus, due: Option<NaiveDate>, created: NaiveDateTime) -> TaskRecord {
        TaskRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            status,
            due_date: due,
            category: TaskCategory::Green,
            created_at: created,
            completed_at: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_by_status_all_is_identity() {
        let tasks = vec![
            task("a", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("b", TaskStatus::Done, None, at(2024, 1, 2, 9)),
        ];

        assert_eq!(filter_by_status(&tasks, StatusFilter::All), tasks);
    }

    #[test]
    fn test_filter_by_status_exact_match_preserves_order() {
        let tasks = vec![
            task("a", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("b", TaskStatus::Done, None, at(2024, 1, 2, 9)),
            task("c", TaskStatus::Todo, None, at(2024, 1, 3, 9)),
        ];

        let todos = filter_by_status(&tasks, StatusFilter::Only(TaskStatus::Todo));
        let titles: Vec<_> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn test_filter_by_text_matches_title_and_description() {
        let mut with_description = task("Groceries", TaskStatus::Todo, None, at(2024, 1, 1, 9));
        with_description.description = "buy MILK and bread".to_string();
        let tasks = vec![
            with_description,
            task("Milk the deadline", TaskStatus::Todo, None, at(2024, 1, 2, 9)),
            task("Unrelated", TaskStatus::Todo, None, at(2024, 1, 3, 9)),
        ];

        let matched = filter_by_text(&tasks, "milk");
        let titles: Vec<_> = matched.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Groceries", "Milk the deadline"]);
    }

    #[test]
    fn test_filter_by_text_blank_term_is_noop() {
        let tasks = vec![
            task("a", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("b", TaskStatus::Done, None, at(2024, 1, 2, 9)),
        ];

        assert_eq!(filter_by_text(&tasks, ""), tasks);
        assert_eq!(filter_by_text(&tasks, "   "), tasks);
    }

    #[test]
    fn test_sort_by_due_date_undated_sort_last_and_stay_stable() {
        // Undated records keep their relative input order after all dated ones.
        let tasks = vec![
            task("first undated", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("dated", TaskStatus::Todo, Some(date(2024, 1, 1)), at(2024, 1, 2, 9)),
            task("second undated", TaskStatus::Todo, None, at(2024, 1, 3, 9)),
        ];

        let sorted = sort_by_due_date(&tasks);
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["dated", "first undated", "second undated"]);
    }

    #[test]
    fn test_sort_due_date_descending_keeps_undated_last() {
        let tasks = vec![
            task("none", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("early", TaskStatus::Todo, Some(date(2024, 3, 1)), at(2024, 1, 2, 9)),
            task("late", TaskStatus::Todo, Some(date(2024, 9, 1)), at(2024, 1, 3, 9)),
        ];

        let sorted = sort_tasks(&tasks, SortKey::DueDate, SortDirection::Desc);
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["late", "early", "none"]);
    }

    #[test]
    fn test_sort_due_date_equal_keys_are_stable() {
        let same_day = Some(date(2024, 5, 5));
        let tasks = vec![
            task("one", TaskStatus::Todo, same_day, at(2024, 1, 1, 9)),
            task("two", TaskStatus::Todo, same_day, at(2024, 1, 2, 9)),
            task("three", TaskStatus::Todo, same_day, at(2024, 1, 3, 9)),
        ];

        let sorted = sort_by_due_date(&tasks);
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }

    #[test]
    fn test_sort_by_title_is_case_insensitive() {
        let tasks = vec![
            task("banana", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("Apple", TaskStatus::Todo, None, at(2024, 1, 2, 9)),
            task("cherry", TaskStatus::Todo, None, at(2024, 1, 3, 9)),
        ];

        let sorted = sort_tasks(&tasks, SortKey::Title, SortDirection::Asc);
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Apple", "banana", "cherry"]);

        let reversed = sort_tasks(&tasks, SortKey::Title, SortDirection::Desc);
        let titles: Vec<_> = reversed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_sort_by_created_at_descending() {
        let tasks = vec![
            task("oldest", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("newest", TaskStatus::Todo, None, at(2024, 3, 1, 9)),
            task("middle", TaskStatus::Todo, None, at(2024, 2, 1, 9)),
        ];

        let sorted = sort_tasks(&tasks, SortKey::CreatedAt, SortDirection::Desc);
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_task_query_composes_filters_and_sort() {
        let mut described = task("Pay rent", TaskStatus::Todo, None, at(2024, 1, 1, 9));
        described.description = "transfer before friday".to_string();
        let tasks = vec![
            described,
            task("Pay insurance", TaskStatus::Done, None, at(2024, 1, 2, 9)),
            task("Pay taxes", TaskStatus::Todo, None, at(2024, 1, 3, 9)),
            task("Walk the dog", TaskStatus::Todo, None, at(2024, 1, 4, 9)),
        ];

        let query = TaskQuery {
            status: StatusFilter::Only(TaskStatus::Todo),
            search_term: "pay".to_string(),
            ..TaskQuery::default()
        };

        // Default sort is newest-first.
        let result = query.apply(&tasks);
        let titles: Vec<_> = result.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Pay taxes", "Pay rent"]);
    }

    #[test]
    fn test_task_query_default_shows_everything_newest_first() {
        let tasks = vec![
            task("old", TaskStatus::Todo, None, at(2024, 1, 1, 9)),
            task("new", TaskStatus::Done, None, at(2024, 2, 1, 9)),
        ];

        let result = TaskQuery::default().apply(&tasks);
        let titles: Vec<_> = result.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["new", "old"]);
    }
}
