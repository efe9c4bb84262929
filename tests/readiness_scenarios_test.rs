use chrono::NaiveDate;
use restarta::domain::model::{
    ChecklistItem, ItemStatus, Priority, SuggestionKind, TravelerProfile, UserContext,
};
use restarta::{compute_progress, generate_suggestions, FixedClock, ReadinessEngine};

fn item(id: &str, title: &str, status: ItemStatus, priority: Priority) -> ChecklistItem {
    ChecklistItem::new(id, title)
        .with_status(status)
        .with_priority(priority)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn test_two_critical_items_half_done() {
    let items = vec![
        item("1", "Apply for visa", ItemStatus::Completed, Priority::Critical),
        item("2", "Book flights", ItemStatus::Pending, Priority::Critical),
    ];

    let progress = compute_progress(&items);
    assert_eq!(progress, 50);

    let suggestions = generate_suggestions(&items, progress, None, today());
    let critical = suggestions
        .iter()
        .find(|s| s.id == "critical-items")
        .expect("critical warning present");
    assert_eq!(critical.kind, SuggestionKind::Warning);
    assert!(critical.description.contains("You have 1 critical item"));
}

#[test]
fn test_weighted_progress_scenario() {
    let items = vec![
        item("1", "Apostille documents", ItemStatus::Completed, Priority::Critical),
        item("2", "Buy adapters", ItemStatus::Pending, Priority::Low),
    ];
    assert_eq!(compute_progress(&items), 83);
}

#[test]
fn test_full_context_with_a_week_to_go() {
    let engine = ReadinessEngine::new(FixedClock::new(today()));
    let context = UserContext {
        travel_date: NaiveDate::from_ymd_opt(2026, 10, 21),
        city: Some("Lisbon".to_string()),
        profile: Some(TravelerProfile::Resident),
    };
    let items = vec![
        item("1", "Check passport expiry", ItemStatus::Completed, Priority::Critical),
        item("2", "Book first week lodging", ItemStatus::Pending, Priority::High),
        item("3", "International driving permit", ItemStatus::NotApplicable, Priority::Medium),
    ];

    let report = engine.assess(&items, Some(&context));
    assert_eq!(report.progress.percentage, 63);
    assert_eq!(report.progress.relevant_items, 2);

    let ids: Vec<_> = report.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["trip-this-week"]);
    assert!(report.suggestions[0].description.contains("Lisbon"));
}

#[test]
fn test_context_absent_versus_date_absent() {
    let without_context = generate_suggestions(&[], 0, None, today());
    let without_date = generate_suggestions(&[], 0, Some(&UserContext::default()), today());

    assert_eq!(without_context.len(), 1);
    assert_eq!(without_context[0].id, "add-passport");
    assert_eq!(without_date.len(), 2);
    assert_eq!(without_date[0].id, "set-travel-date");
    assert_eq!(without_date[0].action_label.as_deref(), Some("Configure trip"));
}

#[test]
fn test_suggestions_are_idempotent() {
    let engine = ReadinessEngine::new(FixedClock::new(today()));
    let context = UserContext {
        travel_date: NaiveDate::from_ymd_opt(2027, 2, 1),
        city: None,
        profile: None,
    };
    let items = vec![item("1", "Sell the car", ItemStatus::Pending, Priority::Critical)];

    let first = engine.assess(&items, Some(&context));
    let second = engine.assess(&items, Some(&context));
    assert_eq!(first, second);
    assert_eq!(first.suggestions[0].id, "winter-prep");
}
