use super::{ymd, IntegrationHarness};
use daybook::config::CAN_CREATE_PAST_FILES;
use daybook::orchestration::EventType;
use daybook::{CalendarLayout, Category};
use std::fs;

#[test]
fn writes_title_without_trailing_newline() {
    let harness = IntegrationHarness::new();
    let today = ymd(2024, 3, 15);
    let settings = harness.settings().enable("CAN_CREATE_WORK_FILES");

    let report = harness
        .runner(settings, today)
        .create_files_for_range(today, today);

    assert_eq!(report.created, 1);
    assert_eq!(
        harness.read_note(today, Category::Work).as_deref(),
        Some("# 15 Friday March 2024 - Work")
    );
    assert!(harness
        .root()
        .join("2024")
        .join("03-March")
        .join("15-Friday")
        .join("work.md")
        .is_file());
}

#[test]
fn past_creation_switch_blocks_every_category() {
    let harness = IntegrationHarness::new();
    let today = ymd(2024, 3, 15);
    let yesterday = ymd(2024, 3, 14);
    let mut settings = harness.settings();
    for category in Category::ALL {
        settings.set(category.flags().create, "true");
        settings.set(category.flags().create_future, "true");
    }

    let report = harness
        .runner(settings, today)
        .create_files_for_range(yesterday, ymd(2024, 3, 16));

    assert_eq!(report.created, 10);
    assert_eq!(report.not_permitted, 5);
    assert!(!CalendarLayout::new(harness.root()).day_dir(yesterday).exists());
    for category in Category::ALL {
        assert!(harness.read_note(yesterday, category).is_none());
        assert!(harness.read_note(today, category).is_some());
    }
}

#[test]
fn past_creation_needs_category_flag_too() {
    let harness = IntegrationHarness::new();
    let today = ymd(2024, 3, 15);
    let yesterday = ymd(2024, 3, 14);
    let settings = harness
        .settings()
        .enable(CAN_CREATE_PAST_FILES)
        .enable("CAN_CREATE_NOTE_FILES");

    harness
        .runner(settings, today)
        .create_files_for_range(yesterday, yesterday);

    assert!(harness.read_note(yesterday, Category::Note).is_some());
    assert!(harness.read_note(yesterday, Category::Work).is_none());
}

#[test]
fn future_flag_alone_skips_today() {
    let harness = IntegrationHarness::new();
    let today = ymd(2024, 3, 15);
    let next_year = ymd(2025, 3, 15);
    let settings = harness.settings().enable("CAN_CREATE_FUTURE_WORK_FILES");
    let runner = harness.runner(settings, today);

    runner.create_files_for_range(today, today);
    runner.create_files_for_range(next_year, next_year);

    assert!(harness.read_note(today, Category::Work).is_none());
    assert_eq!(
        harness.read_note(next_year, Category::Work).as_deref(),
        Some("# 15 Saturday March 2025 - Work")
    );
}

#[test]
fn second_pass_leaves_written_notes_alone() {
    let harness = IntegrationHarness::new();
    let today = ymd(2024, 3, 15);
    let end = ymd(2024, 3, 20);
    let settings = harness
        .settings()
        .enable("CAN_CREATE_WORK_FILES")
        .enable("CAN_CREATE_FUTURE_WORK_FILES");
    let runner = harness.runner(settings, today);

    let first = runner.create_files_for_range(today, end);
    assert_eq!(first.created, 6);

    let edited = "# 17 Sunday March 2024 - Work\n\nplanning";
    let edited_path = harness.note_path(ymd(2024, 3, 17), Category::Work);
    fs::write(&edited_path, edited).unwrap();

    let second = runner.create_files_for_range(today, end);
    assert_eq!(second.created, 0);
    assert_eq!(second.already_present, 6);
    assert_eq!(fs::read_to_string(&edited_path).unwrap(), edited);
}

#[test]
fn stale_legacy_file_is_replaced_in_same_pass() {
    let harness = IntegrationHarness::new();
    let today = ymd(2024, 3, 20);
    let day = ymd(2024, 3, 15);
    harness.write_note(day, Category::Work, "# 15 Friday March 2024");
    let settings = harness
        .settings()
        .enable(CAN_CREATE_PAST_FILES)
        .enable("CAN_CREATE_WORK_FILES")
        .enable("CAN_DELETE_EMPTY_PAST_WORK_FILES");

    let report = harness
        .runner(settings, today)
        .create_files_for_range(day, day);

    assert_eq!(report.deleted, 1);
    assert_eq!(report.created, 1);
    assert_eq!(
        harness.read_note(day, Category::Work).as_deref(),
        Some("# 15 Friday March 2024 - Work")
    );
}

#[test]
fn event_log_records_created_files() {
    let harness = IntegrationHarness::new();
    let today = ymd(2024, 3, 15);
    let log_path = harness.root().join("events.jsonl");
    let settings = harness
        .settings()
        .with("CALENDAR_EVENT_LOG", log_path.to_string_lossy())
        .enable("CAN_CREATE_NEWS_FILES")
        .enable("CAN_CREATE_FUTURE_NEWS_FILES");
    let runner = harness.runner(settings, today);

    runner.create_files_for_range(today, ymd(2024, 3, 17));

    let events = runner.event_log().unwrap().load_events().unwrap();
    let created: Vec<_> = events
        .iter()
        .filter(|e| e.event_type == EventType::FileCreated)
        .collect();
    assert_eq!(created.len(), 3);
    assert_eq!(created[0].details["category"], "news");
    assert_eq!(created[0].details["date"], "2024-03-15");
}
