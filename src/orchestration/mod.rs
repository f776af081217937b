//! Walks date ranges and applies the policy to every note slot.
//!
//! For each (date, category) the deletion check runs first, then creation, so
//! a stale untouched file is cleared before the slot is considered for a new
//! one. Every per-file fault is logged and counted; only failing to create the
//! calendar root aborts a run.

pub mod events;

pub use events::{EventLog, EventType, RunEvent};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use uuid::Uuid;

use crate::calendar::{
    classify_content, days, title_text, CalendarLayout, Category, ContentState, FileRecord,
};
use crate::config::{calendar_root, event_log_path, SettingsSource};
use crate::policy::{DeletionGate, PolicyEngine};

/// Counters for one or more passes over the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub days_visited: u64,
    pub created: u64,
    pub deleted: u64,
    /// Creation was permitted but a file was already there.
    pub already_present: u64,
    /// Creation was refused by policy.
    pub not_permitted: u64,
    pub errors: u64,
}

impl RunReport {
    pub fn merge(&mut self, other: &RunReport) {
        self.days_visited += other.days_visited;
        self.created += other.created;
        self.deleted += other.deleted;
        self.already_present += other.already_present;
        self.not_permitted += other.not_permitted;
        self.errors += other.errors;
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} deleted, {} already present, {} not permitted, {} errors over {} days",
            self.created,
            self.deleted,
            self.already_present,
            self.not_permitted,
            self.errors,
            self.days_visited
        )
    }
}

/// December 31 of `year`, if chrono can represent it.
pub fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// First day swept by a cleanup pass without an explicit start.
pub fn cleanup_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Applies the calendar policy to the tree rooted at `CALENDAR_BASE_PATH`.
pub struct CalendarRunner<S> {
    settings: S,
    layout: CalendarLayout,
    today: NaiveDate,
    events: Option<EventLog>,
    run_id: Uuid,
}

impl<S: SettingsSource> CalendarRunner<S> {
    /// Runner evaluating policy against the local calendar date.
    pub fn new(settings: S) -> Self {
        Self::with_today(settings, Local::now().date_naive())
    }

    pub fn with_today(settings: S, today: NaiveDate) -> Self {
        let layout = CalendarLayout::new(calendar_root(&settings));
        let events = event_log_path(&settings).map(EventLog::new);
        Self {
            settings,
            layout,
            today,
            events,
            run_id: Uuid::new_v4(),
        }
    }

    pub fn layout(&self) -> &CalendarLayout {
        &self.layout
    }

    pub fn event_log(&self) -> Option<&EventLog> {
        self.events.as_ref()
    }

    fn policy(&self) -> PolicyEngine<'_, S> {
        PolicyEngine::new(&self.settings, self.today)
    }

    /// Latest year folder in the tree, or the current year.
    pub fn latest_year(&self) -> i32 {
        self.layout.latest_year(self.today.year())
    }

    /// End of the creation window: December 31 of `latest_year`, pushed to
    /// the end of the current year when that is already behind us.
    pub fn creation_end(&self, latest_year: i32) -> NaiveDate {
        year_end(latest_year)
            .filter(|end| *end >= self.today)
            .or_else(|| year_end(self.today.year()))
            .unwrap_or(self.today)
    }

    /// Full run: sweep the whole tree, then fill today through year end.
    pub fn run(&self) -> Result<RunReport> {
        self.layout.ensure_root()?;
        let latest_year = self.latest_year();
        info!(
            "Starting run for {} in {} (latest year {})",
            self.today,
            self.layout.root().display(),
            latest_year
        );
        self.record_event(
            EventType::RunStarted,
            serde_json::json!({
                "today": self.today,
                "root": self.layout.root(),
                "latest_year": latest_year,
            }),
        );

        let mut report = self.clean_empty_files(None, None);
        let end = self.creation_end(latest_year);
        report.merge(&self.create_files_for_range(self.today, end));

        self.record_event(
            EventType::RunCompleted,
            serde_json::to_value(report).unwrap_or_default(),
        );
        Ok(report)
    }

    /// Deletion check then creation for every category on every date in
    /// `start..=end`.
    pub fn create_files_for_range(&self, start: NaiveDate, end: NaiveDate) -> RunReport {
        let mut report = RunReport::default();
        for date in days(start, end) {
            report.days_visited += 1;
            for category in Category::ALL {
                let record = self.layout.record(date, category);
                self.delete_if_stale(&record, &mut report);
                self.create_if_allowed(&record, &mut report);
            }
        }
        debug!("Creation pass {start}..={end}: {report}");
        report
    }

    /// Deletion check only. Defaults to 2000-01-01 through December 31 of the
    /// latest year in the tree. Each visited day gets its folder chain.
    pub fn clean_empty_files(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> RunReport {
        let start = start.unwrap_or_else(cleanup_start);
        let end = end
            .or_else(|| year_end(self.latest_year()))
            .unwrap_or(self.today);
        let mut report = RunReport::default();
        for date in days(start, end) {
            report.days_visited += 1;
            if let Err(err) = self.layout.ensure_day_dir(date) {
                error!("{err:#}");
                report.errors += 1;
            }
            for category in Category::ALL {
                let record = self.layout.record(date, category);
                self.delete_if_stale(&record, &mut report);
            }
        }
        debug!("Cleanup pass {start}..={end}: {report}");
        report
    }

    fn delete_if_stale(&self, record: &FileRecord, report: &mut RunReport) {
        if !record.path.exists() {
            return;
        }
        match self.policy().deletion_gate(record.date, record.category) {
            DeletionGate::Eligible => {}
            DeletionGate::NotPast => return,
            DeletionGate::FlagDisabled { flag } => {
                debug!("Keeping {}: {flag} is off", record.path.display());
                return;
            }
        }

        let content = match fs::read_to_string(&record.path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Error reading file {}: {err}", record.path.display());
                report.errors += 1;
                return;
            }
        };
        let reason = match classify_content(&content, record.date, record.category) {
            ContentState::Empty => {
                info!("File is completely empty: {}", record.path.display());
                "empty"
            }
            ContentState::TitleOnly => {
                info!("File contains only title: {}", record.path.display());
                "title_only"
            }
            ContentState::Authored => return,
        };

        match fs::remove_file(&record.path) {
            Ok(()) => {
                report.deleted += 1;
                info!("Deleted {}", record.path.display());
                self.record_file_event(EventType::FileDeleted, record, reason);
            }
            Err(err) => {
                error!("Error deleting file {}: {err}", record.path.display());
                report.errors += 1;
                self.record_file_event(EventType::FileFailed, record, &err.to_string());
            }
        }
    }

    fn create_if_allowed(&self, record: &FileRecord, report: &mut RunReport) {
        let decision = self.policy().creation_decision(record.date, record.category);
        if !decision.is_allowed() {
            debug!(
                "Not creating {} for {}: {decision:?}",
                record.category, record.date
            );
            report.not_permitted += 1;
            return;
        }
        if record.path.exists() {
            report.already_present += 1;
            return;
        }

        match self.write_title(record) {
            Ok(true) => {
                report.created += 1;
                info!("Created {}", record.path.display());
                self.record_file_event(EventType::FileCreated, record, "created");
            }
            Ok(false) => {
                debug!("{} appeared before it was written", record.path.display());
                report.already_present += 1;
            }
            Err(err) => {
                error!("Error creating file {}: {err:#}", record.path.display());
                report.errors += 1;
                self.record_file_event(EventType::FileFailed, record, &format!("{err:#}"));
            }
        }
    }

    /// Writes the title into a new file. `Ok(false)` when the file already
    /// exists; existing files are never truncated.
    fn write_title(&self, record: &FileRecord) -> Result<bool> {
        self.layout.ensure_day_dir(record.date)?;
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&record.path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create {}", record.path.display()))
            }
        };
        file.write_all(title_text(record.date, record.category).as_bytes())
            .with_context(|| format!("Failed to write {}", record.path.display()))?;
        Ok(true)
    }

    fn record_file_event(&self, event_type: EventType, record: &FileRecord, detail: &str) {
        self.record_event(
            event_type,
            serde_json::json!({
                "path": record.path,
                "date": record.date,
                "category": record.category,
                "detail": detail,
            }),
        );
    }

    fn record_event(&self, event_type: EventType, details: serde_json::Value) {
        let Some(events) = &self.events else {
            return;
        };
        if let Err(err) = events.append_event(&RunEvent::new(self.run_id, event_type, details)) {
            warn!(
                "Failed to append run event to {}: {err:#}",
                events.path().display()
            );
        }
    }
}
