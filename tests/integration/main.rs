use chrono::NaiveDate;
use daybook::config::{MapSettings, BASE_PATH};
use daybook::{CalendarLayout, CalendarRunner, Category};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod creation;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn root(&self) -> PathBuf {
        self.workspace.path().join("calendar")
    }

    /// Settings pointing at this harness' calendar root, all flags off.
    pub fn settings(&self) -> MapSettings {
        MapSettings::new().with(BASE_PATH, self.root().to_string_lossy())
    }

    pub fn runner(&self, settings: MapSettings, today: NaiveDate) -> CalendarRunner<MapSettings> {
        CalendarRunner::with_today(settings, today)
    }

    pub fn note_path(&self, date: NaiveDate, category: Category) -> PathBuf {
        CalendarLayout::new(self.root()).file_path(date, category)
    }

    pub fn write_note(&self, date: NaiveDate, category: Category, content: &str) -> PathBuf {
        let path = self.note_path(date, category);
        fs::create_dir_all(path.parent().expect("note has a day folder"))
            .expect("failed to create day folder");
        fs::write(&path, content).expect("failed to seed note");
        path
    }

    pub fn read_note(&self, date: NaiveDate, category: Category) -> Option<String> {
        fs::read_to_string(self.note_path(date, category)).ok()
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
