//! Folder layout for the calendar tree.
//!
//! Every day owns one directory, `<root>/<YYYY>/<MM>-<Month>/<DD>-<Weekday>`,
//! and each category writes a single `<category>.md` inside it. Centralizing
//! the naming here keeps the orchestrator and tests agreeing on paths.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Category;

/// The three folder names that encode a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPath {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DayPath {
    pub fn segments(&self) -> [&str; 3] {
        [&self.year, &self.month, &self.day]
    }

    /// Relative path of the day directory.
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments().iter().collect()
    }
}

/// Maps a date to its folder segments, e.g. `2024`, `03-March`, `15-Friday`.
pub fn day_path(date: NaiveDate) -> DayPath {
    DayPath {
        year: date.year().to_string(),
        month: date.format("%m-%B").to_string(),
        day: date.format("%d-%A").to_string(),
    }
}

/// One note file slot on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub category: Category,
}

/// Root-anchored view of the calendar tree.
#[derive(Debug, Clone)]
pub struct CalendarLayout {
    root: PathBuf,
}

impl CalendarLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn day_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(day_path(date).to_path_buf())
    }

    pub fn file_path(&self, date: NaiveDate, category: Category) -> PathBuf {
        self.day_dir(date).join(category.file_name())
    }

    pub fn record(&self, date: NaiveDate, category: Category) -> FileRecord {
        FileRecord {
            path: self.file_path(date, category),
            date,
            category,
        }
    }

    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create calendar root {}", self.root.display()))
    }

    /// Creates the directory chain for `date` if needed and returns it.
    pub fn ensure_day_dir(&self, date: NaiveDate) -> Result<PathBuf> {
        let dir = self.day_dir(date);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create day folder {}", dir.display()))?;
        Ok(dir)
    }

    /// Largest all-digit top-level folder name, or `fallback` when none exist.
    pub fn latest_year(&self, fallback: i32) -> i32 {
        WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .filter_map(|e| parse_year(&e.file_name().to_string_lossy()))
            .max()
            .unwrap_or(fallback)
    }
}

fn parse_year(name: &str) -> Option<i32> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}
