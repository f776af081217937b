//! Title lines written into fresh notes, and recognition of untouched notes.

use chrono::{Datelike, NaiveDate};

use super::Category;

/// What a note file currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    /// Nothing but whitespace.
    Empty,
    /// Only the generated title line, current or legacy form.
    TitleOnly,
    /// Anything else.
    Authored,
}

impl ContentState {
    /// True when the file carries nothing a person wrote.
    pub fn is_disposable(self) -> bool {
        matches!(self, ContentState::Empty | ContentState::TitleOnly)
    }
}

/// `15 Friday March 2024`
fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%A %B %Y"))
}

/// Title written into new files: `# 15 Friday March 2024 - Work`.
pub fn title_text(date: NaiveDate, category: Category) -> String {
    format!("# {} - {}", day_label(date), category.display_name())
}

/// Title used before the category suffix was introduced.
pub fn legacy_title_text(date: NaiveDate) -> String {
    format!("# {}", day_label(date))
}

pub fn classify_content(content: &str, date: NaiveDate, category: Category) -> ContentState {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return ContentState::Empty;
    }
    if trimmed == title_text(date, category) || trimmed == legacy_title_text(date) {
        ContentState::TitleOnly
    } else {
        ContentState::Authored
    }
}

pub fn is_title_only(content: &str, date: NaiveDate, category: Category) -> bool {
    classify_content(content, date, category) == ContentState::TitleOnly
}
