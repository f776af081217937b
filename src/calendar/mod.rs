pub mod category;
pub mod layout;
pub mod title;

pub use category::{Category, CategoryFlags};
pub use layout::{day_path, CalendarLayout, DayPath, FileRecord};
pub use title::{classify_content, is_title_only, legacy_title_text, title_text, ContentState};

use chrono::NaiveDate;

/// Every date from `start` through `end`, inclusive, one day at a time.
/// Empty when `start` is after `end`.
pub fn days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}
