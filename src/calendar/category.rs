//! Fixed set of note categories and the settings that govern each one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One kind of daily note. The set is closed; every day folder holds at most
/// one file per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Note,
    Workout,
    Youtube,
    News,
}

/// Setting names consulted for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFlags {
    /// Allows creation for today (and the past, when past creation is on).
    pub create: &'static str,
    /// Allows creation for dates after today.
    pub create_future: &'static str,
    /// Allows removal of empty or title-only files dated before today.
    pub delete_empty_past: &'static str,
}

impl CategoryFlags {
    /// Creation flag for the requested temporal direction.
    pub fn create_flag(&self, is_future: bool) -> &'static str {
        if is_future {
            self.create_future
        } else {
            self.create
        }
    }
}

// Indexed by `Category as usize`; keep in declaration order.
const FLAG_TABLE: [CategoryFlags; 5] = [
    CategoryFlags {
        create: "CAN_CREATE_WORK_FILES",
        create_future: "CAN_CREATE_FUTURE_WORK_FILES",
        delete_empty_past: "CAN_DELETE_EMPTY_PAST_WORK_FILES",
    },
    CategoryFlags {
        create: "CAN_CREATE_NOTE_FILES",
        create_future: "CAN_CREATE_FUTURE_NOTE_FILES",
        delete_empty_past: "CAN_DELETE_EMPTY_PAST_NOTE_FILES",
    },
    CategoryFlags {
        create: "CAN_CREATE_WORKOUT_FILES",
        create_future: "CAN_CREATE_FUTURE_WORKOUT_FILES",
        delete_empty_past: "CAN_DELETE_EMPTY_PAST_WORKOUT_FILES",
    },
    CategoryFlags {
        create: "CAN_CREATE_YOUTUBE_FILES",
        create_future: "CAN_CREATE_FUTURE_YOUTUBE_FILES",
        delete_empty_past: "CAN_DELETE_EMPTY_PAST_YOUTUBE_FILES",
    },
    CategoryFlags {
        create: "CAN_CREATE_NEWS_FILES",
        create_future: "CAN_CREATE_FUTURE_NEWS_FILES",
        delete_empty_past: "CAN_DELETE_EMPTY_PAST_NEWS_FILES",
    },
];

impl Category {
    /// Every category, in processing order.
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Note,
        Category::Workout,
        Category::Youtube,
        Category::News,
    ];

    /// Lowercase identifier, also the file stem.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Note => "note",
            Category::Workout => "workout",
            Category::Youtube => "youtube",
            Category::News => "news",
        }
    }

    /// Capitalized label used in title lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Note => "Note",
            Category::Workout => "Workout",
            Category::Youtube => "Youtube",
            Category::News => "News",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.md", self.slug())
    }

    pub fn flags(self) -> &'static CategoryFlags {
        &FLAG_TABLE[self as usize]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
