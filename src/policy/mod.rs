//! Creation and deletion rules for a single (date, category) slot.
//!
//! Dates are bucketed against `today`, the day the engine was built for, not
//! against the content of any file. Flags are read through the settings source
//! on every call and never cached.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::calendar::Category;
use crate::config::{SettingsSource, CAN_CREATE_PAST_FILES};

/// Position of a date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Past,
    Present,
    Future,
}

impl Temporal {
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            Ordering::Less => Temporal::Past,
            Ordering::Equal => Temporal::Present,
            Ordering::Greater => Temporal::Future,
        }
    }

    pub fn is_future(self) -> bool {
        self == Temporal::Future
    }
}

/// Outcome of the creation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationDecision {
    Allowed,
    /// Date is before today and past creation is switched off.
    PastCreationDisabled,
    /// The category's flag for this direction is off.
    CategoryDisabled { flag: &'static str },
}

impl CreationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CreationDecision::Allowed)
    }
}

/// Outcome of the date and flag part of the deletion check. Existence and
/// content are checked by the caller around this gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionGate {
    Eligible,
    /// Today and future files are never removed.
    NotPast,
    FlagDisabled { flag: &'static str },
}

impl DeletionGate {
    pub fn is_eligible(&self) -> bool {
        matches!(self, DeletionGate::Eligible)
    }
}

pub struct PolicyEngine<'a, S: ?Sized> {
    settings: &'a S,
    today: NaiveDate,
}

impl<'a, S: SettingsSource + ?Sized> PolicyEngine<'a, S> {
    pub fn new(settings: &'a S, today: NaiveDate) -> Self {
        Self { settings, today }
    }

    pub fn temporal(&self, date: NaiveDate) -> Temporal {
        Temporal::of(date, self.today)
    }

    pub fn creation_decision(&self, date: NaiveDate, category: Category) -> CreationDecision {
        let temporal = self.temporal(date);
        if temporal == Temporal::Past && !self.settings.flag(CAN_CREATE_PAST_FILES) {
            return CreationDecision::PastCreationDisabled;
        }
        let flag = category.flags().create_flag(temporal.is_future());
        if self.settings.flag(flag) {
            CreationDecision::Allowed
        } else {
            CreationDecision::CategoryDisabled { flag }
        }
    }

    pub fn deletion_gate(&self, date: NaiveDate, category: Category) -> DeletionGate {
        if self.temporal(date) != Temporal::Past {
            return DeletionGate::NotPast;
        }
        let flag = category.flags().delete_empty_past;
        if self.settings.flag(flag) {
            DeletionGate::Eligible
        } else {
            DeletionGate::FlagDisabled { flag }
        }
    }
}
