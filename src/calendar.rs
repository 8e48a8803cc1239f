//! Business-day calendar
//!
//! Date arithmetic over working days. The reference schedule skips Saturdays
//! and Sundays only; holiday support exists but the default calendar carries
//! none, so it matches a plain Mon-Fri business-day sequence.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// A Mon-Fri working calendar with optional holidays
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar {
    holidays: HashSet<NaiveDate>,
}

impl BusinessCalendar {
    /// Create a calendar with no holidays (weekends only are skipped)
    pub fn new() -> Self {
        Self {
            holidays: HashSet::new(),
        }
    }

    /// Add a single holiday
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Add multiple holidays at once
    pub fn add_holidays(&mut self, dates: &[NaiveDate]) {
        self.holidays.extend(dates);
    }

    /// Check if a date is a working day
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }

    /// Roll a date forward to the first working day on or after it
    pub fn roll_forward(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_business_day(current) {
            current += Duration::days(1);
        }
        current
    }

    /// Find the first working day strictly after a given date
    pub fn next_business_day(&self, after: NaiveDate) -> NaiveDate {
        self.roll_forward(after + Duration::days(1))
    }

    /// The first `count` working days on or after `anchor`, in order
    pub fn business_days_from(&self, anchor: NaiveDate, count: usize) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(count);
        let mut current = self.roll_forward(anchor);
        for _ in 0..count {
            days.push(current);
            current = self.next_business_day(current);
        }
        days
    }
}
