//! Schedule building service
//!
//! Lays the five allocated phases onto the calendar. Phase starts advance one
//! business day at a time from the anchor (the i-th phase starts on the i-th
//! business day), while each phase's end is start + duration in CALENDAR
//! days. Starts are therefore business-day-spaced but spans are calendar
//! spans, so phases overlap. That mismatch is the observed behavior of the
//! system this replaces and is kept on purpose; the tests below pin it so any
//! future correction is an explicit change here, not a silent shift.

use chrono::{Duration, NaiveDate};

use crate::calendar::BusinessCalendar;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{PhaseCost, ScheduledPhase, PHASE_COUNT, PHASE_PLAN};

/// Default schedule anchor date
pub const DEFAULT_ANCHOR: &str = "2025-07-15";

/// Service laying allocated phases onto a business-day calendar
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    calendar: BusinessCalendar,
}

impl ScheduleBuilder {
    /// Create a builder over a plain weekend-skipping calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder over a custom calendar
    pub fn with_calendar(calendar: BusinessCalendar) -> Self {
        Self { calendar }
    }

    /// Parse an anchor date in `YYYY-MM-DD` form.
    ///
    /// Fails with `InvalidInput` on anything unparseable.
    pub fn parse_anchor(s: &str) -> BudgetResult<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Assign durations and dates to the five allocated phases.
    ///
    /// Fails with `InvalidInput` unless exactly five phases are given.
    /// Durations come positionally from the standard plan (20, 20, 15, 15,
    /// 10 days).
    pub fn schedule(
        &self,
        phases: &[PhaseCost],
        start_date: NaiveDate,
    ) -> BudgetResult<Vec<ScheduledPhase>> {
        if phases.len() != PHASE_COUNT {
            return Err(BudgetError::invalid_input(format!(
                "expected {} phases, got {}",
                PHASE_COUNT,
                phases.len()
            )));
        }

        let starts = self.calendar.business_days_from(start_date, PHASE_COUNT);

        Ok(phases
            .iter()
            .zip(PHASE_PLAN.iter())
            .zip(starts)
            .map(|((phase, spec), start)| ScheduledPhase {
                name: phase.name.clone(),
                proportion: phase.proportion,
                estimated_cost: phase.estimated_cost,
                duration_days: spec.duration_days,
                start,
                end: start + Duration::days(spec.duration_days),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::phases::PhaseAllocator;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_anchor() {
        assert_eq!(
            ScheduleBuilder::parse_anchor("2025-07-15").unwrap(),
            date(2025, 7, 15)
        );
        assert_eq!(
            ScheduleBuilder::parse_anchor(" 2025-07-15 ").unwrap(),
            date(2025, 7, 15)
        );
        assert!(ScheduleBuilder::parse_anchor("15/07/2025")
            .unwrap_err()
            .is_invalid_input());
        assert!(ScheduleBuilder::parse_anchor("not-a-date")
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_wrong_phase_count_rejected() {
        let builder = ScheduleBuilder::new();
        let mut phases = PhaseAllocator::allocate(100_000.0);
        phases.pop();
        let err = builder.schedule(&phases, date(2025, 7, 15)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_reference_anchor_layout() {
        // 2025-07-15 is a Tuesday; the 5th business day crosses the weekend.
        let builder = ScheduleBuilder::new();
        let phases = PhaseAllocator::allocate(100_000.0);
        let scheduled = builder.schedule(&phases, date(2025, 7, 15)).unwrap();

        let starts: Vec<NaiveDate> = scheduled.iter().map(|p| p.start).collect();
        assert_eq!(
            starts,
            vec![
                date(2025, 7, 15),
                date(2025, 7, 16),
                date(2025, 7, 17),
                date(2025, 7, 18),
                date(2025, 7, 21),
            ]
        );

        let durations: Vec<i64> = scheduled.iter().map(|p| p.duration_days).collect();
        assert_eq!(durations, vec![20, 20, 15, 15, 10]);

        // Ends are calendar-day offsets, weekends included.
        let ends: Vec<NaiveDate> = scheduled.iter().map(|p| p.end).collect();
        assert_eq!(
            ends,
            vec![
                date(2025, 8, 4),
                date(2025, 8, 5),
                date(2025, 8, 1),
                date(2025, 8, 2),
                date(2025, 7, 31),
            ]
        );
    }

    #[test]
    fn test_phases_overlap_by_construction() {
        // Starts are one business day apart but spans run 10-20 calendar
        // days, so every later phase starts before the previous one ends.
        let builder = ScheduleBuilder::new();
        let phases = PhaseAllocator::allocate(50_000.0);
        let scheduled = builder.schedule(&phases, date(2025, 7, 15)).unwrap();
        for pair in scheduled.windows(2) {
            assert!(pair[1].start < pair[0].end);
        }
    }

    #[test]
    fn test_no_start_falls_on_weekend_for_any_anchor() {
        let builder = ScheduleBuilder::new();
        let phases = PhaseAllocator::allocate(10_000.0);
        // Sweep two full weeks of anchors, covering every weekday position.
        for offset in 0..14 {
            let anchor = date(2025, 7, 12) + Duration::days(offset);
            let scheduled = builder.schedule(&phases, anchor).unwrap();
            for phase in &scheduled {
                assert!(
                    !matches!(phase.start.weekday(), Weekday::Sat | Weekday::Sun),
                    "anchor {} produced weekend start {}",
                    anchor,
                    phase.start
                );
            }
        }
    }

    #[test]
    fn test_weekend_anchor_rolls_to_monday() {
        let builder = ScheduleBuilder::new();
        let phases = PhaseAllocator::allocate(10_000.0);
        let scheduled = builder.schedule(&phases, date(2025, 7, 19)).unwrap();
        assert_eq!(scheduled[0].start, date(2025, 7, 21));
    }

    #[test]
    fn test_costs_carry_through_scheduling() {
        let builder = ScheduleBuilder::new();
        let phases = PhaseAllocator::allocate(100_000.0);
        let scheduled = builder.schedule(&phases, date(2025, 7, 15)).unwrap();
        for (scheduled, allocated) in scheduled.iter().zip(&phases) {
            assert_eq!(scheduled.name, allocated.name);
            assert_eq!(scheduled.estimated_cost, allocated.estimated_cost);
            assert_eq!(scheduled.proportion, allocated.proportion);
        }
    }
}
