//! Scheduling rules for the 10:00-02:00 operating window.
//!
//! All times are wall-clock `HH:MM` strings in the court's local schedule.
//! Internally they are measured in minutes on an extended scale where any
//! time before 10:00 belongs to the next calendar day's early-morning tail.

use crate::model::reservation::BookedSlot;
use chrono::{NaiveDate, NaiveTime, Timelike};
use shared::error::AppError;
use thiserror::Error;

const SCHEDULE_START_MINUTES: u32 = 10 * 60; // 10:00
const SCHEDULE_END_MINUTES: u32 = 26 * 60; // 02:00 next day
const MINUTES_PER_DAY: u32 = 24 * 60;
const DEFAULT_SLOT_MINUTES: u32 = 60;
const EXTENDED_SLOT_MINUTES: u32 = 90;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid time format: {0}")]
    InvalidTime(String),
    #[error("start time must be between 10:00 and 01:59")]
    OutOfWindow,
    #[error("start time must align with {0}-minute slots for this court")]
    Misaligned(u32),
    #[error("selected slot exceeds closing time (02:00)")]
    ExceedsClosing,
    #[error("end time must be {0} for this court category")]
    EndMismatch(String),
    #[error("end time must be after start time")]
    EmptyRange,
    #[error("booked slot has neither a duration nor an end time")]
    MissingEnd,
}

impl From<ScheduleError> for AppError {
    fn from(value: ScheduleError) -> Self {
        AppError::UnprocessableEntity(value.to_string())
    }
}

/// A normalized, aligned slot for one court category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSlot {
    pub start_time: String,
    pub end_time: String,
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub duration_minutes: u32,
}

/// Racket categories book 90-minute slots, everything else 60.
pub fn slot_duration_for_category(category: &str) -> u32 {
    let c = category.trim().to_lowercase();
    if matches!(c.as_str(), "padel" | "paddle" | "tenis" | "tennis") {
        EXTENDED_SLOT_MINUTES
    } else {
        DEFAULT_SLOT_MINUTES
    }
}

/// Converts an `HH:MM` string into minutes on the extended scale.
pub fn normalize_slot_minutes(time_str: &str) -> Result<u32, ScheduleError> {
    let parsed = NaiveTime::parse_from_str(time_str, TIME_FORMAT)
        .map_err(|_| ScheduleError::InvalidTime(time_str.to_string()))?;

    let mut minutes = parsed.hour() * 60 + parsed.minute();
    if minutes < SCHEDULE_START_MINUTES {
        minutes += MINUTES_PER_DAY;
    }
    Ok(minutes)
}

/// Converts absolute minutes back to an `HH:MM` string.
pub fn minutes_to_clock(total_minutes: u32) -> String {
    let minutes = total_minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Half-open interval overlap: `[start_a, end_a)` against `[start_b, end_b)`.
pub fn intervals_overlap(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    start_a < end_b && start_b < end_a
}

/// Validates and normalizes a slot according to the court category's rules.
pub fn ensure_valid_slot(
    category: &str,
    start_time: &str,
    provided_end_time: Option<&str>,
) -> Result<ValidSlot, ScheduleError> {
    let duration = slot_duration_for_category(category);

    let start_minutes = normalize_slot_minutes(start_time)?;

    if !(SCHEDULE_START_MINUTES..SCHEDULE_END_MINUTES).contains(&start_minutes) {
        return Err(ScheduleError::OutOfWindow);
    }

    if (start_minutes - SCHEDULE_START_MINUTES) % duration != 0 {
        return Err(ScheduleError::Misaligned(duration));
    }

    let expected_end = start_minutes + duration;
    if expected_end > SCHEDULE_END_MINUTES {
        return Err(ScheduleError::ExceedsClosing);
    }

    if let Some(end_time) = provided_end_time {
        let end_minutes = normalize_slot_minutes(end_time)?;
        if end_minutes != expected_end {
            return Err(ScheduleError::EndMismatch(minutes_to_clock(expected_end)));
        }
    }

    Ok(ValidSlot {
        start_time: minutes_to_clock(start_minutes),
        end_time: minutes_to_clock(expected_end),
        start_minutes,
        end_minutes: expected_end,
        duration_minutes: duration,
    })
}

/// Minutes between two clock times, normalized across the window wraparound
/// so a 23:30-01:00 slot yields 90 rather than an error.
pub fn calculate_duration(start_time: &str, end_time: &str) -> Result<u32, ScheduleError> {
    let start = normalize_slot_minutes(start_time)?;
    let end = normalize_slot_minutes(end_time)?;

    if end <= start {
        return Err(ScheduleError::EmptyRange);
    }
    Ok(end - start)
}

/// Scans the stored candidates for a half-open overlap with the requested
/// slot. Returns `false` on the first hit. Candidates are expected to be
/// pre-filtered to non-cancelled rows; cancelled ones are skipped anyway.
pub fn slot_is_available(
    candidates: &[BookedSlot],
    requested_start: u32,
    requested_end: u32,
) -> Result<bool, ScheduleError> {
    for candidate in candidates {
        if candidate.status.is_terminal() {
            continue;
        }

        let existing_start = normalize_slot_minutes(&candidate.start_time)?;
        let existing_end = match candidate.duration_minutes {
            Some(d) if d > 0 => existing_start + d as u32,
            _ => match candidate.end_time.as_deref() {
                Some(end) => normalize_slot_minutes(end)?,
                None => return Err(ScheduleError::MissingEnd),
            },
        };

        if intervals_overlap(requested_start, requested_end, existing_start, existing_end) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|e| format!("invalid date format: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reservation::ReservationStatus;

    fn booked(start: &str, end: Option<&str>, duration: Option<i32>) -> BookedSlot {
        BookedSlot {
            start_time: start.into(),
            end_time: end.map(Into::into),
            duration_minutes: duration,
            status: ReservationStatus::Confirmed,
        }
    }

    #[test]
    fn normalizes_early_morning_into_next_day_tail() {
        assert_eq!(normalize_slot_minutes("10:00").unwrap(), 600);
        assert_eq!(normalize_slot_minutes("23:30").unwrap(), 1410);
        assert_eq!(normalize_slot_minutes("00:00").unwrap(), 1440);
        assert_eq!(normalize_slot_minutes("01:30").unwrap(), 1530);
    }

    #[test]
    fn rejects_unparseable_times() {
        assert!(matches!(
            normalize_slot_minutes("25:99"),
            Err(ScheduleError::InvalidTime(_))
        ));
        assert!(matches!(
            normalize_slot_minutes("not a time"),
            Err(ScheduleError::InvalidTime(_))
        ));
    }

    #[test]
    fn clock_round_trips_across_midnight() {
        assert_eq!(minutes_to_clock(600), "10:00");
        assert_eq!(minutes_to_clock(1440), "00:00");
        assert_eq!(minutes_to_clock(1530), "01:30");
    }

    #[test]
    fn racket_categories_use_extended_slots() {
        assert_eq!(slot_duration_for_category("tennis"), 90);
        assert_eq!(slot_duration_for_category("tenis"), 90);
        assert_eq!(slot_duration_for_category("padel"), 90);
        assert_eq!(slot_duration_for_category(" Paddle "), 90);
        assert_eq!(slot_duration_for_category("futbol"), 60);
        assert_eq!(slot_duration_for_category("basquet"), 60);
    }

    #[test]
    fn aligned_starts_yield_expected_ends() {
        // Every aligned 60-minute start inside the window.
        for start in (600..1560).step_by(60) {
            let slot =
                ensure_valid_slot("futbol", &minutes_to_clock(start), None).unwrap();
            assert_eq!(slot.end_minutes, start + 60);
            assert_eq!(slot.duration_minutes, 60);
        }
        // Every aligned 90-minute start whose slot still fits.
        for start in (600..=1470).step_by(90) {
            let slot =
                ensure_valid_slot("tennis", &minutes_to_clock(start), None).unwrap();
            assert_eq!(slot.end_minutes, start + 90);
            assert_eq!(slot.duration_minutes, 90);
        }
    }

    #[test]
    fn misaligned_starts_are_rejected() {
        assert_eq!(
            ensure_valid_slot("futbol", "10:30", None),
            Err(ScheduleError::Misaligned(60))
        );
        assert_eq!(
            ensure_valid_slot("tennis", "11:00", None),
            Err(ScheduleError::Misaligned(90))
        );
    }

    #[test]
    fn starts_outside_window_are_rejected() {
        assert_eq!(
            ensure_valid_slot("futbol", "09:00", None),
            Err(ScheduleError::OutOfWindow)
        );
        assert_eq!(
            ensure_valid_slot("futbol", "02:00", None),
            Err(ScheduleError::OutOfWindow)
        );
    }

    #[test]
    fn slot_may_not_cross_closing_time() {
        // 01:00 is aligned for tennis (900 from window start) but the slot
        // would end at 02:30.
        assert_eq!(
            ensure_valid_slot("tennis", "01:00", None),
            Err(ScheduleError::ExceedsClosing)
        );
        // The last 60-minute slot ends exactly at closing.
        let slot = ensure_valid_slot("futbol", "01:00", None).unwrap();
        assert_eq!(slot.end_time, "02:00");
    }

    #[test]
    fn tennis_slot_accepts_exact_end_and_rejects_short_one() {
        let slot = ensure_valid_slot("tennis", "10:00", Some("11:30")).unwrap();
        assert_eq!(slot.start_time, "10:00");
        assert_eq!(slot.end_time, "11:30");
        assert_eq!(slot.duration_minutes, 90);

        assert_eq!(
            ensure_valid_slot("tennis", "10:00", Some("11:00")),
            Err(ScheduleError::EndMismatch("11:30".into()))
        );
    }

    #[test]
    fn duration_handles_wraparound() {
        assert_eq!(calculate_duration("10:00", "11:00").unwrap(), 60);
        assert_eq!(calculate_duration("23:30", "01:00").unwrap(), 90);
        assert_eq!(
            calculate_duration("11:00", "11:00"),
            Err(ScheduleError::EmptyRange)
        );
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [(600, 690, 660, 720), (600, 660, 660, 720), (600, 720, 630, 690)];
        for (a0, a1, b0, b1) in cases {
            assert_eq!(
                intervals_overlap(a0, a1, b0, b1),
                intervals_overlap(b0, b1, a0, a1)
            );
        }
    }

    #[test]
    fn adjacent_half_open_intervals_do_not_overlap() {
        // [10:00, 11:00) and [11:00, 12:00)
        assert!(!intervals_overlap(600, 660, 660, 720));
        // [10:00, 11:30) and [11:00, 12:00)
        assert!(intervals_overlap(600, 690, 660, 720));
    }

    #[test]
    fn availability_prefers_duration_and_falls_back_to_end_time() {
        let candidates = vec![booked("10:00", None, Some(90))];
        // 11:00-12:00 collides with 10:00+90.
        assert!(!slot_is_available(&candidates, 660, 720).unwrap());
        // 11:30-12:30 does not.
        assert!(slot_is_available(&candidates, 690, 750).unwrap());

        let candidates = vec![booked("10:00", Some("11:00"), None)];
        assert!(!slot_is_available(&candidates, 630, 690).unwrap());
        assert!(slot_is_available(&candidates, 660, 720).unwrap());
    }

    #[test]
    fn availability_skips_cancelled_candidates() {
        let mut cancelled = booked("10:00", Some("11:00"), None);
        cancelled.status = ReservationStatus::Cancelled;
        assert!(slot_is_available(&[cancelled], 600, 660).unwrap());
    }

    #[test]
    fn availability_requires_some_end_information() {
        let candidates = vec![booked("10:00", None, None)];
        assert_eq!(
            slot_is_available(&candidates, 600, 660),
            Err(ScheduleError::MissingEnd)
        );
    }
}
