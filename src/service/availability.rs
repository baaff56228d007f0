use std::collections::BTreeSet;
use std::fmt;

use chrono::{Duration, NaiveDate};

/// An existing reservation, already narrowed to calendar days. Both ends
/// are inclusive: the checkout day itself is unavailable, so back-to-back
/// stays sharing a turnover day are not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRange {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub guests: Option<u32>,
}

/// A candidate booking as entered by the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedStay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// The venue fields validation actually needs. Callers narrow a full
/// venue response down to this; the calculator never sees the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenueConstraints {
    pub max_guests: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayRejection {
    PastCheckIn,
    NonPositiveDuration,
    ExceedsCapacity,
    DateUnavailable,
}

impl fmt::Display for StayRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StayRejection::PastCheckIn => "Check-in date cannot be in the past",
            StayRejection::NonPositiveDuration => {
                "Check-out must be at least one night after check-in"
            }
            StayRejection::ExceedsCapacity => "Guest count exceeds what this venue allows",
            StayRejection::DateUnavailable => {
                "Selected dates are not available. Please choose different dates."
            }
        };
        write!(f, "{}", message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayValidation {
    Valid,
    Invalid(StayRejection),
}

impl StayValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, StayValidation::Valid)
    }
}

/// Every calendar day covered by at least one booking, inclusive on both
/// ends. Overlapping or duplicate ranges contribute a day once; input
/// order is irrelevant. Runs to exactly `date_to`, however long the range.
pub fn unavailable_days(ranges: &[BookingRange]) -> BTreeSet<NaiveDate> {
    let mut days = BTreeSet::new();
    for range in ranges {
        let mut current = range.date_from;
        while current <= range.date_to {
            days.insert(current);
            current += Duration::days(1);
        }
    }
    days
}

/// Checks a proposed stay in a fixed order; the first failing check wins
/// and later ones are not evaluated.
pub fn validate_proposed_stay(
    stay: &ProposedStay,
    unavailable: &BTreeSet<NaiveDate>,
    constraints: &VenueConstraints,
    today: NaiveDate,
) -> StayValidation {
    if stay.check_in < today {
        return StayValidation::Invalid(StayRejection::PastCheckIn);
    }
    if stay.check_out <= stay.check_in {
        return StayValidation::Invalid(StayRejection::NonPositiveDuration);
    }
    if stay.guests > constraints.max_guests {
        return StayValidation::Invalid(StayRejection::ExceedsCapacity);
    }
    // Inclusive on the checkout day too, matching unavailable_days.
    let mut current = stay.check_in;
    while current <= stay.check_out {
        if unavailable.contains(&current) {
            return StayValidation::Invalid(StayRejection::DateUnavailable);
        }
        current += Duration::days(1);
    }
    StayValidation::Valid
}

/// Whole-day difference between checkout and check-in. Calendar
/// arithmetic only, so DST shifts cannot produce fractional nights.
/// Zero or negative means no stay is selected, not a free stay.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Defined for nights > 0 only; callers gate on `nights_between` first.
pub fn total_price(nights: i64, price_per_night: f64) -> f64 {
    nights as f64 * price_per_night
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: NaiveDate, to: NaiveDate) -> BookingRange {
        BookingRange {
            date_from: from,
            date_to: to,
            guests: Some(2),
        }
    }

    #[test]
    fn no_bookings_means_no_unavailable_days() {
        assert!(unavailable_days(&[]).is_empty());
    }

    #[test]
    fn single_day_range_contributes_one_day() {
        let d = day(2026, 3, 1);
        let days = unavailable_days(&[range(d, d)]);
        assert_eq!(days.len(), 1);
        assert!(days.contains(&d));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let days = unavailable_days(&[range(day(2026, 2, 15), day(2026, 2, 20))]);
        assert_eq!(days.len(), 6);
        assert!(days.contains(&day(2026, 2, 15)));
        assert!(days.contains(&day(2026, 2, 20)));
        assert!(!days.contains(&day(2026, 2, 21)));
    }

    #[test]
    fn overlapping_ranges_union_without_duplicates() {
        let ranges = [
            range(day(2026, 2, 15), day(2026, 2, 20)),
            range(day(2026, 2, 18), day(2026, 2, 25)),
        ];
        let days = unavailable_days(&ranges);
        assert_eq!(days.len(), 11);

        // Order-independent and idempotent.
        let mut reversed = ranges;
        reversed.reverse();
        assert_eq!(unavailable_days(&reversed), days);
        assert_eq!(unavailable_days(&ranges), days);
    }

    #[test]
    fn duplicate_ranges_count_once() {
        let r = range(day(2026, 4, 1), day(2026, 4, 3));
        assert_eq!(unavailable_days(&[r, r]).len(), 3);
    }

    #[test]
    fn range_crossing_month_end_walks_to_date_to_exactly() {
        let days = unavailable_days(&[range(day(2026, 1, 30), day(2026, 2, 2))]);
        assert_eq!(days.len(), 4);
        assert!(days.contains(&day(2026, 1, 31)));
        assert!(days.contains(&day(2026, 2, 2)));
    }

    #[test]
    fn nights_and_price_match_calendar_difference() {
        assert_eq!(nights_between(day(2026, 2, 15), day(2026, 2, 20)), 5);
        assert_eq!(nights_between(day(2026, 2, 20), day(2026, 2, 20)), 0);
        assert_eq!(nights_between(day(2026, 2, 20), day(2026, 2, 15)), -5);
        assert_eq!(total_price(5, 150.0), 750.0);
    }
}
