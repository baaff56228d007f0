use std::collections::BTreeSet;

use chrono::NaiveDate;
use venueBooker::service::availability::{
    unavailable_days, validate_proposed_stay, BookingRange, ProposedStay, StayRejection,
    StayValidation, VenueConstraints,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn constraints() -> VenueConstraints {
    VenueConstraints {
        max_guests: 4,
        price: 150.0,
    }
}

const TODAY: (i32, u32, u32) = (2026, 2, 1);

fn today() -> NaiveDate {
    day(TODAY.0, TODAY.1, TODAY.2)
}

#[test]
fn past_check_in_is_rejected() {
    let stay = ProposedStay {
        check_in: day(2026, 1, 31),
        check_out: day(2026, 2, 5),
        guests: 2,
    };
    let result = validate_proposed_stay(&stay, &BTreeSet::new(), &constraints(), today());
    assert_eq!(result, StayValidation::Invalid(StayRejection::PastCheckIn));
}

#[test]
fn zero_night_stay_is_rejected() {
    let stay = ProposedStay {
        check_in: day(2026, 2, 10),
        check_out: day(2026, 2, 10),
        guests: 2,
    };
    let result = validate_proposed_stay(&stay, &BTreeSet::new(), &constraints(), today());
    assert_eq!(
        result,
        StayValidation::Invalid(StayRejection::NonPositiveDuration)
    );
}

#[test]
fn reversed_dates_are_rejected_as_non_positive() {
    let stay = ProposedStay {
        check_in: day(2026, 2, 10),
        check_out: day(2026, 2, 8),
        guests: 2,
    };
    let result = validate_proposed_stay(&stay, &BTreeSet::new(), &constraints(), today());
    assert_eq!(
        result,
        StayValidation::Invalid(StayRejection::NonPositiveDuration)
    );
}

#[test]
fn over_capacity_is_rejected_even_with_open_dates() {
    let stay = ProposedStay {
        check_in: day(2026, 2, 10),
        check_out: day(2026, 2, 12),
        guests: 5,
    };
    let result = validate_proposed_stay(&stay, &BTreeSet::new(), &constraints(), today());
    assert_eq!(result, StayValidation::Invalid(StayRejection::ExceedsCapacity));
}

#[test]
fn overlap_with_booked_day_is_rejected() {
    let unavailable = unavailable_days(&[BookingRange {
        date_from: day(2026, 2, 15),
        date_to: day(2026, 2, 20),
        guests: None,
    }]);
    let stay = ProposedStay {
        check_in: day(2026, 2, 14),
        check_out: day(2026, 2, 16),
        guests: 2,
    };
    let result = validate_proposed_stay(&stay, &unavailable, &constraints(), today());
    assert_eq!(result, StayValidation::Invalid(StayRejection::DateUnavailable));
}

// The checkout day of an existing booking is itself unavailable, so a new
// stay cannot check in on it. Same-day turnover is not supported.
#[test]
fn check_in_on_anothers_checkout_day_is_rejected() {
    let unavailable = unavailable_days(&[BookingRange {
        date_from: day(2026, 2, 15),
        date_to: day(2026, 2, 20),
        guests: None,
    }]);
    let stay = ProposedStay {
        check_in: day(2026, 2, 20),
        check_out: day(2026, 2, 23),
        guests: 2,
    };
    let result = validate_proposed_stay(&stay, &unavailable, &constraints(), today());
    assert_eq!(result, StayValidation::Invalid(StayRejection::DateUnavailable));
}

// The proposed checkout day is also checked against the set: ending a new
// stay on the first day of an existing booking is refused too.
#[test]
fn check_out_onto_booked_day_is_rejected() {
    let unavailable = unavailable_days(&[BookingRange {
        date_from: day(2026, 2, 15),
        date_to: day(2026, 2, 20),
        guests: None,
    }]);
    let stay = ProposedStay {
        check_in: day(2026, 2, 12),
        check_out: day(2026, 2, 15),
        guests: 2,
    };
    let result = validate_proposed_stay(&stay, &unavailable, &constraints(), today());
    assert_eq!(result, StayValidation::Invalid(StayRejection::DateUnavailable));
}

#[test]
fn open_future_stay_within_capacity_is_valid() {
    let unavailable = unavailable_days(&[BookingRange {
        date_from: day(2026, 2, 15),
        date_to: day(2026, 2, 20),
        guests: None,
    }]);
    let stay = ProposedStay {
        check_in: day(2026, 2, 21),
        check_out: day(2026, 2, 25),
        guests: 4,
    };
    let result = validate_proposed_stay(&stay, &unavailable, &constraints(), today());
    assert_eq!(result, StayValidation::Valid);
    assert!(result.is_valid());
}

#[test]
fn check_in_today_is_not_past() {
    let stay = ProposedStay {
        check_in: today(),
        check_out: day(2026, 2, 3),
        guests: 1,
    };
    let result = validate_proposed_stay(&stay, &BTreeSet::new(), &constraints(), today());
    assert_eq!(result, StayValidation::Valid);
}

// First failing check wins: a stay that is both past-dated and over
// capacity reports the past check-in, nothing else.
#[test]
fn past_check_in_takes_precedence_over_capacity() {
    let stay = ProposedStay {
        check_in: day(2026, 1, 20),
        check_out: day(2026, 1, 25),
        guests: 99,
    };
    let result = validate_proposed_stay(&stay, &BTreeSet::new(), &constraints(), today());
    assert_eq!(result, StayValidation::Invalid(StayRejection::PastCheckIn));
}

#[test]
fn capacity_takes_precedence_over_date_overlap() {
    let unavailable = unavailable_days(&[BookingRange {
        date_from: day(2026, 2, 10),
        date_to: day(2026, 2, 12),
        guests: None,
    }]);
    let stay = ProposedStay {
        check_in: day(2026, 2, 10),
        check_out: day(2026, 2, 12),
        guests: 5,
    };
    let result = validate_proposed_stay(&stay, &unavailable, &constraints(), today());
    assert_eq!(result, StayValidation::Invalid(StayRejection::ExceedsCapacity));
}

#[test]
fn rejection_messages_are_user_readable() {
    assert_eq!(
        StayRejection::DateUnavailable.to_string(),
        "Selected dates are not available. Please choose different dates."
    );
    assert!(StayRejection::PastCheckIn.to_string().contains("past"));
}
