//! Random date helpers.
//!
//! RULE: the generator core never reads the wall clock. Binaries pass an
//! anchor date, so a (seed, anchor) pair fully determines every generated
//! timestamp.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{DatasetError, DatasetResult};
use crate::rng::StageRng;

/// Random datetime between `anchor - start_days_ago` and
/// `anchor - end_days_ago`, with a random time-of-day offset.
///
/// The range check is the generator's one validated input: a start that
/// precedes the end fails immediately.
pub fn random_datetime_within(
    anchor: NaiveDateTime,
    start_days_ago: i64,
    end_days_ago: i64,
    rng: &mut StageRng,
) -> DatasetResult<NaiveDateTime> {
    if start_days_ago < end_days_ago {
        return Err(DatasetError::InvalidDateRange {
            start_days_ago,
            end_days_ago,
        });
    }
    let days_offset = rng.int_in(end_days_ago as u64, start_days_ago as u64) as i64;
    let seconds_offset = rng.int_in(0, 86_400) as i64;
    Ok(anchor - Duration::days(days_offset) - Duration::seconds(seconds_offset))
}

/// Random date within the last `days_back` days of `anchor`, inclusive.
pub fn random_date_within(anchor: NaiveDate, days_back: i64, rng: &mut StageRng) -> NaiveDate {
    let offset = rng.int_in(0, days_back as u64) as i64;
    anchor - Duration::days(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn datetimes_fall_inside_the_window() {
        let mut rng = RngBank::new(42).for_stage(StageSlot::Order);
        let anchor = anchor();
        let floor = anchor - Duration::days(730) - Duration::seconds(86_400);
        for _ in 0..500 {
            let dt = random_datetime_within(anchor, 730, 0, &mut rng).unwrap();
            assert!(dt <= anchor, "{dt} is after the anchor");
            assert!(dt >= floor, "{dt} is before the window floor");
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut rng = RngBank::new(42).for_stage(StageSlot::Order);
        let err = random_datetime_within(anchor(), 0, 10, &mut rng).unwrap_err();
        assert!(err.to_string().contains("must be >="), "unexpected error: {err}");
    }

    #[test]
    fn dates_fall_inside_the_window() {
        let mut rng = RngBank::new(9).for_stage(StageSlot::Customer);
        let anchor = anchor().date();
        for _ in 0..500 {
            let d = random_date_within(anchor, 1825, &mut rng);
            assert!(d <= anchor);
            assert!(d >= anchor - Duration::days(1825));
        }
    }
}
