use chrono::{NaiveDate, Utc};

/// Date of puzzle #1.
///
/// Every game number is counted from this date; moving it renumbers all puzzles.
pub const EPOCH: NaiveDate = NaiveDate::from_ymd_opt(2025, 1, 29).unwrap();

/// Returns the sequential puzzle number for `date`.
///
/// [`EPOCH`] is game 1 and each following calendar day adds one. Dates before the
/// epoch yield zero or negative numbers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use daily20_engine::{EPOCH, game_number};
///
/// assert_eq!(game_number(EPOCH), 1);
/// assert_eq!(game_number(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()), 4);
/// ```
#[must_use]
pub fn game_number(date: NaiveDate) -> i64 {
    (date - EPOCH).num_days() + 1
}

/// Today's puzzle date, taken from the UTC calendar.
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
