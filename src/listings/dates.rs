use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Advance `date` by `months` calendar months, or `None` if the result falls
/// outside chrono's range.
///
/// The day of month is kept as is; when the target month is too short the
/// surplus days spill into the next month, so Jan 31 + 1 month is Mar 2 in a
/// leap year and Mar 3 otherwise. Time of day is untouched.
pub fn checked_add_months(date: DateTime<Utc>, months: i32) -> Option<DateTime<Utc>> {
    let total = date
        .year()
        .checked_mul(12)?
        .checked_add(date.month0() as i32)?
        .checked_add(months)?;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day = first.checked_add_signed(Duration::days(i64::from(date.day0())))?;
    Some(Utc.from_utc_datetime(&day.and_time(date.time())))
}

/// Same as [`checked_add_months`], saturating at the edges of the calendar.
pub fn add_months(date: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    checked_add_months(date, months).unwrap_or(if months < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// True once `now` is strictly past `expires_at`.
pub fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > expires_at
}

/// Whole days left until `expires_at`, rounded up. Negative after expiry.
pub fn remaining_days(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expires_at - now).num_milliseconds();
    -((-millis).div_euclid(MILLIS_PER_DAY))
}
