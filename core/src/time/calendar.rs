//! Calendar date/time conversions using O(1) algorithms
//!
//! Implements Howard Hinnant's civil_from_days and days_from_civil algorithms.
//! Reference: http://howardhinnant.github.io/date_algorithms.html
//!
//! Used for epoch-counting clocks and for day-of-month validation when
//! parsing canonical timestamps.

use hal_abstractions::CalendarTime;

const SECONDS_PER_DAY: u64 = 86400;

/// Days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT_DAYS: i64 = 719_468;

/// Check if year is a leap year (Gregorian calendar)
///
/// - Divisible by 4: leap year
/// - EXCEPT divisible by 100: not a leap year
/// - EXCEPT divisible by 400: leap year
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`, 0 for an invalid month
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Convert seconds since 1970-01-01 00:00:00 to calendar time
///
/// **Limitations**:
/// - Valid range: 1970-9999 (years beyond that saturate the u16 field)
/// - No timezone handling; the count is taken as already localized
pub fn unix_to_calendar(unix_secs: u64) -> CalendarTime {
    let days_since_epoch = (unix_secs / SECONDS_PER_DAY) as i64;
    let secs_today = unix_secs % SECONDS_PER_DAY;

    let hour = (secs_today / 3600) as u8;
    let minute = ((secs_today % 3600) / 60) as u8;
    let second = (secs_today % 60) as u8;

    let (year, month, day) = civil_from_days(days_since_epoch);
    let year = u16::try_from(year).unwrap_or(u16::MAX);

    CalendarTime::new(year, month, day, hour, minute, second)
}

/// Convert calendar time to seconds since 1970-01-01 00:00:00
///
/// Dates before the epoch clamp to 0.
pub fn calendar_to_unix(time: &CalendarTime) -> u64 {
    let days_since_epoch = days_from_civil(time.year, time.month, time.day);
    let secs = days_since_epoch * SECONDS_PER_DAY as i64
        + i64::from(time.hour) * 3600
        + i64::from(time.minute) * 60
        + i64::from(time.second);

    u64::try_from(secs).unwrap_or(0)
}

/// Convert days since Unix epoch to civil date (year, month, day)
fn civil_from_days(days_since_epoch: i64) -> (i64, u8, u8) {
    // Shift epoch to 0000-03-01 so the leap day lands at the end of the year
    let z = days_since_epoch + EPOCH_SHIFT_DAYS;

    // 400-year eras
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64; // [0, 146096]

    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]

    // 0 = March, 11 = February
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;

    let year = if m <= 2 { y + 1 } else { y };
    (year, m, d)
}

/// Convert civil date (year, month, day) to days since Unix epoch
fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);

    // March = month 0, February = month 11
    let (y, m) = if m <= 2 { (y - 1, m + 9) } else { (y, m - 3) };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * m + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

    era * 146_097 + doe - EPOCH_SHIFT_DAYS
}
