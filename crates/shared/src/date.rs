use time::{Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(value: impl AsRef<str>) -> crate::Result<Date> {
    let value = value.as_ref().trim();

    Date::parse(value, ISO_DATE).map_err(|_| {
        crate::Error::User(format!("invalid date '{value}', expected YYYY-MM-DD"))
    })
}

pub fn format_date(date: Date) -> String {
    // Formatting a Date with a fixed year-month-day description cannot fail.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn now_timestamp() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp().max(0) as u64
}

/// Sunday-anchored week containing `date`, both ends inclusive.
pub fn week_range(date: Date) -> crate::Result<(Date, Date)> {
    let offset = i64::from(date.weekday().number_days_from_sunday());
    let start = date
        .checked_sub(Duration::days(offset))
        .ok_or_else(|| crate::Error::User(format!("date {date} out of range")))?;
    let end = start
        .checked_add(Duration::days(6))
        .ok_or_else(|| crate::Error::User(format!("date {date} out of range")))?;

    Ok((start, end))
}
