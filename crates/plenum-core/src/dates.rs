use anyhow::{bail, Context};
use time::{Date, Month};

/// Parse a strict `YYYY-MM-DD` string into a calendar-validated [`Date`].
///
/// Rejects anything that is not exactly ten characters with numeric
/// components, and impossible dates (2016-13-40).
pub fn parse_iso_date(s: &str) -> anyhow::Result<Date> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        bail!("invalid date {s:?}: expected YYYY-MM-DD");
    }
    let year: i32 = s[..4]
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month: u8 = s[5..7]
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let day: u8 = s[8..10]
        .parse()
        .with_context(|| format!("invalid day in {s:?}"))?;
    calendar_date(year, month, day).with_context(|| format!("invalid date {s:?}"))
}

/// Build a [`Date`] from numeric components, validating the calendar.
pub fn calendar_date(year: i32, month: u8, day: u8) -> anyhow::Result<Date> {
    let month = Month::try_from(month)?;
    Ok(Date::from_calendar_date(year, month, day)?)
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Inclusive calendar-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Date,
    pub end: Date,
}

impl DateWindow {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let d = parse_iso_date("2016-03-04").unwrap();
        assert_eq!(format_iso_date(d), "2016-03-04");
    }

    #[test]
    fn parse_rejects_shape() {
        assert!(parse_iso_date("2016/03/04").is_err());
        assert!(parse_iso_date("2016-3-4").is_err());
        assert!(parse_iso_date("20160304").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn parse_rejects_impossible_calendar_dates() {
        assert!(parse_iso_date("2016-13-01").is_err());
        assert!(parse_iso_date("2016-02-30").is_err());
        assert!(parse_iso_date("2016-00-10").is_err());
    }

    #[test]
    fn window_is_inclusive() {
        let w = DateWindow::new(
            parse_iso_date("2015-01-01").unwrap(),
            parse_iso_date("2025-09-30").unwrap(),
        );
        assert!(w.contains(parse_iso_date("2015-01-01").unwrap()));
        assert!(w.contains(parse_iso_date("2025-09-30").unwrap()));
        assert!(w.contains(parse_iso_date("2016-03-04").unwrap()));
        assert!(!w.contains(parse_iso_date("2014-12-31").unwrap()));
        assert!(!w.contains(parse_iso_date("2025-10-01").unwrap()));
    }
}
