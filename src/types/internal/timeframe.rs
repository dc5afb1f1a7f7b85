use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A named, resolvable date-range filter applied to event start times.
/// Every variant resolves to a half-open `[start, end)` interval except
/// `All`, which leaves the query unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
    Date(NaiveDate),
}

impl Timeframe {
    /// Resolve the `timeframe`/`date` query parameters. Unrecognized
    /// timeframe values and unparsable dates silently fall back to `All`.
    pub fn parse(timeframe: Option<&str>, date: Option<&str>) -> Self {
        let raw = timeframe.unwrap_or("all").trim().to_lowercase();
        match raw.as_str() {
            "today" => Timeframe::Today,
            "this-week" | "this_week" => Timeframe::ThisWeek,
            "this-month" | "this_month" => Timeframe::ThisMonth,
            "date" => match date.map(str::trim).filter(|d| !d.is_empty()) {
                Some(raw_date) => match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
                    Ok(parsed) => Timeframe::Date(parsed),
                    Err(_) => Timeframe::All,
                },
                None => Timeframe::All,
            },
            _ => Timeframe::All,
        }
    }

    /// The half-open `[start, end)` bounds relative to `now`, or `None` for
    /// the unbounded view.
    pub fn bounds(&self, now: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self {
            Timeframe::All => None,
            Timeframe::Today => {
                let start = now.date().and_time(NaiveTime::MIN);
                Some((start, start + Duration::days(1)))
            }
            Timeframe::ThisWeek => {
                // Weeks begin on Monday
                let offset = i64::from(now.date().weekday().num_days_from_monday());
                let start = (now.date() - Duration::days(offset)).and_time(NaiveTime::MIN);
                Some((start, start + Duration::days(7)))
            }
            Timeframe::ThisMonth => {
                let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)?;
                let next = if now.month() == 12 {
                    NaiveDate::from_ymd_opt(now.year() + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(now.year(), now.month() + 1, 1)?
                };
                Some((
                    first.and_time(NaiveTime::MIN),
                    next.and_time(NaiveTime::MIN),
                ))
            }
            Timeframe::Date(date) => {
                let start = date.and_time(NaiveTime::MIN);
                Some((start, start + Duration::days(1)))
            }
        }
    }

    /// The canonical query-parameter value, echoed back to the client.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::All => "all",
            Timeframe::Today => "today",
            Timeframe::ThisWeek => "this-week",
            Timeframe::ThisMonth => "this-month",
            Timeframe::Date(_) => "date",
        }
    }

    /// The selected explicit date, if this is a `date` timeframe.
    pub fn selected_date(&self) -> String {
        match self {
            Timeframe::Date(date) => date.format("%Y-%m-%d").to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_named_timeframes() {
        assert_eq!(Timeframe::parse(Some("today"), None), Timeframe::Today);
        assert_eq!(Timeframe::parse(Some("this-week"), None), Timeframe::ThisWeek);
        assert_eq!(Timeframe::parse(Some("this_week"), None), Timeframe::ThisWeek);
        assert_eq!(Timeframe::parse(Some("THIS-MONTH"), None), Timeframe::ThisMonth);
        assert_eq!(Timeframe::parse(None, None), Timeframe::All);
        assert_eq!(Timeframe::parse(Some("soonish"), None), Timeframe::All);
    }

    #[test]
    fn test_parse_explicit_date() {
        assert_eq!(
            Timeframe::parse(Some("date"), Some("2025-03-15")),
            Timeframe::Date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
        );
    }

    #[test]
    fn test_unparsable_date_falls_back_to_all() {
        assert_eq!(Timeframe::parse(Some("date"), Some("15/03/2025")), Timeframe::All);
        assert_eq!(Timeframe::parse(Some("date"), Some("not-a-date")), Timeframe::All);
        assert_eq!(Timeframe::parse(Some("date"), Some("")), Timeframe::All);
        assert_eq!(Timeframe::parse(Some("date"), None), Timeframe::All);
    }

    #[test]
    fn test_today_bounds_cover_the_current_day() {
        let now = at(2025, 6, 14, 15, 30);
        let (start, end) = Timeframe::Today.bounds(now).unwrap();
        assert_eq!(start, at(2025, 6, 14, 0, 0));
        assert_eq!(end, at(2025, 6, 15, 0, 0));
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2025-06-14 is a Saturday; the week began Monday 2025-06-09
        let now = at(2025, 6, 14, 9, 0);
        let (start, end) = Timeframe::ThisWeek.bounds(now).unwrap();
        assert_eq!(start, at(2025, 6, 9, 0, 0));
        assert_eq!(end, at(2025, 6, 16, 0, 0));
    }

    #[test]
    fn test_week_bounds_on_a_monday() {
        let now = at(2025, 6, 9, 0, 0);
        let (start, _) = Timeframe::ThisWeek.bounds(now).unwrap();
        assert_eq!(start, at(2025, 6, 9, 0, 0));
    }

    #[test]
    fn test_month_bounds_mid_year() {
        let now = at(2025, 6, 14, 12, 0);
        let (start, end) = Timeframe::ThisMonth.bounds(now).unwrap();
        assert_eq!(start, at(2025, 6, 1, 0, 0));
        assert_eq!(end, at(2025, 7, 1, 0, 0));
    }

    #[test]
    fn test_month_bounds_roll_the_year_in_december() {
        let now = at(2025, 12, 31, 23, 59);
        let (start, end) = Timeframe::ThisMonth.bounds(now).unwrap();
        assert_eq!(start, at(2025, 12, 1, 0, 0));
        assert_eq!(end, at(2026, 1, 1, 0, 0));
        // The last day of December is inside the interval
        assert!(at(2025, 12, 31, 23, 59) >= start && at(2025, 12, 31, 23, 59) < end);
        // January 1 of the next year is not
        assert!(!(at(2026, 1, 1, 0, 0) < end));
    }

    #[test]
    fn test_all_is_unbounded() {
        assert_eq!(Timeframe::All.bounds(at(2025, 6, 14, 0, 0)), None);
    }

    #[test]
    fn test_selected_date_echo() {
        let tf = Timeframe::parse(Some("date"), Some("2025-03-15"));
        assert_eq!(tf.as_str(), "date");
        assert_eq!(tf.selected_date(), "2025-03-15");
        assert_eq!(Timeframe::Today.selected_date(), "");
    }
}
