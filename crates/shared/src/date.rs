use time::{Date, Duration, OffsetDateTime, macros::format_description};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: Date,
    pub end: Date,
}

impl Week {
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Returns the week (Monday through Sunday) containing the given date
pub fn week_of(date: Date) -> Week {
    let days_since_monday = date.weekday().number_days_from_monday() as i64;
    let start = date - Duration::days(days_since_monday);

    Week {
        start,
        end: start + Duration::days(6),
    }
}

/// Signed number of whole days from `from` to `to`
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// Parses an ISO 8601 calendar date (YYYY-MM-DD)
pub fn parse_date(value: &str) -> crate::Result<Date> {
    let format = format_description!("[year]-[month]-[day]");

    Ok(Date::parse(value.trim(), &format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_week_of_monday() {
        let week = week_of(date!(2025 - 01 - 20));

        assert_eq!(
            week,
            Week {
                start: date!(2025 - 01 - 20),
                end: date!(2025 - 01 - 26),
            }
        );
    }

    #[test]
    fn test_week_of_wednesday() {
        let week = week_of(date!(2025 - 01 - 22));

        assert_eq!(week.start, date!(2025 - 01 - 20));
        assert_eq!(week.end, date!(2025 - 01 - 26));
    }

    #[test]
    fn test_week_of_sunday() {
        let week = week_of(date!(2025 - 01 - 26));

        assert_eq!(week.start, date!(2025 - 01 - 20));
        assert!(week.contains(date!(2025 - 01 - 26)));
        assert!(!week.contains(date!(2025 - 01 - 27)));
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date!(2025 - 01 - 20), date!(2025 - 01 - 23)), 3);
        assert_eq!(days_between(date!(2025 - 01 - 23), date!(2025 - 01 - 20)), -3);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-02-03").unwrap(), date!(2025 - 02 - 03));
        assert!(parse_date("03/02/2025").is_err());
    }
}
