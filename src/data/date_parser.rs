use chrono::{NaiveDateTime, Timelike};

const FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a trip `Start Time` such as `"2017-01-01 09:07:57"`.
/// Fractional seconds are accepted and dropped.
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.with_nanosecond(0).unwrap_or(dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn parses_dataset_formats() {
        let dt = parse_start_time("2017-01-02 08:30:00").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour()), (1, 2, 8));
        assert_eq!(dt.weekday(), Weekday::Mon);

        let frac = parse_start_time("2017-06-05 19:20:01.250").unwrap();
        assert_eq!(frac.second(), 1);
        assert_eq!(frac.nanosecond(), 0);

        assert!(parse_start_time("2017/03/06 08:10:00").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_start_time(""), None);
        assert_eq!(parse_start_time("yesterday"), None);
        assert_eq!(parse_start_time("2017-13-01 00:00:00"), None);
    }
}
