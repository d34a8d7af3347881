use chrono::{Duration, NaiveDate, NaiveTime};

use crate::imports::sheet::Cell;

/// Day 0 of spreadsheet serial dates. Offset by the fictitious 1900-02-29 so
/// that serials from real-world files (all >= 60) land on the right day.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap()
}

/// Canonicalize a date cell to `YYYY-MM-DD`. Numeric cells are day serials
/// counted from the spreadsheet epoch; text cells are `DD/MM/YYYY`.
pub fn canonical_date(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Number(serial) => {
            let days = serial.trunc() as i64;
            let date = serial_epoch().checked_add_signed(Duration::days(days))?;
            Some(date.format("%Y-%m-%d").to_string())
        }
        Cell::Text(text) => {
            let mut parts = text.trim().splitn(3, '/');
            let day: u32 = parts.next()?.trim().parse().ok()?;
            let month: u32 = parts.next()?.trim().parse().ok()?;
            let year: i32 = parts.next()?.trim().parse().ok()?;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(date.format("%Y-%m-%d").to_string())
        }
        Cell::Empty => None,
    }
}

/// Canonicalize a time cell to 24-hour `HH:MM`. Numeric cells are fractions
/// of a 24-hour day; text cells are `HH:MM` or `HH:MM:SS`.
pub fn canonical_time(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Number(fraction) => {
            if !(0.0..1.0).contains(fraction) {
                return None;
            }
            let seconds = (fraction * 86_400.0).floor() as i64;
            Some(format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60))
        }
        Cell::Text(text) => {
            let text = text.trim();
            let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
                .ok()?;
            Some(time.format("%H:%M").to_string())
        }
        Cell::Empty => None,
    }
}

/// Meeting time for a home match: thirty minutes before the match time,
/// wrapping across hour and midnight boundaries.
pub fn meeting_time(match_time: &str) -> Option<String> {
    let time = NaiveTime::parse_from_str(match_time, "%H:%M").ok()?;
    let (earlier, _) = time.overflowing_sub_signed(Duration::minutes(30));
    Some(earlier.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_serial_matches_reference_table() {
        // Reference conversions: 45000 = 2023-03-15, 44927 = 2023-01-01.
        assert_eq!(
            canonical_date(&Cell::Number(45000.0)).unwrap(),
            "2023-03-15"
        );
        assert_eq!(
            canonical_date(&Cell::Number(44927.0)).unwrap(),
            "2023-01-01"
        );
    }

    #[test]
    fn text_date_is_reordered() {
        assert_eq!(
            canonical_date(&Cell::Text("15/03/2023".to_string())).unwrap(),
            "2023-03-15"
        );
    }

    #[test]
    fn invalid_text_date_is_rejected() {
        assert_eq!(canonical_date(&Cell::Text("32/13/2023".to_string())), None);
        assert_eq!(canonical_date(&Cell::Text("soon".to_string())), None);
        assert_eq!(canonical_date(&Cell::Empty), None);
    }

    #[test]
    fn time_fraction_converts() {
        assert_eq!(canonical_time(&Cell::Number(0.5)).unwrap(), "12:00");
        assert_eq!(canonical_time(&Cell::Number(0.75)).unwrap(), "18:00");
        // 20:30 = 73800 / 86400
        assert_eq!(
            canonical_time(&Cell::Number(73_800.0 / 86_400.0)).unwrap(),
            "20:30"
        );
    }

    #[test]
    fn text_time_is_truncated_to_minutes() {
        assert_eq!(
            canonical_time(&Cell::Text("10:15:30".to_string())).unwrap(),
            "10:15"
        );
        assert_eq!(
            canonical_time(&Cell::Text("9:05".to_string())).unwrap(),
            "09:05"
        );
    }

    #[test]
    fn meeting_time_is_thirty_minutes_earlier() {
        assert_eq!(meeting_time("10:15").unwrap(), "09:45");
        assert_eq!(meeting_time("10:00").unwrap(), "09:30");
    }

    #[test]
    fn meeting_time_wraps_past_midnight() {
        assert_eq!(meeting_time("00:10").unwrap(), "23:40");
    }
}
