// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Interprets a formatted timestamp cell ("YYYY-MM-DD HH:MM") as an
/// Excel date serial. Returns None when the cell is not a timestamp, in
/// which case the writer falls back to text.
pub(crate) fn parse_to_excel_serial(s: &str) -> Option<f64> {
    let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()?;
    Some(naive_datetime_to_excel_serial(&dt))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serial() {
        // 1900-01-01 00:00 is serial 2 in the 1899-12-30 convention
        assert_eq!(parse_to_excel_serial("1900-01-01 00:00"), Some(2.0));
    }

    #[test]
    fn non_timestamp_is_none() {
        assert_eq!(parse_to_excel_serial("Sin descripción"), None);
    }
}
