use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

pub const APP_TIME_ZONE: Tz = chrono_tz::Atlantic::Cape_Verde;

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Renders a backend timestamp as `dd/mm/yyyy HH:MM` in Cape Verde time.
/// Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(&APP_TIME_ZONE)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        None => raw.to_string(),
    }
}

pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(&APP_TIME_ZONE).format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_timestamp_is_shifted_to_cape_verde() {
        assert_eq!(format_timestamp("2024-03-10T10:30:00Z"), "10/03/2024 09:30");
    }

    #[test]
    fn naive_timestamp_is_treated_as_utc() {
        assert_eq!(format_timestamp("2024-03-10T00:30:00.123456"), "09/03/2024 23:30");
    }

    #[test]
    fn date_only_formats_as_local_day() {
        assert_eq!(format_date("2024-01-02T12:00:00+00:00"), "02/01/2024");
    }

    #[test]
    fn garbage_is_passed_through() {
        assert_eq!(format_timestamp("ontem"), "ontem");
    }
}
