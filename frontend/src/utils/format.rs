use crate::api::AttendanceRecord;
use chrono::{NaiveDate, NaiveDateTime};

pub fn calculate_week_total(records: &[AttendanceRecord]) -> f64 {
    records.iter().filter_map(|r| r.total_hours).sum()
}

fn hours_number(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn format_hours_short(hours: f64) -> String {
    format!("{}h", hours_number(hours))
}

pub fn format_hours_long(hours: f64) -> String {
    format!("{} hrs", hours_number(hours))
}

pub fn format_optional_hours(hours: Option<f64>) -> String {
    hours.map(format_hours_short).unwrap_or_else(|| "-".into())
}

/// Running timer text, `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_elapsed(clock_in: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = (now - clock_in).num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_time(value: Option<NaiveDateTime>) -> String {
    value
        .map(|v| v.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".into())
}

pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%b %d, %Y %H:%M").to_string()
}

pub fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (done.min(total) * 100) / total;
    u8::try_from(pct).unwrap_or(100)
}

pub fn status_color(status: &str) -> &'static str {
    match status.trim().to_ascii_lowercase().as_str() {
        "approved" | "active" | "present" | "completed" => {
            "bg-status-success-bg text-status-success-text"
        }
        "pending" | "submitted" | "late" => "bg-status-warning-bg text-status-warning-text",
        "rejected" | "absent" | "cancelled" => "bg-status-error-bg text-status-error-text",
        "onleave" | "on leave" => "bg-status-info-bg text-status-info-text",
        _ => "bg-status-neutral-bg text-status-neutral-text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn record(hours: Option<f64>) -> AttendanceRecord {
        AttendanceRecord {
            work_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            clock_in_time: Some(at(9, 0, 0)),
            clock_out_time: Some(at(17, 0, 0)),
            total_hours: hours,
            status: Some("Present".into()),
        }
    }

    #[test]
    fn week_total_of_sample_record_formats_both_ways() {
        let total = calculate_week_total(&[record(Some(8.0))]);
        assert_eq!(total, 8.0);
        assert_eq!(format_hours_short(total), "8h");
        assert_eq!(format_hours_long(total), "8 hrs");
    }

    #[test]
    fn missing_hours_count_as_zero() {
        let total = calculate_week_total(&[record(Some(7.5)), record(None), record(Some(1.0))]);
        assert_eq!(format_hours_short(total), "8.5h");
        assert_eq!(calculate_week_total(&[]), 0.0);
    }

    #[test]
    fn fractional_hours_keep_one_decimal() {
        assert_eq!(format_hours_short(7.5), "7.5h");
        assert_eq!(format_hours_long(7.25), "7.3 hrs");
        assert_eq!(format_hours_short(7.96), "8h");
    }

    #[test]
    fn elapsed_timer_is_zero_padded() {
        assert_eq!(format_elapsed(at(9, 0, 0), at(10, 5, 7)), "01:05:07");
        assert_eq!(format_elapsed(at(9, 0, 0), at(8, 0, 0)), "00:00:00");
    }

    #[test]
    fn progress_handles_empty_and_complete() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(4, 4), 100);
    }

    #[test]
    fn status_colors_are_case_insensitive() {
        assert_eq!(status_color("Approved"), status_color("approved"));
        assert!(status_color("Rejected").contains("error"));
        assert!(status_color("Submitted").contains("warning"));
        assert!(status_color("Draft").contains("neutral"));
        assert_eq!(status_color("Inactive"), status_color("Draft"));
    }
}
