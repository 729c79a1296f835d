use crate::{api::ApiError, utils::{date_range::week_start, validation::parse_date_input}};
use chrono::NaiveDate;

fn status_is(status: &str, expected: &str) -> bool {
    status.trim().eq_ignore_ascii_case(expected)
}

/// Drafts and sheets sent back by a reviewer may be (re)submitted.
pub fn can_submit(status: &str) -> bool {
    status_is(status, "draft") || status_is(status, "rejected")
}

pub fn can_delete(status: &str) -> bool {
    status_is(status, "draft")
}

/// Any picked day is snapped back to the Monday of its week.
pub fn parse_week_start(raw: &str) -> Result<NaiveDate, ApiError> {
    parse_date_input(raw)
        .map(week_start)
        .ok_or_else(|| ApiError::validation("Week start date is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_and_delete_follow_status() {
        assert!(can_submit("Draft"));
        assert!(can_submit("Rejected"));
        assert!(!can_submit("Submitted"));
        assert!(!can_submit("Approved"));
        assert!(can_delete("draft"));
        assert!(!can_delete("Rejected"));
    }

    #[test]
    fn week_start_snaps_to_monday() {
        assert_eq!(
            parse_week_start("2025-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
        );
        assert_eq!(
            parse_week_start("").unwrap_err().message,
            "Week start date is required"
        );
    }
}
