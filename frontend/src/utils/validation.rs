use crate::api::{ApiError, ManualTimeEntry};
use chrono::{NaiveDate, NaiveDateTime};
use validator::ValidateEmail;

pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn require(label: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::validation(format!("{} is required", label)))
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), ApiError> {
    require("Email", value)?;
    if value.trim().validate_email() {
        Ok(())
    } else {
        Err(ApiError::validation("Please enter a valid email address"))
    }
}

/// Optional leading `+`, then digits with spaces, dashes, dots or
/// parentheses; 7 to 15 digits overall. Blank is accepted.
pub fn validate_phone(value: &str) -> Result<(), ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let body = value.strip_prefix('+').unwrap_or(value);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'));
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if allowed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ApiError::validation("Please enter a valid phone number"))
    }
}

pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn validate_manual_entry(
    clock_in: &str,
    clock_out: &str,
    notes: &str,
) -> Result<ManualTimeEntry, ApiError> {
    let clock_in_time = parse_datetime_input(clock_in)
        .ok_or_else(|| ApiError::validation("Clock-in time is required"))?;
    let clock_out_time = parse_datetime_input(clock_out)
        .ok_or_else(|| ApiError::validation("Clock-out time is required"))?;
    if clock_out_time <= clock_in_time {
        return Err(ApiError::validation(
            "Clock-out time must be after clock-in time",
        ));
    }
    Ok(ManualTimeEntry {
        clock_in_time,
        clock_out_time,
        notes: optional_text(notes),
    })
}

pub fn validate_date_span(
    start: &str,
    end: &str,
) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let start = parse_date_input(start)
        .ok_or_else(|| ApiError::validation("Start date is required"))?;
    let end =
        parse_date_input(end).ok_or_else(|| ApiError::validation("End date is required"))?;
    if end < start {
        return Err(ApiError::validation("End date cannot be before start date"));
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_entry_with_clock_in_after_clock_out_is_rejected() {
        let err = validate_manual_entry("2024-03-04T17:00", "2024-03-04T09:00", "").unwrap_err();
        assert_eq!(err.code, ApiError::VALIDATION);
        assert!(err.message.contains("after clock-in"));
    }

    #[test]
    fn manual_entry_with_equal_times_is_rejected() {
        assert!(validate_manual_entry("2024-03-04T09:00", "2024-03-04T09:00", "").is_err());
    }

    #[test]
    fn valid_manual_entry_trims_notes() {
        let entry = validate_manual_entry("2024-03-04T09:00", "2024-03-04T17:30", "  forgot  ")
            .unwrap();
        assert_eq!(entry.notes.as_deref(), Some("forgot"));
        assert_eq!(
            (entry.clock_out_time - entry.clock_in_time).num_minutes(),
            8 * 60 + 30
        );
    }

    #[test]
    fn email_checks() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada@").is_err());
        assert_eq!(
            validate_email("   ").unwrap_err().message,
            "Email is required"
        );
    }

    #[test]
    fn phone_checks() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("555-CALL-NOW").is_err());
    }

    #[test]
    fn date_span_must_not_run_backwards() {
        assert!(validate_date_span("2024-03-04", "2024-03-04").is_ok());
        assert!(validate_date_span("2024-03-05", "2024-03-04").is_err());
        assert!(validate_date_span("", "2024-03-04").is_err());
    }
}
