use crate::{
    api::{ApiError, LeaveRequestInput},
    utils::validation::{optional_text, require, validate_date_span},
};
use chrono::NaiveDate;

pub const LEAVE_TYPES: [&str; 5] = ["Annual", "Sick", "Personal", "Unpaid", "Bereavement"];

pub fn leave_type_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select a type".to_string()))
        .chain(LEAVE_TYPES.iter().map(|t| (t.to_string(), t.to_string())))
        .collect()
}

pub fn build_leave_request(
    leave_type: &str,
    start: &str,
    end: &str,
    reason: &str,
) -> Result<LeaveRequestInput, ApiError> {
    require("Leave type", leave_type)?;
    let (start_date, end_date) = validate_date_span(start, end)?;
    Ok(LeaveRequestInput {
        leave_type: leave_type.trim().to_string(),
        start_date,
        end_date,
        reason: optional_text(reason),
    })
}

/// Calendar days, both ends included.
pub fn leave_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(0) + 1
}

pub fn can_cancel(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case("pending")
}
