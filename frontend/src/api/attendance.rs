use chrono::NaiveDate;
use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceRecord, AttendanceSummary, ClockStatus, DailyReportEntry,
        ManualTimeEntry, TimeEntry,
    },
};

fn range_query(start: NaiveDate, end: NaiveDate) -> [(&'static str, String); 2] {
    [
        ("startDate", start.format("%Y-%m-%d").to_string()),
        ("endDate", end.format("%Y-%m-%d").to_string()),
    ]
}

fn notes_body(notes: Option<&str>) -> serde_json::Value {
    match notes.map(str::trim).filter(|n| !n.is_empty()) {
        Some(notes) => json!({ "notes": notes }),
        None => json!({}),
    }
}

impl ApiClient {
    pub async fn get_clock_status(&self) -> Result<ClockStatus, ApiError> {
        self.get_json("/TimeEntry/CurrentStatus", "Failed to load clock status")
            .await
    }

    pub async fn clock_in(&self, notes: Option<&str>) -> Result<TimeEntry, ApiError> {
        self.send_json(
            Method::POST,
            "/TimeEntry/ClockIn",
            &notes_body(notes),
            "Failed to clock in",
        )
        .await
    }

    pub async fn clock_out(&self, notes: Option<&str>) -> Result<TimeEntry, ApiError> {
        self.send_json(
            Method::POST,
            "/TimeEntry/ClockOut",
            &notes_body(notes),
            "Failed to clock out",
        )
        .await
    }

    pub async fn get_recent_entries(&self, limit: u32) -> Result<Vec<TimeEntry>, ApiError> {
        self.get_json_with_query(
            "/TimeEntry/Recent",
            &[("limit", limit)],
            "Failed to load recent activity",
        )
        .await
    }

    pub async fn create_manual_entry(&self, entry: &ManualTimeEntry) -> Result<TimeEntry, ApiError> {
        self.send_json(
            Method::POST,
            "/TimeEntry/Manual",
            entry,
            "Failed to save the time entry",
        )
        .await
    }

    pub async fn delete_time_entry(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::DELETE,
            &format!("/TimeEntry/{}", id),
            None,
            "Failed to delete the time entry",
        )
        .await
    }

    pub async fn get_my_attendance(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json_with_query(
            "/Attendance/MyAttendance",
            &range_query(start, end),
            "Failed to load attendance",
        )
        .await
    }

    pub async fn get_attendance_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AttendanceSummary, ApiError> {
        self.get_json_with_query(
            "/Attendance/Summary",
            &range_query(start, end),
            "Failed to load the attendance summary",
        )
        .await
    }

    pub async fn get_daily_report(&self, date: NaiveDate) -> Result<Vec<DailyReportEntry>, ApiError> {
        self.get_json_with_query(
            "/Attendance/DailyReport",
            &[("date", date.format("%Y-%m-%d").to_string())],
            "Failed to load the daily report",
        )
        .await
    }
}
