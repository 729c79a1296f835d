use chrono::NaiveDate;
use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, DecisionRequest, Timesheet},
};

impl ApiClient {
    pub async fn get_my_timesheets(&self) -> Result<Vec<Timesheet>, ApiError> {
        self.get_json("/Timesheet/MyTimesheets", "Failed to load timesheets")
            .await
    }

    pub async fn generate_timesheet(&self, week_start: NaiveDate) -> Result<Timesheet, ApiError> {
        self.send_json(
            Method::POST,
            "/Timesheet/Generate",
            &json!({ "weekStartDate": week_start.format("%Y-%m-%d").to_string() }),
            "Failed to create the timesheet",
        )
        .await
    }

    pub async fn submit_timesheet(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::POST,
            &format!("/Timesheet/{}/Submit", id),
            None,
            "Failed to submit the timesheet",
        )
        .await
    }

    pub async fn approve_timesheet(&self, id: i64, decision: &DecisionRequest) -> Result<(), ApiError> {
        self.send_unit(
            Method::POST,
            &format!("/Timesheet/{}/Approve", id),
            Some(decision),
            "Failed to approve the timesheet",
        )
        .await
    }

    pub async fn reject_timesheet(&self, id: i64, decision: &DecisionRequest) -> Result<(), ApiError> {
        self.send_unit(
            Method::POST,
            &format!("/Timesheet/{}/Reject", id),
            Some(decision),
            "Failed to reject the timesheet",
        )
        .await
    }

    pub async fn get_pending_timesheets(&self) -> Result<Vec<Timesheet>, ApiError> {
        self.get_json(
            "/Timesheet/PendingApproval",
            "Failed to load timesheets awaiting approval",
        )
        .await
    }

    pub async fn delete_timesheet(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::DELETE,
            &format!("/Timesheet/{}", id),
            None,
            "Failed to delete the timesheet",
        )
        .await
    }
}
