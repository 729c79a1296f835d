use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, DecisionRequest, LeaveRequest, LeaveRequestInput},
};

impl ApiClient {
    pub async fn get_my_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_json("/LeaveRequest/MyRequests", "Failed to load leave requests")
            .await
    }

    pub async fn create_leave_request(
        &self,
        input: &LeaveRequestInput,
    ) -> Result<LeaveRequest, ApiError> {
        self.send_json(
            Method::POST,
            "/LeaveRequest",
            input,
            "Failed to submit the leave request",
        )
        .await
    }

    pub async fn cancel_leave_request(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::POST,
            &format!("/LeaveRequest/{}/Cancel", id),
            None,
            "Failed to cancel the leave request",
        )
        .await
    }

    pub async fn get_pending_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_json("/LeaveRequest/Pending", "Failed to load pending leave requests")
            .await
    }

    pub async fn approve_leave_request(
        &self,
        id: i64,
        decision: &DecisionRequest,
    ) -> Result<(), ApiError> {
        self.send_unit(
            Method::POST,
            &format!("/LeaveRequest/{}/Approve", id),
            Some(decision),
            "Failed to approve the leave request",
        )
        .await
    }

    pub async fn reject_leave_request(
        &self,
        id: i64,
        decision: &DecisionRequest,
    ) -> Result<(), ApiError> {
        self.send_unit(
            Method::POST,
            &format!("/LeaveRequest/{}/Reject", id),
            Some(decision),
            "Failed to reject the leave request",
        )
        .await
    }
}
