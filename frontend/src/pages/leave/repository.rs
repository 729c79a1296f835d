use crate::{
    api::{ApiClient, ApiError, DecisionRequest, LeaveRequest, LeaveRequestInput},
    state::approval::Decision,
};

pub async fn load_my_requests(api: &ApiClient) -> Result<Vec<LeaveRequest>, ApiError> {
    let mut requests = api.get_my_leave_requests().await?;
    requests.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    Ok(requests)
}

pub async fn create(api: &ApiClient, input: LeaveRequestInput) -> Result<LeaveRequest, ApiError> {
    api.create_leave_request(&input).await
}

pub async fn cancel(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.cancel_leave_request(id).await
}

pub async fn load_pending(api: &ApiClient) -> Result<Vec<LeaveRequest>, ApiError> {
    api.get_pending_leave_requests().await
}

pub async fn decide(
    api: &ApiClient,
    id: i64,
    decision: Decision,
    comments: &str,
) -> Result<(), ApiError> {
    let request = DecisionRequest::with_comments(comments);
    match decision {
        Decision::Approve => api.approve_leave_request(id, &request).await,
        Decision::Reject => api.reject_leave_request(id, &request).await,
    }
}
