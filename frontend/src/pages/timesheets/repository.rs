use crate::{
    api::{ApiClient, ApiError, DecisionRequest, Timesheet},
    state::approval::Decision,
};
use chrono::NaiveDate;

pub async fn load_my_timesheets(api: &ApiClient) -> Result<Vec<Timesheet>, ApiError> {
    let mut sheets = api.get_my_timesheets().await?;
    sheets.sort_by(|a, b| b.week_start_date.cmp(&a.week_start_date));
    Ok(sheets)
}

pub async fn generate(api: &ApiClient, week_start: NaiveDate) -> Result<Timesheet, ApiError> {
    api.generate_timesheet(week_start).await
}

pub async fn submit(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.submit_timesheet(id).await
}

pub async fn remove(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete_timesheet(id).await
}

pub async fn load_pending(api: &ApiClient) -> Result<Vec<Timesheet>, ApiError> {
    api.get_pending_timesheets().await
}

pub async fn decide(
    api: &ApiClient,
    id: i64,
    decision: Decision,
    comments: &str,
) -> Result<(), ApiError> {
    let request = DecisionRequest::with_comments(comments);
    match decision {
        Decision::Approve => api.approve_timesheet(id, &request).await,
        Decision::Reject => api.reject_timesheet(id, &request).await,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::api_for;
    use serde_json::json;

    #[tokio::test]
    async fn my_timesheets_are_newest_first() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Timesheet/MyTimesheets");
            then.status(200).json_body(json!([
                { "id": 1, "weekStartDate": "2024-02-26", "weekEndDate": "2024-03-03", "status": "Approved" },
                { "id": 2, "weekStartDate": "2024-03-04", "weekEndDate": "2024-03-10", "status": "Draft" }
            ]));
        });

        let sheets = load_my_timesheets(&api_for(&server)).await.unwrap();
        let ids: Vec<i64> = sheets.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn reject_sends_trimmed_comments() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/Timesheet/4/Reject");
            then.status(204).body("");
        });

        decide(&api_for(&server), 4, Decision::Reject, "  Missing Friday  ")
            .await
            .unwrap();
        let body = server.received().pop().and_then(|r| r.json);
        assert_eq!(body, Some(json!({ "comments": "Missing Friday" })));
    }

    #[tokio::test]
    async fn approve_without_comments_sends_empty_object() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/Timesheet/4/Approve");
            then.status(204).body("");
        });

        decide(&api_for(&server), 4, Decision::Approve, "").await.unwrap();
        assert_eq!(server.hits(POST, "/api/Timesheet/4/Approve"), 1);
        let body = server.received().pop().and_then(|r| r.json);
        assert_eq!(body, Some(json!({})));
    }
}
