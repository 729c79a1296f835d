#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::state::session::{SessionStore, EMPLOYEE_KEY, TOKEN_KEY, USER_KEY};
use chrono::NaiveDate;
use serde_json::json;

fn user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "email": "ada@example.com",
        "role": "Admin",
        "departmentId": 2,
        "employeeId": 10,
        "fullName": "Ada Lovelace"
    })
}

fn employee_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "departmentId": 2,
        "departmentName": "Engineering",
        "position": "Engineer",
        "hireDate": "2024-03-01",
        "status": "Active"
    })
}

fn department_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Engineering",
        "description": "Builds things",
        "managerId": 10,
        "managerName": "Ada Lovelace",
        "employeeCount": 12
    })
}

fn time_entry_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "employeeId": 10,
        "clockInTime": "2025-01-06T09:00:00",
        "clockOutTime": "2025-01-06T17:00:00",
        "totalHours": 8.0
    })
}

fn timesheet_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employeeId": 10,
        "employeeName": "Ada Lovelace",
        "weekStartDate": "2025-01-06",
        "weekEndDate": "2025-01-12",
        "totalHours": 40.0,
        "status": status
    })
}

fn leave_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "employeeId": 10,
        "leaveType": "Annual",
        "startDate": "2025-02-03",
        "endDate": "2025-02-05",
        "reason": "Trip",
        "status": "Pending"
    })
}

fn task_json(id: i64, done: bool) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Sign contract",
        "category": "Paperwork",
        "dueDate": "2025-01-10",
        "isCompleted": done,
        "requiresDocument": true
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::with_session(SessionStore::in_memory()).with_base_url(server.url("/api"))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn login_persists_session_and_logout_clears_it() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/Auth/Login");
        then.status(200).json_body(json!({
            "token": "jwt-token",
            "user": user_json(),
            "employee": employee_json(10)
        }));
    });

    let client = api_client(&server);
    let response = client
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.user.role, "Admin");

    let session = client.session();
    assert_eq!(session.raw(TOKEN_KEY).as_deref(), Some("jwt-token"));
    assert!(session.raw(USER_KEY).unwrap().contains("ada@example.com"));
    assert!(session.raw(EMPLOYEE_KEY).unwrap().contains("Lovelace"));
    let received = server.received();
    assert_eq!(
        received[0].json,
        Some(json!({ "email": "ada@example.com", "password": "secret" }))
    );

    client.logout();
    assert!(session.raw(TOKEN_KEY).is_none());
    assert!(session.raw(USER_KEY).is_none());
    assert!(session.raw(EMPLOYEE_KEY).is_none());
}

#[tokio::test]
async fn failed_login_surfaces_server_message_and_stores_nothing() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/Auth/Login");
        then.status(401)
            .json_body(json!({ "message": "Invalid email or password" }));
    });

    let client = api_client(&server);
    let err = client
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "Invalid email or password");
    assert!(err.is_unauthorized());
    assert!(client.session().raw(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn bearer_token_is_attached_only_when_a_session_exists() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Department/All");
        then.status(200).json_body(json!([department_json(1)]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Auth/Login");
        then.status(200).json_body(json!({
            "token": "jwt-token",
            "user": user_json(),
            "employee": null
        }));
    });

    let client = api_client(&server);
    client.list_departments().await.unwrap();
    client
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    client.list_departments().await.unwrap();

    let received = server.received();
    assert_eq!(received.len(), 3);
    assert!(received[0].authorization.is_none());
    assert_eq!(received[2].authorization.as_deref(), Some("Bearer jwt-token"));
    assert!(received.iter().all(|r| r.request_id.is_some()));
    assert_ne!(received[0].request_id, received[2].request_id);
}

#[tokio::test]
async fn attendance_endpoints_send_iso_dates_and_parse_payloads() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Attendance/MyAttendance");
        then.status(200).json_body(json!([{
            "workDate": "2025-01-06",
            "clockInTime": "2025-01-06T09:00:00",
            "clockOutTime": "2025-01-06T17:00:00",
            "totalHours": 8
        }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/Attendance/Summary");
        then.status(200).json_body(json!({
            "totalDaysPresent": 5,
            "totalHours": 40.0,
            "averageHoursPerDay": 8.0,
            "lateArrivals": 1,
            "absences": 0
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/Attendance/DailyReport");
        then.status(200).json_body(json!([{
            "employeeId": 10,
            "employeeName": "Ada Lovelace",
            "status": "Present"
        }]));
    });

    let client = api_client(&server);
    let records = client
        .get_my_attendance(date(2025, 1, 6), date(2025, 1, 12))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].total_hours, Some(8.0));

    let summary = client
        .get_attendance_summary(date(2025, 1, 1), date(2025, 1, 31))
        .await
        .unwrap();
    assert_eq!(summary.late_arrivals, 1);

    let report = client.get_daily_report(date(2025, 1, 6)).await.unwrap();
    assert_eq!(report[0].status, "Present");

    let received = server.received();
    assert_eq!(
        received[0].query.as_deref(),
        Some("startDate=2025-01-06&endDate=2025-01-12")
    );
    assert_eq!(received[2].query.as_deref(), Some("date=2025-01-06"));
}

#[tokio::test]
async fn time_entry_endpoints_cover_clock_cycle() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/TimeEntry/CurrentStatus");
        then.status(200).json_body(json!({
            "isClockedIn": true,
            "timeEntryId": 5,
            "clockInTime": "2025-01-06T09:00:00"
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/TimeEntry/ClockIn");
        then.status(200).json_body(time_entry_json(5));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/TimeEntry/ClockOut");
        then.status(200).json_body(time_entry_json(5));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/TimeEntry/Recent");
        then.status(200)
            .json_body(json!([time_entry_json(5), time_entry_json(4)]));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/TimeEntry/4");
        then.status(204).body("");
    });

    let client = api_client(&server);
    let status = client.get_clock_status().await.unwrap();
    assert!(status.is_clocked_in);
    assert_eq!(status.time_entry_id, Some(5));

    client.clock_in(Some("  ")).await.unwrap();
    client.clock_out(Some("done for today")).await.unwrap();
    let recent = client.get_recent_entries(10).await.unwrap();
    assert_eq!(recent.len(), 2);
    client.delete_time_entry(4).await.unwrap();

    let received = server.received();
    assert_eq!(received[1].json, Some(json!({})));
    assert_eq!(received[2].json, Some(json!({ "notes": "done for today" })));
    assert_eq!(received[3].query.as_deref(), Some("limit=10"));
}

#[tokio::test]
async fn failures_fall_back_to_operation_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/TimeEntry/ClockIn");
        then.status(500).body("Internal Server Error");
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/TimeEntry/ClockOut");
        then.status(400)
            .json_body(json!({ "message": "You are not clocked in" }));
    });

    let client = api_client(&server);
    let err = client.clock_in(None).await.unwrap_err();
    assert_eq!(err.message, "Failed to clock in");
    assert_eq!(err.code, "SERVER_ERROR");

    let err = client.clock_out(None).await.unwrap_err();
    assert_eq!(err.message, "You are not clocked in");
    assert_eq!(err.code, "BAD_REQUEST");
}

#[tokio::test]
async fn transport_failures_are_reported_as_request_failed() {
    let server = MockServer::start_async().await;
    let client = api_client(&server);
    let err = client.get_my_timesheets().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert_eq!(err.message, "Failed to load timesheets");
}

#[tokio::test]
async fn malformed_success_payload_uses_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Department/All");
        then.status(200).json_body(json!({ "unexpected": true }));
    });
    let err = api_client(&server).list_departments().await.unwrap_err();
    assert_eq!(err.message, "Failed to load departments");
    assert_eq!(err.code, "UNKNOWN");
}

#[tokio::test]
async fn timesheet_workflow_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Timesheet/MyTimesheets");
        then.status(200)
            .json_body(json!([timesheet_json(1, "Draft")]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Timesheet/Generate");
        then.status(200).json_body(timesheet_json(2, "Draft"));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Timesheet/1/Submit");
        then.status(200).json_body(json!({ "message": "Submitted" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/Timesheet/PendingApproval");
        then.status(200)
            .json_body(json!([timesheet_json(1, "Submitted")]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Timesheet/1/Approve");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Timesheet/3/Reject");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/Timesheet/2");
        then.status(204).body("");
    });

    let client = api_client(&server);
    assert_eq!(client.get_my_timesheets().await.unwrap()[0].status, "Draft");
    let generated = client.generate_timesheet(date(2025, 1, 6)).await.unwrap();
    assert_eq!(generated.id, 2);
    client.submit_timesheet(1).await.unwrap();
    assert_eq!(client.get_pending_timesheets().await.unwrap().len(), 1);
    client
        .approve_timesheet(1, &DecisionRequest::default())
        .await
        .unwrap();
    client
        .reject_timesheet(3, &DecisionRequest::with_comments("Missing Friday"))
        .await
        .unwrap();
    client.delete_timesheet(2).await.unwrap();

    let received = server.received();
    assert_eq!(received[1].json, Some(json!({ "weekStartDate": "2025-01-06" })));
    assert_eq!(received[5].json, Some(json!({ "comments": "Missing Friday" })));
}

#[tokio::test]
async fn department_crud_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Department/All");
        then.status(200)
            .json_body(json!([department_json(1), department_json(2)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/Department/1");
        then.status(200).json_body(department_json(1));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Department");
        then.status(201).json_body(department_json(3));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/Department/3");
        then.status(200).json_body(department_json(3));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/Department/3");
        then.status(200).json_body(json!({}));
    });

    let client = api_client(&server);
    assert_eq!(client.list_departments().await.unwrap().len(), 2);
    assert_eq!(client.get_department(1).await.unwrap().employee_count, 12);
    let input = DepartmentInput {
        name: "Research".into(),
        description: None,
        manager_id: Some(10),
    };
    assert_eq!(client.create_department(&input).await.unwrap().id, 3);
    client.update_department(3, &input).await.unwrap();
    client.delete_department(3).await.unwrap();
    assert_eq!(
        server.received()[2].json,
        Some(json!({ "name": "Research", "managerId": 10 }))
    );
}

#[tokio::test]
async fn employee_endpoints_pass_filters() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Employee/All");
        then.status(200).json_body(json!([employee_json(10)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/Employee/10");
        then.status(200).json_body(employee_json(10));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Employee");
        then.status(200).json_body(employee_json(11));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/Employee/11");
        then.status(200).json_body(employee_json(11));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/Employee/11");
        then.status(204).body("");
    });

    let client = api_client(&server);
    client
        .list_employees(&EmployeeQuery {
            search: Some(" ada ".into()),
            department_id: Some(2),
        })
        .await
        .unwrap();
    client.list_employees(&EmployeeQuery::default()).await.unwrap();
    assert_eq!(client.get_employee(10).await.unwrap().full_name(), "Ada Lovelace");
    let input = EmployeeInput {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        ..EmployeeInput::default()
    };
    assert_eq!(client.create_employee(&input).await.unwrap().id, 11);
    client.update_employee(11, &input).await.unwrap();
    client.delete_employee(11).await.unwrap();

    let received = server.received();
    assert_eq!(received[0].query.as_deref(), Some("search=ada&departmentId=2"));
    assert_eq!(received[1].query, None);
}

#[tokio::test]
async fn leave_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/LeaveRequest/MyRequests");
        then.status(200).json_body(json!([leave_json(1)]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/LeaveRequest");
        then.status(200).json_body(leave_json(2));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/LeaveRequest/2/Cancel");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/LeaveRequest/Pending");
        then.status(200).json_body(json!([leave_json(1)]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/LeaveRequest/1/Approve");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/LeaveRequest/1/Reject");
        then.status(409)
            .json_body(json!({ "message": "Request already decided" }));
    });

    let client = api_client(&server);
    assert_eq!(client.get_my_leave_requests().await.unwrap()[0].leave_type, "Annual");
    let created = client
        .create_leave_request(&LeaveRequestInput {
            leave_type: "Annual".into(),
            start_date: date(2025, 2, 3),
            end_date: date(2025, 2, 5),
            reason: None,
        })
        .await
        .unwrap();
    client.cancel_leave_request(created.id).await.unwrap();
    assert_eq!(client.get_pending_leave_requests().await.unwrap().len(), 1);
    client
        .approve_leave_request(1, &DecisionRequest::default())
        .await
        .unwrap();
    let err = client
        .reject_leave_request(1, &DecisionRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.message, "Request already decided");
}

#[tokio::test]
async fn onboarding_endpoints_succeed_including_upload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Onboarding/MyTasks");
        then.status(200)
            .json_body(json!([task_json(1, false), task_json(2, true)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/Onboarding/Employee/10/Tasks");
        then.status(200).json_body(json!([task_json(1, false)]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Onboarding/Task");
        then.status(200).json_body(task_json(3, false));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/Onboarding/Task/1/Complete");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Onboarding/Task/1/Upload");
        then.status(200).json_body(task_json(1, true));
    });

    let client = api_client(&server);
    assert_eq!(client.get_my_onboarding_tasks().await.unwrap().len(), 2);
    assert_eq!(client.get_employee_onboarding_tasks(10).await.unwrap().len(), 1);
    client
        .create_onboarding_task(&OnboardingTaskInput {
            employee_id: 10,
            title: "Laptop pickup".into(),
            description: None,
            due_date: None,
            requires_document: false,
        })
        .await
        .unwrap();
    client.complete_onboarding_task(1).await.unwrap();
    let uploaded = client
        .upload_onboarding_document(
            1,
            UploadFile {
                file_name: "contract.pdf".into(),
                content_type: Some("application/pdf".into()),
                bytes: b"%PDF-1.4".to_vec(),
            },
        )
        .await
        .unwrap();
    assert!(uploaded.is_completed);

    let upload = server.received().pop().unwrap();
    assert!(upload
        .content_type
        .unwrap_or_default()
        .starts_with("multipart/form-data"));
}

#[tokio::test]
async fn profile_bulk_import_and_menu_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Profile/Me");
        then.status(200).json_body(employee_json(10));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/Profile/Me");
        then.status(200).json_body(employee_json(10));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Profile/ChangePassword");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/BulkImport/Employees");
        then.status(200).json_body(json!({
            "totalRows": 3,
            "imported": 2,
            "failed": 1,
            "errors": [{ "row": 3, "message": "Email is invalid" }]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/BulkImport/Template");
        then.status(200)
            .body("FirstName,LastName,Email\n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/Menu/MyMenus");
        then.status(200).json_body(json!([{
            "menuKey": "employees",
            "title": "Employees",
            "path": "/employees",
            "canView": true,
            "canEdit": false
        }]));
    });

    let client = api_client(&server);
    assert_eq!(client.get_my_profile().await.unwrap().id, 10);
    client
        .update_my_profile(&ProfileUpdate {
            phone: Some("+1 555 0100".into()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();
    client
        .change_password(&ChangePasswordRequest {
            current_password: "old".into(),
            new_password: "new-secret".into(),
        })
        .await
        .unwrap();
    let result = client
        .import_employees(UploadFile {
            file_name: "people.csv".into(),
            content_type: Some("text/csv".into()),
            bytes: b"FirstName,LastName,Email\n".to_vec(),
        })
        .await
        .unwrap();
    assert_eq!(result.failed, 1);
    assert_eq!(result.errors[0].row, 3);
    assert!(client
        .download_import_template()
        .await
        .unwrap()
        .starts_with("FirstName"));
    let menus = client.get_my_menus().await.unwrap();
    assert!(menus[0].can_view);
    assert!(!menus[0].can_delete);

    assert_eq!(
        server.received()[1].json,
        Some(json!({ "phone": "+1 555 0100" }))
    );
}

#[tokio::test]
async fn a_second_call_always_hits_the_network() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Onboarding/MyTasks");
        then.status(200).json_body(json!([]));
    });
    let client = api_client(&server);
    client.get_my_onboarding_tasks().await.unwrap();
    client.get_my_onboarding_tasks().await.unwrap();
    assert_eq!(server.hits(GET, "/api/Onboarding/MyTasks"), 2);
}
