use super::utils::{summarize_daily, DailyCounts};
use crate::{
    api::{ApiClient, ApiError, AttendanceSummary, EmployeeQuery},
    state::policy::DashboardVariant,
    utils::{date_range::week_start, format::progress_percent},
};
use chrono::{Duration, NaiveDate};

/// Everything one dashboard variant shows. Fields a variant does not load
/// stay `None` and their cards are not rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub employee_count: Option<usize>,
    pub department_count: Option<usize>,
    pub pending_timesheets: Option<usize>,
    pub pending_leave: Option<usize>,
    pub daily: Option<DailyCounts>,
    pub week_summary: Option<AttendanceSummary>,
    pub open_leave_requests: Option<usize>,
    pub onboarding_percent: Option<u8>,
}

/// Independent calls are joined, so the page renders once with all of them.
pub async fn load_dashboard(
    api: &ApiClient,
    variant: DashboardVariant,
    today: NaiveDate,
) -> Result<DashboardSnapshot, ApiError> {
    match variant {
        DashboardVariant::Admin => {
            let query = EmployeeQuery::default();
            let (employees, departments, timesheets, leave, daily) = futures::join!(
                api.list_employees(&query),
                api.list_departments(),
                api.get_pending_timesheets(),
                api.get_pending_leave_requests(),
                api.get_daily_report(today),
            );
            Ok(DashboardSnapshot {
                employee_count: Some(employees?.len()),
                department_count: Some(departments?.len()),
                pending_timesheets: Some(timesheets?.len()),
                pending_leave: Some(leave?.len()),
                daily: Some(summarize_daily(&daily?)),
                ..DashboardSnapshot::default()
            })
        }
        DashboardVariant::Hr => {
            let query = EmployeeQuery::default();
            let (employees, leave, daily) = futures::join!(
                api.list_employees(&query),
                api.get_pending_leave_requests(),
                api.get_daily_report(today),
            );
            Ok(DashboardSnapshot {
                employee_count: Some(employees?.len()),
                pending_leave: Some(leave?.len()),
                daily: Some(summarize_daily(&daily?)),
                ..DashboardSnapshot::default()
            })
        }
        DashboardVariant::Director => {
            let (timesheets, leave, daily) = futures::join!(
                api.get_pending_timesheets(),
                api.get_pending_leave_requests(),
                api.get_daily_report(today),
            );
            Ok(DashboardSnapshot {
                pending_timesheets: Some(timesheets?.len()),
                pending_leave: Some(leave?.len()),
                daily: Some(summarize_daily(&daily?)),
                ..DashboardSnapshot::default()
            })
        }
        DashboardVariant::Manager => {
            let (timesheets, leave) = futures::join!(
                api.get_pending_timesheets(),
                api.get_pending_leave_requests(),
            );
            Ok(DashboardSnapshot {
                pending_timesheets: Some(timesheets?.len()),
                pending_leave: Some(leave?.len()),
                ..DashboardSnapshot::default()
            })
        }
        DashboardVariant::Employee => {
            let start = week_start(today);
            let end = start + Duration::days(6);
            let (summary, requests, tasks) = futures::join!(
                api.get_attendance_summary(start, end),
                api.get_my_leave_requests(),
                api.get_my_onboarding_tasks(),
            );
            let tasks = tasks?;
            let done = tasks.iter().filter(|t| t.is_completed).count();
            Ok(DashboardSnapshot {
                week_summary: Some(summary?),
                open_leave_requests: Some(
                    requests?
                        .iter()
                        .filter(|r| r.status.eq_ignore_ascii_case("pending"))
                        .count(),
                ),
                onboarding_percent: (!tasks.is_empty())
                    .then(|| progress_percent(done, tasks.len())),
                ..DashboardSnapshot::default()
            })
        }
    }
}
