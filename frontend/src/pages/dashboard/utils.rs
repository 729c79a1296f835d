use super::repository::DashboardSnapshot;
use crate::{
    api::DailyReportEntry,
    state::policy::DashboardVariant,
    utils::format::format_hours_short,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyCounts {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub on_leave: usize,
}

pub fn summarize_daily(entries: &[DailyReportEntry]) -> DailyCounts {
    entries
        .iter()
        .fold(DailyCounts::default(), |mut counts, entry| {
            match entry.status.to_ascii_lowercase().as_str() {
                "present" => counts.present += 1,
                "late" => {
                    counts.present += 1;
                    counts.late += 1;
                }
                "absent" => counts.absent += 1,
                "on leave" | "onleave" | "leave" => counts.on_leave += 1,
                _ => {}
            }
            counts
        })
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn dashboard_title(variant: DashboardVariant) -> &'static str {
    match variant {
        DashboardVariant::Admin => "Administrator Dashboard",
        DashboardVariant::Hr => "HR Dashboard",
        DashboardVariant::Director => "Director Dashboard",
        DashboardVariant::Manager => "Team Dashboard",
        DashboardVariant::Employee => "My Dashboard",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

fn stat(label: &'static str, value: impl ToString, icon: &'static str) -> DashboardStat {
    DashboardStat {
        label,
        value: value.to_string(),
        icon,
    }
}

/// Cards in display order; loaded fields only.
pub fn stats_for(snapshot: &DashboardSnapshot) -> Vec<DashboardStat> {
    let mut stats = Vec::new();
    if let Some(count) = snapshot.employee_count {
        stats.push(stat("Employees", count, "fa-users"));
    }
    if let Some(count) = snapshot.department_count {
        stats.push(stat("Departments", count, "fa-sitemap"));
    }
    if let Some(daily) = snapshot.daily {
        stats.push(stat("Present today", daily.present, "fa-user-check"));
        stats.push(stat("Late today", daily.late, "fa-user-clock"));
    }
    if let Some(count) = snapshot.pending_timesheets {
        stats.push(stat("Timesheets to review", count, "fa-file-signature"));
    }
    if let Some(count) = snapshot.pending_leave {
        stats.push(stat("Leave to review", count, "fa-plane-departure"));
    }
    if let Some(summary) = &snapshot.week_summary {
        stats.push(stat(
            "Hours this week",
            format_hours_short(summary.total_hours),
            "fa-clock",
        ));
        stats.push(stat("Days present", summary.total_days_present, "fa-calendar-check"));
    }
    if let Some(count) = snapshot.open_leave_requests {
        stats.push(stat("Open leave requests", count, "fa-umbrella-beach"));
    }
    stats
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardAlert {
    pub message: String,
    pub href: &'static str,
}

pub fn build_alerts(snapshot: &DashboardSnapshot) -> Vec<DashboardAlert> {
    let mut alerts = Vec::new();
    if let Some(count) = snapshot.pending_timesheets.filter(|c| *c > 0) {
        alerts.push(DashboardAlert {
            message: format!("{} timesheet(s) awaiting approval", count),
            href: "/timesheets/approvals",
        });
    }
    if let Some(count) = snapshot.pending_leave.filter(|c| *c > 0) {
        alerts.push(DashboardAlert {
            message: format!("{} leave request(s) awaiting approval", count),
            href: "/leave/approvals",
        });
    }
    if let Some(absent) = snapshot.daily.map(|d| d.absent).filter(|c| *c > 0) {
        alerts.push(DashboardAlert {
            message: format!("{} employee(s) absent today", absent),
            href: "/reports/daily",
        });
    }
    if let Some(percent) = snapshot.onboarding_percent.filter(|p| *p < 100) {
        alerts.push(DashboardAlert {
            message: format!("Onboarding {}% complete", percent),
            href: "/onboarding",
        });
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AttendanceSummary;

    fn report(status: &str) -> DailyReportEntry {
        DailyReportEntry {
            employee_id: 1,
            employee_name: "Ada Lovelace".into(),
            department_name: None,
            clock_in_time: None,
            clock_out_time: None,
            total_hours: None,
            status: status.into(),
        }
    }

    #[test]
    fn late_arrivals_count_as_present() {
        let counts = summarize_daily(&[
            report("Present"),
            report("Late"),
            report("Absent"),
            report("On Leave"),
        ]);
        assert_eq!(
            counts,
            DailyCounts {
                present: 2,
                late: 1,
                absent: 1,
                on_leave: 1
            }
        );
    }

    #[test]
    fn greeting_follows_hour() {
        assert_eq!(greeting(8), "Good morning");
        assert_eq!(greeting(13), "Good afternoon");
        assert_eq!(greeting(20), "Good evening");
    }

    #[test]
    fn stats_skip_unloaded_fields() {
        let snapshot = DashboardSnapshot {
            week_summary: Some(AttendanceSummary {
                total_hours: 8.0,
                total_days_present: 1,
                ..AttendanceSummary::default()
            }),
            ..DashboardSnapshot::default()
        };
        let stats = stats_for(&snapshot);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].value, "8h");
    }

    #[test]
    fn alerts_only_for_nonzero_queues() {
        let snapshot = DashboardSnapshot {
            pending_timesheets: Some(0),
            pending_leave: Some(3),
            onboarding_percent: Some(100),
            ..DashboardSnapshot::default()
        };
        let alerts = build_alerts(&snapshot);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].href, "/leave/approvals");
    }
}
