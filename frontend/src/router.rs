use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::{RequireAuth, RequireMenu},
    pages::{
        AttendancePage, BulkImportPage, DailyReportPage, DashboardPage, DepartmentsPage,
        EmployeesPage, HomePage, LeaveApprovalsPage, LeavePage, LoginPage, OnboardingPage,
        ProfilePage, TimesheetApprovalsPage, TimesheetsPage,
    },
    state::auth::AuthProvider,
};

const TIMESHEET_APPROVALS: &str = "/timesheets/approvals";
const LEAVE_APPROVALS: &str = "/leave/approvals";
const DAILY_REPORT: &str = "/reports/daily";
const EMPLOYEES: &str = "/employees";
const BULK_IMPORT: &str = "/employees/import";
const DEPARTMENTS: &str = "/departments";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="PeopleDesk"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                    <Route path="/timesheets" view=ProtectedTimesheets/>
                    <Route path=TIMESHEET_APPROVALS view=ProtectedTimesheetApprovals/>
                    <Route path="/leave" view=ProtectedLeave/>
                    <Route path=LEAVE_APPROVALS view=ProtectedLeaveApprovals/>
                    <Route path="/onboarding" view=ProtectedOnboarding/>
                    <Route path=DAILY_REPORT view=ProtectedDailyReport/>
                    <Route path=EMPLOYEES view=ProtectedEmployees/>
                    <Route path=BULK_IMPORT view=ProtectedBulkImport/>
                    <Route path=DEPARTMENTS view=ProtectedDepartments/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedTimesheets() -> impl IntoView {
    view! { <RequireAuth><TimesheetsPage/></RequireAuth> }
}

#[component]
fn ProtectedTimesheetApprovals() -> impl IntoView {
    view! {
        <RequireMenu path=TIMESHEET_APPROVALS>
            <TimesheetApprovalsPage/>
        </RequireMenu>
    }
}

#[component]
fn ProtectedLeave() -> impl IntoView {
    view! { <RequireAuth><LeavePage/></RequireAuth> }
}

#[component]
fn ProtectedLeaveApprovals() -> impl IntoView {
    view! {
        <RequireMenu path=LEAVE_APPROVALS>
            <LeaveApprovalsPage/>
        </RequireMenu>
    }
}

#[component]
fn ProtectedOnboarding() -> impl IntoView {
    view! { <RequireAuth><OnboardingPage/></RequireAuth> }
}

#[component]
fn ProtectedDailyReport() -> impl IntoView {
    view! {
        <RequireMenu path=DAILY_REPORT>
            <DailyReportPage/>
        </RequireMenu>
    }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! {
        <RequireMenu path=EMPLOYEES>
            <EmployeesPage/>
        </RequireMenu>
    }
}

#[component]
fn ProtectedBulkImport() -> impl IntoView {
    view! {
        <RequireMenu path=BULK_IMPORT>
            <BulkImportPage/>
        </RequireMenu>
    }
}

#[component]
fn ProtectedDepartments() -> impl IntoView {
    view! {
        <RequireMenu path=DEPARTMENTS>
            <DepartmentsPage/>
        </RequireMenu>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-3 bg-surface">
            <p class="text-5xl font-bold text-fg">"404"</p>
            <p class="text-fg-muted">"This page does not exist."</p>
            <a href="/dashboard" class="text-action-primary-bg hover:underline">"Back to dashboard"</a>
        </div>
    }
}
