pub mod attendance;
pub mod bulk_import;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod home;
pub mod leave;
pub mod login;
pub mod onboarding;
pub mod profile;
pub mod reports;
pub mod timesheets;

pub use attendance::AttendancePage;
pub use bulk_import::BulkImportPage;
pub use dashboard::DashboardPage;
pub use departments::DepartmentsPage;
pub use employees::EmployeesPage;
pub use home::HomePage;
pub use leave::{LeaveApprovalsPage, LeavePage};
pub use login::LoginPage;
pub use onboarding::OnboardingPage;
pub use profile::ProfilePage;
pub use reports::DailyReportPage;
pub use timesheets::{TimesheetApprovalsPage, TimesheetsPage};
