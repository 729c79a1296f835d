use leptos::*;

mod approvals;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use approvals::TimesheetApprovalsPanel;
pub use panel::TimesheetsPanel;

#[component]
pub fn TimesheetsPage() -> impl IntoView {
    view! { <TimesheetsPanel /> }
}

#[component]
pub fn TimesheetApprovalsPage() -> impl IntoView {
    view! { <TimesheetApprovalsPanel /> }
}
