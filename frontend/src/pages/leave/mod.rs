use leptos::*;

mod approvals;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use approvals::LeaveApprovalsPanel;
pub use panel::LeavePanel;

#[component]
pub fn LeavePage() -> impl IntoView {
    view! { <LeavePanel /> }
}

#[component]
pub fn LeaveApprovalsPage() -> impl IntoView {
    view! { <LeaveApprovalsPanel /> }
}
