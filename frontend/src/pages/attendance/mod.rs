use leptos::*;

mod components;
mod panel;
pub mod repository;
pub mod view_model;

pub use panel::AttendancePanel;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! { <AttendancePanel /> }
}
