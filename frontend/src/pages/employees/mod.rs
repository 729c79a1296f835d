use leptos::*;

mod onboarding;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::EmployeesPanel;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! { <EmployeesPanel /> }
}
