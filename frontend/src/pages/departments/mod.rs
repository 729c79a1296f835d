use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DepartmentsPanel;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    view! { <DepartmentsPanel /> }
}
