use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DailyReportPanel;

#[component]
pub fn DailyReportPage() -> impl IntoView {
    view! { <DailyReportPanel /> }
}
