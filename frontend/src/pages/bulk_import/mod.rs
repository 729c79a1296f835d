use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::BulkImportPanel;

#[component]
pub fn BulkImportPage() -> impl IntoView {
    view! { <BulkImportPanel /> }
}
