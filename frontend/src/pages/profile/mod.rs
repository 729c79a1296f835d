use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::ProfilePanel;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <ProfilePanel /> }
}
