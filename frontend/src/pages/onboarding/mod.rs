use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::OnboardingPanel;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! { <OnboardingPanel /> }
}
