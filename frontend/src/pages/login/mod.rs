use leptos::*;

mod panel;
pub mod utils;
pub mod view_model;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginPanel /> }
}
