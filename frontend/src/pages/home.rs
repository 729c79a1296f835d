use crate::{components::layout::LoadingSpinner, state::auth::use_auth};
use leptos::*;

pub fn landing_target(is_authenticated: bool) -> &'static str {
    if is_authenticated {
        "/dashboard"
    } else {
        "/login"
    }
}

/// `/` has no content of its own; it forwards once the session is known.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        let (loading, signed_in) = auth.with(|s| (s.loading, s.is_authenticated()));
        if loading {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(landing_target(signed_in));
        }
    });
    view! { <LoadingSpinner /> }
}
