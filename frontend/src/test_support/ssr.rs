use crate::state::session::Session;
use crate::test_support::helpers::provide_auth;
use leptos::*;

/// Runs `f` inside a throwaway reactive runtime.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-renders `view`. Effects never run here, so page loaders stay idle
/// and nothing touches the network.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` with `session` installed as the signed-in user.
pub fn render_as<F, N>(session: Option<Session>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_auth(session);
        view()
    })
}
