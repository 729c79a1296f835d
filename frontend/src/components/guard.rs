use crate::{
    components::layout::LoadingSpinner,
    state::{
        auth::use_auth,
        policy::{can_open, nav_item},
    },
};
use leptos::*;

fn redirect(target: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.with(|s| s.is_authenticated()));
    let is_loading = create_memo(move |_| auth.with(|s| s.loading));
    create_effect(move |_| {
        if !is_loading.get() && !is_authenticated.get() {
            redirect("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Renders children only when the menu behind `path` is open to the user:
/// a server menu flag wins, otherwise the role capability decides. Paths
/// missing from the sidebar table are refused. Everyone else is sent back to
/// the dashboard.
#[component]
pub fn RequireMenu(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.with(|s| s.is_authenticated()));
    let is_loading = create_memo(move |_| auth.with(|s| s.loading));
    let item = nav_item(path);
    if item.is_none() {
        log::warn!("no menu entry guards {}", path);
    }
    let allowed = create_memo(move |_| {
        item.map(|item| auth.with(|s| can_open(&s.policy, &s.menus, item)))
            .unwrap_or(false)
    });
    create_effect(move |_| {
        if is_loading.get() {
            return;
        }
        if !is_authenticated.get() {
            redirect("/login");
        } else if !allowed.get() {
            redirect("/dashboard");
        }
    });
    view! {
        <Show
            when=move || {
                should_render_capability_children(is_authenticated.get(), is_loading.get(), allowed.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_capability_children(is_authenticated: bool, is_loading: bool, allowed: bool) -> bool {
    is_authenticated && allowed && !is_loading
}

#[cfg(test)]
mod tests {
    use super::{should_render_capability_children, should_render_children};

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn capability_guard_requires_permission() {
        assert!(!should_render_capability_children(false, false, true));
        assert!(!should_render_capability_children(true, true, true));
        assert!(!should_render_capability_children(true, false, false));
        assert!(should_render_capability_children(true, false, true));
    }
}
