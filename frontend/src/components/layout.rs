use crate::{
    state::{
        auth::{use_auth, use_logout},
        flash::Flash,
        policy::{sidebar_for, VisibleSection},
    },
};
use leptos::*;

const NAV_LINK_CLASS: &str = "flex items-center gap-3 text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Sidebar(#[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let (auth, _) = use_auth();
    let sections = create_memo(move |_| {
        auth.with(|state| sidebar_for(&state.policy, &state.menus))
    });

    view! {
        <nav class="space-y-6" aria-label="Main navigation">
            {move || {
                sections
                    .get()
                    .into_iter()
                    .map(|section: VisibleSection| {
                        view! {
                            <div>
                                <p class="px-3 text-xs font-semibold uppercase tracking-wider text-fg-subtle">
                                    {section.title}
                                </p>
                                <div class="mt-2 space-y-1">
                                    {section
                                        .items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <a
                                                    href=item.path
                                                    class=NAV_LINK_CLASS
                                                    on:click=move |_| {
                                                        if let Some(cb) = on_navigate {
                                                            cb.call(());
                                                        }
                                                    }
                                                >
                                                    <i class=format!("fas {} w-4", item.icon)></i>
                                                    <span>{item.label}</span>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let logout = use_logout();

    let display_name = move || {
        auth.with(|state| {
            state
                .user()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let role_label = move || auth.with(|state| state.policy.role().label().to_string());

    let on_logout = move |_| {
        set_menu_open.set(false);
        logout.call(());
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <i class=move || if menu_open.get() { "fas fa-xmark" } else { "fas fa-bars" }></i>
                        </button>
                        <a href="/dashboard" class="text-xl font-semibold text-fg">"PeopleDesk"</a>
                    </div>
                    <div class="flex items-center gap-4">
                        <div class="hidden sm:block text-right">
                            <p class="text-sm font-medium text-fg">{display_name}</p>
                            <p class="text-xs text-fg-muted">{role_label}</p>
                        </div>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            <i class="fas fa-right-from-bracket mr-2"></i>
                            "Sign out"
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div id="mobile-nav" class="lg:hidden border-t border-border px-4 py-3">
                    <Sidebar on_navigate=Callback::new(move |_| set_menu_open.set(false)) />
                </div>
            </Show>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <div class="flex">
                <aside class="hidden lg:block w-64 shrink-0 border-r border-border bg-surface-elevated min-h-[calc(100vh-4rem)] px-3 py-6">
                    <Sidebar/>
                </aside>
                <main class="flex-1 min-w-0 py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between mb-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{title}</h1>
                {subtitle.map(|s| view! { <p class="mt-1 text-sm text-fg-muted">{s}</p> })}
            </div>
            <div class="flex gap-2">{children.map(|c| c())}</div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FlashMessage(flash: Flash) -> impl IntoView {
    let message = flash.message();
    view! {
        {move || message.get().map(|text| view! { <SuccessMessage message=text /> })}
    }
}
