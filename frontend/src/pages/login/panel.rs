use super::view_model::use_login_view_model;
use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-fg-subtle text-fg rounded-md focus:outline-none focus:border-action-primary-border sm:text-sm";

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <i class="fas fa-users text-4xl text-action-primary-bg"></i>
                    <h2 class="mt-4 text-3xl font-extrabold text-fg">"PeopleDesk"</h2>
                    <p class="mt-2 text-sm text-fg-muted">"Sign in to your account"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=on_submit novalidate>
                    <div>
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="Email address"
                            prop:value=move || vm.email.get()
                            on:input=move |ev| vm.email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            placeholder="Password"
                            prop:value=move || vm.password.get()
                            on:input=move |ev| vm.password.set(event_target_value(&ev))
                        />
                    </div>
                    <InlineErrorMessage error=vm.error.into() />
                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
