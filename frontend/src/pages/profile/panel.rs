use super::{utils::profile_facts, view_model::use_profile_view_model};
use crate::components::{
    common::{Button, ButtonVariant},
    error::{InlineErrorMessage, LoadFailure},
    forms::{TextAreaField, TextField},
    layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
};
use leptos::*;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let profile = vm.profile;
    let form = vm.form;
    let password = vm.password;
    let saving = vm.save_action.pending();
    let changing = vm.password_action.pending();

    view! {
        <Layout>
            <PageHeader title="My Profile" subtitle="Keep your contact details up to date" />
            <FlashMessage flash=vm.flash />
            <LoadFailure error=Signal::derive(move || profile.error()) on_retry=Callback::new(move |_| profile.retry()) />

            <div class="grid gap-6 lg:grid-cols-2">
                <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                    {move || match profile.data() {
                        None if profile.is_loading() => view! { <LoadingSpinner /> }.into_view(),
                        None => view! { <p class="text-sm text-fg-muted">"Profile unavailable."</p> }.into_view(),
                        Some(employee) => view! {
                            <div>
                                <h2 class="text-lg font-semibold text-fg">{employee.full_name()}</h2>
                                <dl class="mt-3 grid grid-cols-2 gap-x-4 gap-y-2 text-sm">
                                    {profile_facts(&employee)
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <dt class="text-fg-muted">{label}</dt>
                                            <dd class="text-fg">{value}</dd>
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                        }
                        .into_view(),
                    }}
                    <Show
                        when=move || form.editing.get()
                        fallback=move || view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                disabled=Signal::derive(move || profile.data().is_none())
                                on_click=Callback::new(move |_| vm.start_editing())
                            >
                                <i class="fas fa-pen mr-2"></i>
                                "Edit contact details"
                            </Button>
                        }
                    >
                        <form
                            class="space-y-3 border-t border-border pt-4"
                            on:submit=move |ev: ev::SubmitEvent| {
                                ev.prevent_default();
                                vm.save();
                            }
                        >
                            <TextField label="Phone" value=form.phone input_type="tel" />
                            <TextAreaField label="Address" value=form.address rows=2 />
                            <TextField label="Emergency contact name" value=form.emergency_name />
                            <TextField label="Emergency contact phone" value=form.emergency_phone input_type="tel" />
                            <InlineErrorMessage error=form.error.into() />
                            <div class="flex justify-end gap-2">
                                <button
                                    type="button"
                                    class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                                    on:click=move |_| form.cancel()
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                    disabled=move || saving.get()
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                                </button>
                            </div>
                        </form>
                    </Show>
                </section>

                <section class="bg-surface-elevated shadow rounded-lg p-6">
                    <h2 class="text-lg font-semibold text-fg mb-4">"Change password"</h2>
                    <form
                        class="space-y-3"
                        on:submit=move |ev: ev::SubmitEvent| {
                            ev.prevent_default();
                            vm.change_password();
                        }
                    >
                        <TextField label="Current password" value=password.current input_type="password" required=true />
                        <TextField label="New password" value=password.new_password input_type="password" required=true />
                        <TextField label="Confirm new password" value=password.confirm input_type="password" required=true />
                        <InlineErrorMessage error=password.error.into() />
                        <div class="flex justify-end">
                            <button
                                type="submit"
                                class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                disabled=move || changing.get()
                            >
                                {move || if changing.get() { "Updating..." } else { "Update password" }}
                            </button>
                        </div>
                    </form>
                </section>
            </div>
        </Layout>
    }
}
