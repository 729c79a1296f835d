use super::{
    utils::{can_complete, checklist_progress, group_by_category, needs_upload},
    view_model::{use_onboarding_view_model, OnboardingViewModel},
};
use crate::{
    api::OnboardingTask,
    components::{
        empty_state::EmptyState,
        error::{InlineErrorMessage, LoadFailure},
        layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
        progress::ProgressBar,
    },
    utils::format::format_date,
};
use leptos::*;

#[component]
fn TaskRow(task: OnboardingTask, vm: OnboardingViewModel) -> impl IntoView {
    let id = task.id;
    let completing = vm.complete_action.pending();
    let uploading = Signal::derive(move || vm.uploading.get() == Some(id));
    let file_input = create_node_ref::<html::Input>();
    let status_icon = if task.is_completed {
        "fas fa-circle-check text-status-success-text mt-1"
    } else {
        "far fa-circle text-fg-subtle mt-1"
    };

    view! {
        <li class="py-3 flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
            <div class="flex items-start gap-3">
                <i class=status_icon></i>
                <div>
                    <p class="font-medium text-fg">{task.title.clone()}</p>
                    {task.description.clone().map(|d| view! { <p class="text-sm text-fg-muted">{d}</p> })}
                    <p class="text-xs text-fg-subtle">
                        {task.due_date.map(|d| format!("Due {}", format_date(d)))}
                        {task.document_url.clone().map(|url| view! {
                            <a href=url class="ml-2 text-action-primary-bg hover:underline" target="_blank">"View document"</a>
                        })}
                    </p>
                </div>
            </div>
            <div class="flex gap-2">
                {needs_upload(&task).then(|| view! {
                    <input
                        type="file"
                        class="hidden"
                        node_ref=file_input
                        on:change=move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                vm.upload_from(id, (*input).clone());
                            }
                        }
                    />
                    <button
                        type="button"
                        class="rounded-md px-3 py-1.5 text-sm font-semibold bg-surface-muted text-fg disabled:opacity-50"
                        disabled=move || uploading.get()
                        on:click=move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                input.click();
                            }
                        }
                    >
                        <i class="fas fa-upload mr-2"></i>
                        {move || if uploading.get() { "Uploading..." } else { "Upload document" }}
                    </button>
                })}
                {can_complete(&task).then(|| view! {
                    <button
                        type="button"
                        class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || completing.get()
                        on:click=move |_| vm.complete(id)
                    >
                        "Mark complete"
                    </button>
                })}
            </div>
        </li>
    }
}

#[component]
pub fn OnboardingPanel() -> impl IntoView {
    let vm = use_onboarding_view_model();
    let tasks = vm.tasks;
    let percent = Signal::derive(move || checklist_progress(&tasks.data().unwrap_or_default()));

    view! {
        <Layout>
            <PageHeader title="Onboarding" subtitle="Finish your checklist to get fully set up" />
            <FlashMessage flash=vm.flash />
            <InlineErrorMessage error=vm.error.into() on_dismiss=Callback::new(move |_| vm.error.set(None)) />
            <LoadFailure error=Signal::derive(move || tasks.error()) on_retry=Callback::new(move |_| tasks.retry()) />

            <div class="bg-surface-elevated shadow rounded-lg p-5 mb-6">
                <ProgressBar percent=percent label="Overall progress" />
            </div>

            {move || {
                if tasks.is_loading() && tasks.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let list = tasks.data().unwrap_or_default();
                if list.is_empty() {
                    return view! {
                        <EmptyState title="No onboarding tasks" description="You're all set. New tasks will show up here." icon="fa-list-check" />
                    }
                    .into_view();
                }
                group_by_category(list)
                    .into_iter()
                    .map(|(category, items)| {
                        view! {
                            <section class="bg-surface-elevated shadow rounded-lg p-5 mb-4">
                                <h2 class="text-sm font-semibold uppercase tracking-wider text-fg-subtle">{category}</h2>
                                <ul class="divide-y divide-border">
                                    {items
                                        .into_iter()
                                        .map(|task| view! { <TaskRow task=task vm=vm /> })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </Layout>
    }
}
