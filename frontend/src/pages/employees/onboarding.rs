use super::view_model::OnboardingAdmin;
use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::{InlineErrorMessage, LoadFailure},
        forms::{CheckboxField, TextAreaField, TextField},
        layout::LoadingSpinner,
        modal::{Modal, ModalSize},
        progress::ProgressBar,
    },
    utils::format::{format_date, progress_percent},
};
use leptos::*;

#[component]
pub fn OnboardingAdminModal(admin: OnboardingAdmin) -> impl IntoView {
    let tasks = admin.tasks;
    let adding = admin.create_action.pending();
    let is_open = Signal::derive(move || admin.employee.with(Option::is_some));
    let title = Signal::derive(move || {
        admin
            .employee
            .with(|e| e.as_ref().map(|e| format!("Onboarding: {}", e.full_name())))
            .unwrap_or_default()
    });
    let percent = Signal::derive(move || {
        let list = tasks.data().unwrap_or_default();
        progress_percent(list.iter().filter(|t| t.is_completed).count(), list.len())
    });

    view! {
        <Modal is_open=is_open title=title on_close=Callback::new(move |_| admin.close()) size=ModalSize::Large>
            <LoadFailure error=Signal::derive(move || tasks.error()) on_retry=Callback::new(move |_| tasks.retry()) />
            <ProgressBar percent=percent label="Checklist progress" />
            {move || {
                if tasks.is_loading() && tasks.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let list = tasks.data().unwrap_or_default();
                if list.is_empty() {
                    return view! { <p class="text-sm text-fg-muted">"No tasks assigned yet."</p> }.into_view();
                }
                view! {
                    <ul class="divide-y divide-border text-sm">
                        {list
                            .into_iter()
                            .map(|task| {
                                let icon = if task.is_completed { "fa-circle-check text-status-success-text" } else { "fa-circle text-fg-subtle" };
                                view! {
                                    <li class="py-2 flex items-center justify-between gap-3">
                                        <span class="flex items-center gap-2 text-fg">
                                            <i class=format!("fas {}", icon)></i>
                                            {task.title.clone()}
                                        </span>
                                        <span class="text-fg-muted">{task.due_date.map(format_date).unwrap_or_default()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
            <div class="space-y-3 border-t border-border pt-4">
                <TextField label="Task title" value=admin.title required=true />
                <TextAreaField label="Description" value=admin.description rows=2 />
                <TextField label="Due date" value=admin.due_date input_type="date" />
                <CheckboxField label="Requires a document upload" value=admin.requires_document />
                <InlineErrorMessage error=admin.error.into() />
                <div class="flex justify-end">
                    <Button
                        variant=ButtonVariant::Primary
                        loading=adding
                        on_click=Callback::new(move |_| admin.add_task())
                    >
                        "Add task"
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
