use super::{utils::manager_options, view_model::use_departments_view_model};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::{InlineErrorMessage, LoadFailure},
    forms::{SelectField, TextAreaField, TextField},
    layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
    modal::Modal,
};
use leptos::*;

#[component]
pub fn DepartmentsPanel() -> impl IntoView {
    let vm = use_departments_view_model();
    let directory = vm.directory;
    let form = vm.form;
    let permissions = vm.permissions;
    let saving = vm.save_action.pending();
    let deleting = vm.delete_action.pending();

    let managers = Signal::derive(move || {
        manager_options(&directory.data().map(|d| d.employees).unwrap_or_default())
    });
    let modal_title = Signal::derive(move || {
        if form.editing.get().is_some() {
            "Edit department".to_string()
        } else {
            "New department".to_string()
        }
    });
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|d| format!("{} will be removed permanently.", d.name))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <PageHeader title="Departments" subtitle="Organise teams and assign managers">
                <Show when=move || permissions.get().create>
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| vm.open_create()
                    >
                        <i class="fas fa-plus mr-2"></i>
                        "Add department"
                    </button>
                </Show>
            </PageHeader>
            <FlashMessage flash=vm.flash />
            <InlineErrorMessage error=vm.error.into() on_dismiss=Callback::new(move |_| vm.error.set(None)) />
            <LoadFailure error=Signal::derive(move || directory.error()) on_retry=Callback::new(move |_| directory.retry()) />

            {move || {
                if directory.is_loading() && directory.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let departments = directory.data().map(|d| d.departments).unwrap_or_default();
                if departments.is_empty() {
                    return view! {
                        <EmptyState title="No departments yet" description="Create a department to start grouping employees." icon="fa-sitemap" />
                    }
                    .into_view();
                }
                let perms = permissions.get();
                view! {
                    <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-3">
                        {departments
                            .into_iter()
                            .map(|department| {
                                let id = department.id;
                                let target = department.clone();
                                view! {
                                    <div class="bg-surface-elevated shadow rounded-lg p-5 space-y-3">
                                        <div class="flex items-start justify-between">
                                            <div>
                                                <h3 class="text-lg font-semibold text-fg">{department.name.clone()}</h3>
                                                <p class="text-sm text-fg-muted">
                                                    {department.description.clone().unwrap_or_default()}
                                                </p>
                                            </div>
                                            <span class="text-xs font-semibold rounded-full px-2 py-1 bg-surface-muted text-fg-muted">
                                                {format!("{} people", department.employee_count)}
                                            </span>
                                        </div>
                                        <p class="text-sm text-fg">
                                            <i class="fas fa-user-tie mr-2 text-fg-subtle"></i>
                                            {department.manager_name.clone().unwrap_or_else(|| "No manager".to_string())}
                                        </p>
                                        <div class="flex gap-3 text-sm">
                                            {perms.edit.then(|| view! {
                                                <button
                                                    type="button"
                                                    class="font-medium text-action-primary-bg hover:underline"
                                                    on:click=move |_| vm.open_edit(id)
                                                >
                                                    "Edit"
                                                </button>
                                            })}
                                            {perms.delete.then(|| view! {
                                                <button
                                                    type="button"
                                                    class="font-medium text-status-error-text hover:underline"
                                                    on:click=move |_| vm.request_delete(target.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            })}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}

            <Modal is_open=form.open.into() title=modal_title on_close=Callback::new(move |_| form.reset())>
                <form
                    class="space-y-4"
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <TextField label="Name" value=form.name required=true />
                    <TextAreaField label="Description" value=form.description />
                    <SelectField label="Manager" value=form.manager_id options=managers />
                    <InlineErrorMessage error=form.error.into() />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                            on:click=move |_| form.reset()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.with(Option::is_some))
                title="Delete department"
                message=delete_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.delete_target.set(None))
                confirm_label="Delete"
                pending=deleting
                destructive=true
            />
        </Layout>
    }
}
