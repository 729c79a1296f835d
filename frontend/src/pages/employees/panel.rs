use super::{
    onboarding::OnboardingAdminModal,
    utils::{department_options, role_options},
    view_model::use_employees_view_model,
};
use crate::components::{
    common::StatusBadge,
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::{InlineErrorMessage, LoadFailure},
    forms::{SelectField, TextField},
    layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
    modal::{Modal, ModalSize},
};
use leptos::*;

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let employees = vm.employees;
    let departments = vm.departments;
    let form = vm.form;
    let permissions = vm.permissions;
    let saving = vm.save_action.pending();
    let deleting = vm.delete_action.pending();

    let filter_options = Signal::derive(move || {
        department_options(&departments.data().unwrap_or_default(), "All departments")
    });
    let form_departments = Signal::derive(move || {
        department_options(&departments.data().unwrap_or_default(), "Unassigned")
    });
    let modal_title = Signal::derive(move || {
        if form.editing.get().is_some() {
            "Edit employee".to_string()
        } else {
            "New employee".to_string()
        }
    });
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|e| format!("{} will be removed from the directory.", e.full_name()))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <PageHeader title="Employees" subtitle="Search the directory and manage records">
                <Show when=move || permissions.get().create>
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| vm.open_create()
                    >
                        <i class="fas fa-user-plus mr-2"></i>
                        "Add employee"
                    </button>
                </Show>
            </PageHeader>
            <FlashMessage flash=vm.flash />
            <InlineErrorMessage error=vm.error.into() on_dismiss=Callback::new(move |_| vm.error.set(None)) />

            <div class="grid gap-3 sm:grid-cols-2 mb-4">
                <TextField label="Search" value=vm.search placeholder="Name, email or code" />
                <SelectField label="Department" value=vm.department_filter options=filter_options />
            </div>

            <LoadFailure error=Signal::derive(move || employees.error()) on_retry=Callback::new(move |_| employees.retry()) />
            {move || {
                if employees.is_loading() && employees.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let list = employees.data().unwrap_or_default();
                if list.is_empty() {
                    return view! {
                        <EmptyState title="No employees found" description="Try a different search or department." icon="fa-users" />
                    }
                    .into_view();
                }
                let perms = permissions.get();
                let onboarding = vm.can_manage_onboarding.get();
                view! {
                    <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead class="bg-surface-muted">
                                <tr class="text-left text-fg-muted">
                                    <th class="px-4 py-2">"Name"</th>
                                    <th class="px-4 py-2">"Email"</th>
                                    <th class="px-4 py-2">"Department"</th>
                                    <th class="px-4 py-2">"Position"</th>
                                    <th class="px-4 py-2">"Status"</th>
                                    <th class="px-4 py-2"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {list
                                    .into_iter()
                                    .map(|employee| {
                                        let id = employee.id;
                                        let for_delete = employee.clone();
                                        let for_onboarding = employee.clone();
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2">
                                                    <p class="font-medium text-fg">{employee.full_name()}</p>
                                                    <p class="text-xs text-fg-muted">{employee.employee_code.clone().unwrap_or_default()}</p>
                                                </td>
                                                <td class="px-4 py-2">{employee.email.clone()}</td>
                                                <td class="px-4 py-2">{employee.department_name.clone().unwrap_or_default()}</td>
                                                <td class="px-4 py-2">{employee.position.clone().unwrap_or_default()}</td>
                                                <td class="px-4 py-2"><StatusBadge status=employee.status.clone() /></td>
                                                <td class="px-4 py-2 text-right space-x-3 whitespace-nowrap">
                                                    {onboarding.then(|| view! {
                                                        <button
                                                            type="button"
                                                            class="font-medium text-fg-muted hover:text-fg"
                                                            on:click=move |_| vm.onboarding.open(for_onboarding.clone())
                                                        >
                                                            "Onboarding"
                                                        </button>
                                                    })}
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
                                                            on:click=move |_| vm.delete_target.set(Some(for_delete.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    })}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_view()
            }}

            <Modal is_open=form.open.into() title=modal_title on_close=Callback::new(move |_| form.reset()) size=ModalSize::Large>
                <form
                    class="space-y-4"
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <div class="grid gap-3 sm:grid-cols-2">
                        <TextField label="First name" value=form.first_name required=true />
                        <TextField label="Last name" value=form.last_name required=true />
                        <TextField label="Email" value=form.email input_type="email" required=true />
                        <TextField label="Phone" value=form.phone input_type="tel" />
                        <SelectField label="Department" value=form.department_id options=form_departments />
                        <TextField label="Position" value=form.position />
                        <TextField label="Hire date" value=form.hire_date input_type="date" />
                        <SelectField label="Role" value=form.role options=Signal::derive(role_options) />
                    </div>
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

            <OnboardingAdminModal admin=vm.onboarding />

            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.with(Option::is_some))
                title="Delete employee"
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
