use super::{
    utils::{can_cancel, leave_days, leave_type_options},
    view_model::use_leave_view_model,
};
use crate::{
    components::{
        common::StatusBadge,
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::{InlineErrorMessage, LoadFailure},
        forms::{SelectField, TextAreaField, TextField},
        layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
        modal::Modal,
    },
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn LeavePanel() -> impl IntoView {
    let vm = use_leave_view_model();
    let requests = vm.requests;
    let form = vm.form;
    let creating = vm.request_action.pending();
    let cancelling = vm.cancel_action.pending();

    view! {
        <Layout>
            <PageHeader title="Leave" subtitle="Request time off and track decisions">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| form.open.set(true)
                >
                    <i class="fas fa-plus mr-2"></i>
                    "Request leave"
                </button>
            </PageHeader>
            <FlashMessage flash=vm.flash />
            <InlineErrorMessage error=vm.error.into() on_dismiss=Callback::new(move |_| vm.error.set(None)) />
            <LoadFailure error=Signal::derive(move || requests.error()) on_retry=Callback::new(move |_| requests.retry()) />

            {move || {
                if requests.is_loading() && requests.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let list = requests.data().unwrap_or_default();
                if list.is_empty() {
                    return view! {
                        <EmptyState title="No leave requests" description="Your requests will appear here." icon="fa-umbrella-beach" />
                    }
                    .into_view();
                }
                view! {
                    <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead class="bg-surface-muted">
                                <tr class="text-left text-fg-muted">
                                    <th class="px-4 py-2">"Type"</th>
                                    <th class="px-4 py-2">"Dates"</th>
                                    <th class="px-4 py-2">"Days"</th>
                                    <th class="px-4 py-2">"Status"</th>
                                    <th class="px-4 py-2">"Reviewer comments"</th>
                                    <th class="px-4 py-2"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {list
                                    .into_iter()
                                    .map(|request| {
                                        let id = request.id;
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 text-fg">{request.leave_type.clone()}</td>
                                                <td class="px-4 py-2">
                                                    {format_date(request.start_date)}" - "{format_date(request.end_date)}
                                                </td>
                                                <td class="px-4 py-2">{leave_days(request.start_date, request.end_date)}</td>
                                                <td class="px-4 py-2"><StatusBadge status=request.status.clone() /></td>
                                                <td class="px-4 py-2 text-fg-muted">{request.reviewer_comments.clone().unwrap_or_default()}</td>
                                                <td class="px-4 py-2 text-right">
                                                    {can_cancel(&request.status).then(|| view! {
                                                        <button
                                                            type="button"
                                                            class="text-sm font-medium text-status-error-text hover:underline"
                                                            on:click=move |_| vm.cancel_target.set(Some(id))
                                                        >
                                                            "Cancel"
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

            <Modal is_open=form.open.into() title="Request leave" on_close=Callback::new(move |_| form.reset())>
                <form
                    class="space-y-4"
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <SelectField
                        label="Leave type"
                        value=form.leave_type
                        options=Signal::derive(leave_type_options)
                        required=true
                    />
                    <div class="grid grid-cols-2 gap-3">
                        <TextField label="Start date" value=form.start input_type="date" required=true />
                        <TextField label="End date" value=form.end input_type="date" required=true />
                    </div>
                    <TextAreaField label="Reason" value=form.reason />
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
                            disabled=move || creating.get()
                        >
                            {move || if creating.get() { "Submitting..." } else { "Submit request" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.cancel_target.with(Option::is_some))
                title="Cancel leave request"
                message="The request will be withdrawn from review."
                on_confirm=Callback::new(move |_| vm.confirm_cancel())
                on_cancel=Callback::new(move |_| vm.cancel_target.set(None))
                confirm_label="Cancel request"
                pending=cancelling
                destructive=true
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{employee_session, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn renders_header_and_empty_list() {
        let html = render_to_string(|| {
            provide_auth(Some(employee_session()));
            view! { <LeavePanel /> }
        });
        assert!(html.contains("Request leave"));
        assert!(html.contains("No leave requests"));
    }
}
