use super::{utils::leave_days, view_model::use_leave_approvals};
use crate::{
    components::{
        decision::{Decision, DecisionDialog},
        empty_state::EmptyState,
        error::{InlineErrorMessage, LoadFailure},
        layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
    },
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn LeaveApprovalsPanel() -> impl IntoView {
    let queue = use_leave_approvals();
    let items = queue.items;
    let pending = queue.action.pending();
    let subject = Signal::derive(move || {
        let id = queue.selected.get();
        items
            .data()
            .and_then(|list| list.into_iter().find(|r| Some(r.id) == id))
            .map(|r| format!("{} leave", r.leave_type.to_lowercase()))
            .unwrap_or_else(|| "leave request".into())
    });

    view! {
        <Layout>
            <PageHeader title="Leave Approvals" subtitle="Requests waiting for your decision" />
            <FlashMessage flash=queue.flash />
            <InlineErrorMessage error=queue.error.into() on_dismiss=Callback::new(move |_| queue.error.set(None)) />
            <LoadFailure error=Signal::derive(move || items.error()) on_retry=Callback::new(move |_| items.retry()) />

            {move || {
                if items.is_loading() && items.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let list = items.data().unwrap_or_default();
                if list.is_empty() {
                    return view! {
                        <EmptyState title="Nothing to review" description="No leave requests are pending." icon="fa-check-double" />
                    }
                    .into_view();
                }
                list.into_iter()
                    .map(|request| {
                        let id = request.id;
                        view! {
                            <div class="bg-surface-elevated shadow rounded-lg p-4 mb-3 flex flex-wrap items-center justify-between gap-3">
                                <div>
                                    <p class="font-medium text-fg">
                                        {request.employee_name.clone().unwrap_or_else(|| "Employee".into())}
                                        " · "{request.leave_type.clone()}
                                    </p>
                                    <p class="text-sm text-fg-muted">
                                        {format_date(request.start_date)}" - "{format_date(request.end_date)}
                                        {format!(" ({} days)", leave_days(request.start_date, request.end_date))}
                                    </p>
                                    {request.reason.clone().map(|r| view! { <p class="text-sm text-fg-subtle mt-1">{r}</p> })}
                                </div>
                                <div class="flex gap-2">
                                    <button
                                        type="button"
                                        class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                        on:click=move |_| queue.open(id, Decision::Approve)
                                    >
                                        "Approve"
                                    </button>
                                    <button
                                        type="button"
                                        class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-danger-bg text-action-danger-text"
                                        on:click=move |_| queue.open(id, Decision::Reject)
                                    >
                                        "Reject"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <DecisionDialog
                decision=queue.decision
                subject=subject
                pending=pending
                on_decide=Callback::new(move |(decision, comments): (Decision, String)| {
                    queue.decide(decision, comments)
                })
            />
        </Layout>
    }
}
