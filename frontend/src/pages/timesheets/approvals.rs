use super::view_model::use_timesheet_approvals;
use crate::{
    components::{
        decision::{Decision, DecisionDialog},
        empty_state::EmptyState,
        error::{InlineErrorMessage, LoadFailure},
        layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
    },
    utils::format::{format_date, format_hours_short},
};
use leptos::*;

#[component]
pub fn TimesheetApprovalsPanel() -> impl IntoView {
    let queue = use_timesheet_approvals();
    let items = queue.items;
    let pending = queue.action.pending();
    let subject = Signal::derive(move || {
        let id = queue.selected.get();
        items
            .data()
            .and_then(|list| list.into_iter().find(|s| Some(s.id) == id))
            .map(|s| {
                format!(
                    "timesheet from {}",
                    s.employee_name.unwrap_or_else(|| "employee".into())
                )
            })
            .unwrap_or_else(|| "timesheet".into())
    });

    view! {
        <Layout>
            <PageHeader title="Timesheet Approvals" subtitle="Submitted timesheets from your team" />
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
                        <EmptyState title="Nothing to review" description="No timesheets are waiting for approval." icon="fa-check-double" />
                    }
                    .into_view();
                }
                view! {
                    <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead class="bg-surface-muted">
                                <tr class="text-left text-fg-muted">
                                    <th class="px-4 py-2">"Employee"</th>
                                    <th class="px-4 py-2">"Week"</th>
                                    <th class="px-4 py-2">"Hours"</th>
                                    <th class="px-4 py-2"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {list
                                    .into_iter()
                                    .map(|sheet| {
                                        let id = sheet.id;
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 text-fg">{sheet.employee_name.unwrap_or_else(|| "-".into())}</td>
                                                <td class="px-4 py-2">{format_date(sheet.week_start_date)}</td>
                                                <td class="px-4 py-2">{format_hours_short(sheet.total_hours)}</td>
                                                <td class="px-4 py-2 text-right space-x-3">
                                                    <button
                                                        type="button"
                                                        class="text-sm font-medium text-status-success-text hover:underline"
                                                        on:click=move |_| queue.open(id, Decision::Approve)
                                                    >
                                                        "Approve"
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="text-sm font-medium text-status-error-text hover:underline"
                                                        on:click=move |_| queue.open(id, Decision::Reject)
                                                    >
                                                        "Reject"
                                                    </button>
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
