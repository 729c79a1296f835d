use super::{
    utils::{filter_entries, status_options},
    view_model::use_daily_report_view_model,
};
use crate::{
    components::{
        cards::StatCard,
        common::{Button, ButtonVariant, StatusBadge},
        empty_state::EmptyState,
        error::{InlineErrorMessage, LoadFailure},
        forms::{SelectField, TextField},
        layout::{Layout, LoadingSpinner, PageHeader},
    },
    utils::format::{format_hours_short, format_time},
};
use leptos::*;

#[component]
pub fn DailyReportPanel() -> impl IntoView {
    let vm = use_daily_report_view_model();
    let report = vm.report;
    let counts = vm.counts;
    let visible = Signal::derive(move || {
        filter_entries(&report.data().unwrap_or_default(), &vm.status_filter.get())
    });

    view! {
        <Layout>
            <PageHeader title="Daily Attendance" subtitle="Who is in, late, away or absent">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || visible.with(Vec::is_empty))
                    on_click=Callback::new(move |_| vm.export(&visible.get_untracked()))
                >
                    <i class="fas fa-file-csv mr-2"></i>
                    "Export CSV"
                </Button>
            </PageHeader>
            <InlineErrorMessage error=vm.error.into() on_dismiss=Callback::new(move |_| vm.error.set(None)) />

            <div class="grid gap-3 sm:grid-cols-2 mb-6">
                <TextField label="Date" value=vm.date_input input_type="date" />
                <SelectField label="Status" value=vm.status_filter options=Signal::derive(status_options) />
            </div>

            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4 mb-6">
                <StatCard label="Present" value=Signal::derive(move || counts.get().present.to_string()) icon="fa-user-check" />
                <StatCard label="Late" value=Signal::derive(move || counts.get().late.to_string()) icon="fa-clock" />
                <StatCard label="Absent" value=Signal::derive(move || counts.get().absent.to_string()) icon="fa-user-xmark" />
                <StatCard label="On leave" value=Signal::derive(move || counts.get().on_leave.to_string()) icon="fa-umbrella-beach" />
            </div>

            <LoadFailure error=Signal::derive(move || report.error()) on_retry=Callback::new(move |_| report.retry()) />
            {move || {
                if report.is_loading() && report.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let rows = visible.get();
                if rows.is_empty() {
                    return view! {
                        <EmptyState title="No attendance records" description="Nothing was recorded for this day and filter." icon="fa-calendar-day" />
                    }
                    .into_view();
                }
                view! {
                    <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead class="bg-surface-muted">
                                <tr class="text-left text-fg-muted">
                                    <th class="px-4 py-2">"Employee"</th>
                                    <th class="px-4 py-2">"Department"</th>
                                    <th class="px-4 py-2">"Clock in"</th>
                                    <th class="px-4 py-2">"Clock out"</th>
                                    <th class="px-4 py-2">"Hours"</th>
                                    <th class="px-4 py-2">"Status"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {rows
                                    .into_iter()
                                    .map(|entry| view! {
                                        <tr>
                                            <td class="px-4 py-2 font-medium text-fg">{entry.employee_name}</td>
                                            <td class="px-4 py-2">{entry.department_name.unwrap_or_default()}</td>
                                            <td class="px-4 py-2">{format_time(entry.clock_in_time)}</td>
                                            <td class="px-4 py-2">{format_time(entry.clock_out_time)}</td>
                                            <td class="px-4 py-2">{entry.total_hours.map(format_hours_short).unwrap_or_default()}</td>
                                            <td class="px-4 py-2"><StatusBadge status=entry.status /></td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_view()
            }}
        </Layout>
    }
}
