use crate::{
    api::{AttendanceRecord, AttendanceSummary},
    components::{cards::StatCard, common::StatusBadge, empty_state::EmptyState},
    utils::format::{
        calculate_week_total, format_date, format_hours_long, format_hours_short,
        format_optional_hours, format_time,
    },
};
use leptos::*;

#[component]
pub fn PeriodSummary(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] summary: Signal<AttendanceSummary>,
) -> impl IntoView {
    let total = Signal::derive(move || records.with(|r| calculate_week_total(r)));
    view! {
        <dl class="grid grid-cols-2 gap-4 lg:grid-cols-5">
            <div title=move || format_hours_long(total.get())>
                <StatCard
                    label="Total hours"
                    value=Signal::derive(move || format_hours_short(total.get()))
                    icon="fa-clock"
                />
            </div>
            <StatCard
                label="Days present"
                value=Signal::derive(move || summary.with(|s| s.total_days_present.to_string()))
                icon="fa-calendar-check"
            />
            <StatCard
                label="Average per day"
                value=Signal::derive(move || summary.with(|s| format_hours_short(s.average_hours_per_day)))
                icon="fa-chart-line"
            />
            <StatCard
                label="Late arrivals"
                value=Signal::derive(move || summary.with(|s| s.late_arrivals.to_string()))
                icon="fa-user-clock"
            />
            <StatCard
                label="Absences"
                value=Signal::derive(move || summary.with(|s| s.absences.to_string()))
                icon="fa-user-xmark"
            />
        </dl>
    }
}

#[component]
pub fn RecordsTable(#[prop(into)] records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <Show
            when=move || records.with(|r| !r.is_empty())
            fallback=|| view! {
                <EmptyState
                    title="No attendance records"
                    description="Nothing was recorded for this period."
                    icon="fa-calendar-xmark"
                />
            }
        >
            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead class="bg-surface-muted">
                        <tr class="text-left text-fg-muted">
                            <th class="px-4 py-2">"Date"</th>
                            <th class="px-4 py-2">"Clock in"</th>
                            <th class="px-4 py-2">"Clock out"</th>
                            <th class="px-4 py-2">"Hours"</th>
                            <th class="px-4 py-2">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            records
                                .get()
                                .into_iter()
                                .map(|record| view! {
                                    <tr>
                                        <td class="px-4 py-2 text-fg">{format_date(record.work_date)}</td>
                                        <td class="px-4 py-2">{format_time(record.clock_in_time)}</td>
                                        <td class="px-4 py-2">{format_time(record.clock_out_time)}</td>
                                        <td class="px-4 py-2">{format_optional_hours(record.total_hours)}</td>
                                        <td class="px-4 py-2">
                                            <StatusBadge status=record.status.unwrap_or_else(|| "-".into()) />
                                        </td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn sample() -> AttendanceRecord {
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        AttendanceRecord {
            work_date: day,
            clock_in_time: day.and_hms_opt(9, 0, 0),
            clock_out_time: day.and_hms_opt(17, 0, 0),
            total_hours: Some(8.0),
            status: Some("Present".into()),
        }
    }

    #[test]
    fn summary_shows_week_total() {
        let html = render_to_string(|| {
            view! {
                <PeriodSummary
                    records=Signal::derive(|| vec![sample()])
                    summary=Signal::derive(AttendanceSummary::default)
                />
            }
        });
        assert!(html.contains("8h"));
        assert!(html.contains("8 hrs"));
    }

    #[test]
    fn table_lists_records() {
        let html = render_to_string(|| {
            view! { <RecordsTable records=Signal::derive(|| vec![sample()]) /> }
        });
        assert!(html.contains("Mar 04, 2024"));
        assert!(html.contains("09:00"));
        assert!(html.contains("Present"));
    }

    #[test]
    fn empty_table_shows_placeholder() {
        let html = render_to_string(|| {
            view! { <RecordsTable records=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("No attendance records"));
    }
}
