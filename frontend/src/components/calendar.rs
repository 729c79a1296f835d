use crate::{
    api::AttendanceRecord,
    utils::{
        calendar::{calendar_grid, shift_month},
        format::{format_optional_hours, status_color},
    },
};
use chrono::{Datelike, NaiveDate};
use leptos::*;
use std::collections::HashMap;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// Month view of attendance. `month` is `(year, month)`; the arrows move it.
#[component]
pub fn AttendanceCalendar(
    month: RwSignal<(i32, u32)>,
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
) -> impl IntoView {
    let by_date = create_memo(move |_| {
        records.with(|items| {
            items
                .iter()
                .map(|r| (r.work_date, r.clone()))
                .collect::<HashMap<NaiveDate, AttendanceRecord>>()
        })
    });
    let step = move |delta: i32| {
        month.update(|(y, m)| {
            let (ny, nm) = shift_month(*y, *m, delta);
            *y = ny;
            *m = nm;
        })
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4">
            <div class="flex items-center justify-between mb-3">
                <button type="button" aria-label="Previous month" class="p-2 text-fg-muted hover:text-fg" on:click=move |_| step(-1)>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <h3 class="text-base font-semibold text-fg">
                    {move || { let (y, m) = month.get(); month_title(y, m) }}
                </h3>
                <button type="button" aria-label="Next month" class="p-2 text-fg-muted hover:text-fg" on:click=move |_| step(1)>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <div class="grid grid-cols-7 gap-1 text-center text-xs font-medium text-fg-muted">
                {WEEKDAYS.iter().map(|d| view! { <div>{*d}</div> }).collect_view()}
            </div>
            <div class="mt-1 space-y-1">
                {move || {
                    let (y, m) = month.get();
                    calendar_grid(y, m)
                        .into_iter()
                        .map(|week| {
                            view! {
                                <div class="grid grid-cols-7 gap-1">
                                    {week
                                        .into_iter()
                                        .map(|cell| match cell {
                                            None => view! { <div class="h-16"></div> }.into_view(),
                                            Some(day) => {
                                                let record = by_date.with(|map| map.get(&day).cloned());
                                                let tone = record
                                                    .as_ref()
                                                    .and_then(|r| r.status.as_deref())
                                                    .map(status_color)
                                                    .unwrap_or("bg-surface-muted text-fg-muted");
                                                view! {
                                                    <div class=format!("h-16 rounded-md p-1 text-left text-xs {}", tone)>
                                                        <div class="font-semibold">{day.day()}</div>
                                                        {record.map(|r| view! {
                                                            <div>{format_optional_hours(r.total_hours)}</div>
                                                        })}
                                                    </div>
                                                }
                                                .into_view()
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn calendar_marks_days_with_records() {
        let html = render_to_string(|| {
            let month = create_rw_signal((2024, 2));
            let records = Signal::derive(|| {
                vec![AttendanceRecord {
                    work_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
                    clock_in_time: None,
                    clock_out_time: None,
                    total_hours: Some(7.5),
                    status: Some("Late".into()),
                }]
            });
            view! { <AttendanceCalendar month=month records=records /> }
        });
        assert!(html.contains("February 2024"));
        assert!(html.contains("7.5h"));
        assert!(html.contains("bg-status-warning-bg"));
    }
}
