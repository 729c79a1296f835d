use super::{
    components::{
        manual_entry::ManualEntryModal,
        recent::RecentActivity,
        records::{PeriodSummary, RecordsTable},
    },
    view_model::{use_attendance_view_model, RecordsView},
};
use crate::{
    components::{
        calendar::AttendanceCalendar,
        cards::ClockCard,
        confirm_dialog::ConfirmDialog,
        error::{InlineErrorMessage, LoadFailure},
        layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
    },
    state::attendance::{dismiss_error, ClockCommand},
    utils::date_range::DateRangeFilter,
};
use leptos::*;

const TAB_CLASS: &str = "px-3 py-1.5 rounded-md text-sm font-medium";
const TAB_ACTIVE: &str = "bg-action-primary-bg text-action-primary-text";
const TAB_IDLE: &str = "text-fg-muted hover:bg-action-ghost-bg-hover";

fn tab_class(active: bool) -> String {
    format!("{} {}", TAB_CLASS, if active { TAB_ACTIVE } else { TAB_IDLE })
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let store = vm.attendance;
    let attendance = store.state;
    let period = vm.period;
    let manual = vm.manual;

    let clock_pending = vm.clock_action.pending();
    let clock_status = Signal::derive(move || attendance.with(|s| s.status.clone()));
    let clock_busy = Signal::derive(move || clock_pending.get() || attendance.with(|s| s.loading));
    let attendance_error = Signal::derive(move || attendance.with(|s| s.error.clone()));
    let recent = Signal::derive(move || attendance.with(|s| s.recent.clone()));
    let records = Signal::derive(move || period.data().map(|p| p.records).unwrap_or_default());
    let summary = Signal::derive(move || period.data().map(|p| p.summary).unwrap_or_default());
    let load_error = Signal::derive(move || period.error());
    let delete_open = Signal::derive(move || vm.delete_target.with(Option::is_some));
    let delete_pending = vm.delete_action.pending();
    let manual_pending = vm.manual_action.pending();

    view! {
        <Layout>
            <PageHeader title="Attendance" subtitle="Clock in and out and review your hours">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| manual.open.set(true)
                >
                    <i class="fas fa-plus mr-2"></i>
                    "Manual entry"
                </button>
            </PageHeader>
            <FlashMessage flash=vm.flash />
            <InlineErrorMessage
                error=attendance_error
                on_dismiss=Callback::new(move |_| dismiss_error(store))
            />

            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <div class="lg:col-span-1 space-y-6">
                    <ClockCard
                        status=clock_status
                        pending=clock_busy
                        on_clock_in=Callback::new(move |_| vm.clock_action.dispatch(ClockCommand::In))
                        on_clock_out=Callback::new(move |_| vm.clock_action.dispatch(ClockCommand::Out))
                    />
                    <RecentActivity
                        entries=recent
                        on_delete=Callback::new(move |id| vm.delete_target.set(Some(id)))
                    />
                </div>

                <div class="lg:col-span-2 space-y-4">
                    <div class="flex flex-wrap items-center justify-between gap-2">
                        <div class="flex gap-1" role="tablist" aria-label="Period">
                            {DateRangeFilter::ALL
                                .into_iter()
                                .map(|filter| view! {
                                    <button
                                        type="button"
                                        class=move || tab_class(vm.filter.get() == filter)
                                        disabled=move || vm.records_view.get() == RecordsView::Calendar
                                        on:click=move |_| vm.filter.set(filter)
                                    >
                                        {filter.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                        <div class="flex gap-1">
                            <button
                                type="button"
                                class=move || tab_class(vm.records_view.get() == RecordsView::Table)
                                on:click=move |_| vm.records_view.set(RecordsView::Table)
                            >
                                <i class="fas fa-list mr-1"></i>"Table"
                            </button>
                            <button
                                type="button"
                                class=move || tab_class(vm.records_view.get() == RecordsView::Calendar)
                                on:click=move |_| vm.records_view.set(RecordsView::Calendar)
                            >
                                <i class="fas fa-calendar mr-1"></i>"Calendar"
                            </button>
                        </div>
                    </div>

                    <LoadFailure error=load_error on_retry=Callback::new(move |_| period.retry()) />
                    <PeriodSummary records=records summary=summary />
                    {move || {
                        if period.is_loading() && period.data().is_none() {
                            return view! { <LoadingSpinner /> }.into_view();
                        }
                        match vm.records_view.get() {
                            RecordsView::Table => view! { <RecordsTable records=records /> }.into_view(),
                            RecordsView::Calendar => {
                                view! { <AttendanceCalendar month=vm.month records=records /> }.into_view()
                            }
                        }
                    }}
                </div>
            </div>

            <ManualEntryModal
                is_open=manual.open.into()
                clock_in=manual.clock_in
                clock_out=manual.clock_out
                notes=manual.notes
                error=manual.error.into()
                pending=manual_pending
                on_submit=Callback::new(move |_| vm.submit_manual_entry())
                on_close=Callback::new(move |_| manual.reset())
            />
            <ConfirmDialog
                is_open=delete_open
                title="Delete time entry"
                message="This time entry will be permanently removed."
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.delete_target.set(None))
                pending=delete_pending
                destructive=true
            />
        </Layout>
    }
}
