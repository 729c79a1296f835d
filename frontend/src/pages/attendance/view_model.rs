use super::repository::{self, AttendancePeriod};
use crate::api::{ApiClient, ApiError, ManualTimeEntry};
use crate::state::{
    attendance::{self, run_clock_command, use_attendance, AttendanceStore, ClockCommand},
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
};
use crate::utils::{
    date_range::{date_range_for_filter, month_bounds, DateRangeFilter},
    time::today_in_app_tz,
    validation::validate_manual_entry,
};
use chrono::{Datelike, NaiveDate};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordsView {
    #[default]
    Table,
    Calendar,
}

#[derive(Clone, Copy)]
pub struct ManualEntryForm {
    pub open: RwSignal<bool>,
    pub clock_in: RwSignal<String>,
    pub clock_out: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
}

impl ManualEntryForm {
    fn new() -> Self {
        Self {
            open: create_rw_signal(false),
            clock_in: create_rw_signal(String::new()),
            clock_out: create_rw_signal(String::new()),
            notes: create_rw_signal(String::new()),
            error: create_rw_signal(None),
        }
    }

    pub fn reset(&self) {
        self.open.set(false);
        self.clock_in.set(String::new());
        self.clock_out.set(String::new());
        self.notes.set(String::new());
        self.error.set(None);
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub filter: RwSignal<DateRangeFilter>,
    pub records_view: RwSignal<RecordsView>,
    pub month: RwSignal<(i32, u32)>,
    pub period: Loader<AttendancePeriod>,
    pub attendance: AttendanceStore,
    pub clock_action: Action<ClockCommand, Result<ClockCommand, ApiError>>,
    pub delete_target: RwSignal<Option<i64>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    pub manual: ManualEntryForm,
    pub manual_action: Action<ManualTimeEntry, Result<(), ApiError>>,
    pub flash: Flash,
}

impl AttendanceViewModel {
    pub fn submit_manual_entry(&self) {
        let form = self.manual;
        match validate_manual_entry(
            &form.clock_in.get_untracked(),
            &form.clock_out.get_untracked(),
            &form.notes.get_untracked(),
        ) {
            Ok(entry) => {
                form.error.set(None);
                self.manual_action.dispatch(entry);
            }
            Err(err) => form.error.set(Some(err)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(id);
        }
    }
}

fn first_of_month((year, month): (i32, u32), fallback: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(fallback)
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let today = today_in_app_tz();
    let filter = create_rw_signal(DateRangeFilter::default());
    let records_view = create_rw_signal(RecordsView::default());
    let month = create_rw_signal((today.year(), today.month()));

    // The calendar always shows a whole month; the table follows the filter.
    let period = {
        let api = api.clone();
        create_loader(
            move || match records_view.get() {
                RecordsView::Table => date_range_for_filter(filter.get(), today),
                RecordsView::Calendar => month_bounds(first_of_month(month.get(), today)),
            },
            move |range| {
                let api = api.clone();
                async move { repository::load_period(&api, range).await }
            },
        )
    };

    let attendance_store = use_attendance();
    {
        let api = api.clone();
        create_effect(move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = attendance::refresh(&api, attendance_store).await {
                    log::warn!("could not load clock status: {}", err);
                }
            });
        });
    }

    let clock_action = {
        let api = api.clone();
        create_action(move |command: &ClockCommand| {
            let api = api.clone();
            let command = *command;
            async move {
                run_clock_command(&api, attendance_store, command)
                    .await
                    .map(|_| command)
            }
        })
    };

    let delete_action = {
        let api = api.clone();
        create_action(move |id: &i64| {
            let api = api.clone();
            let id = *id;
            async move { attendance::delete_entry(&api, attendance_store, id).await }
        })
    };

    let manual_action = create_action(move |entry: &ManualTimeEntry| {
        let api = api.clone();
        let entry = entry.clone();
        async move {
            repository::save_manual_entry(&api, entry).await?;
            if let Err(err) = attendance::refresh(&api, attendance_store).await {
                log::warn!("could not refresh recent activity: {}", err);
            }
            Ok::<(), ApiError>(())
        }
    });

    let flash = create_flash();
    let manual = ManualEntryForm::new();
    let delete_target = create_rw_signal(None::<i64>);

    create_effect(move |_| {
        if let Some(Ok(command)) = clock_action.value().get() {
            flash.show(command.success_message());
            period.retry();
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            if result.is_ok() {
                flash.show("Time entry deleted");
                period.retry();
            }
        }
    });
    create_effect(move |_| match manual_action.value().get() {
        Some(Ok(())) => {
            manual.reset();
            flash.show("Time entry added");
            period.retry();
        }
        Some(Err(err)) => manual.error.set(Some(err)),
        None => {}
    });

    AttendanceViewModel {
        filter,
        records_view,
        month,
        period,
        attendance: attendance_store,
        clock_action,
        delete_target,
        delete_action,
        manual,
        manual_action,
        flash,
    }
}
