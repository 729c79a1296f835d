use super::{repository, utils::parse_week_start};
use crate::api::{ApiClient, ApiError, Timesheet};
use crate::state::{
    approval::{create_approval_queue, ApprovalQueue},
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
};
use crate::utils::{date_range::week_start, time::today_in_app_tz};
use chrono::NaiveDate;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetCommand {
    Submit,
    Delete,
}

impl SheetCommand {
    pub fn title(self) -> &'static str {
        match self {
            SheetCommand::Submit => "Submit timesheet",
            SheetCommand::Delete => "Delete timesheet",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            SheetCommand::Submit => "Once submitted, the timesheet goes to your manager for approval.",
            SheetCommand::Delete => "This draft timesheet will be permanently removed.",
        }
    }

    fn done(self) -> &'static str {
        match self {
            SheetCommand::Submit => "Timesheet submitted",
            SheetCommand::Delete => "Timesheet deleted",
        }
    }
}

#[derive(Clone, Copy)]
pub struct TimesheetsViewModel {
    pub sheets: Loader<Vec<Timesheet>>,
    pub week_start: RwSignal<String>,
    pub generate_action: Action<NaiveDate, Result<Timesheet, ApiError>>,
    pub pending_command: RwSignal<Option<(i64, SheetCommand)>>,
    pub command_action: Action<(i64, SheetCommand), Result<(i64, SheetCommand), ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub flash: Flash,
}

impl TimesheetsViewModel {
    pub fn generate(&self) {
        match parse_week_start(&self.week_start.get_untracked()) {
            Ok(start) => {
                self.error.set(None);
                self.generate_action.dispatch(start);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn confirm(&self) {
        if let Some(command) = self.pending_command.get_untracked() {
            self.command_action.dispatch(command);
        }
    }
}

pub fn default_week_input(today: NaiveDate) -> String {
    week_start(today).format("%Y-%m-%d").to_string()
}

pub fn use_timesheets_view_model() -> TimesheetsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let sheets = {
        let api = api.clone();
        create_loader(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::load_my_timesheets(&api).await }
            },
        )
    };
    let generate_action = {
        let api = api.clone();
        create_action(move |start: &NaiveDate| {
            let api = api.clone();
            let start = *start;
            async move { repository::generate(&api, start).await }
        })
    };
    let command_action = create_action(move |(id, command): &(i64, SheetCommand)| {
        let api = api.clone();
        let (id, command) = (*id, *command);
        async move {
            match command {
                SheetCommand::Submit => repository::submit(&api, id).await?,
                SheetCommand::Delete => repository::remove(&api, id).await?,
            }
            Ok::<_, ApiError>((id, command))
        }
    });

    let error = create_rw_signal(None::<ApiError>);
    let flash = create_flash();
    let pending_command = create_rw_signal(None);

    create_effect(move |_| match generate_action.value().get() {
        Some(Ok(sheet)) => {
            flash.show(format!("Timesheet for week of {} created", sheet.week_start_date));
            sheets.retry();
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| {
        let Some(result) = command_action.value().get() else {
            return;
        };
        pending_command.set(None);
        match result {
            Ok((id, SheetCommand::Submit)) => {
                sheets.update_data(|list| {
                    if let Some(sheet) = list.iter_mut().find(|s| s.id == id) {
                        sheet.status = "Submitted".into();
                    }
                });
                flash.show(SheetCommand::Submit.done());
            }
            Ok((id, SheetCommand::Delete)) => {
                sheets.update_data(|list| list.retain(|s| s.id != id));
                flash.show(SheetCommand::Delete.done());
            }
            Err(err) => error.set(Some(err)),
        }
    });

    TimesheetsViewModel {
        sheets,
        week_start: create_rw_signal(default_week_input(today_in_app_tz())),
        generate_action,
        pending_command,
        command_action,
        error,
        flash,
    }
}

pub fn use_timesheet_approvals() -> ApprovalQueue<Timesheet> {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let fetch_api = api.clone();
    create_approval_queue(
        "Timesheet",
        |sheet: &Timesheet| sheet.id,
        move || {
            let api = fetch_api.clone();
            async move { repository::load_pending(&api).await }
        },
        move |id, decision, comments| {
            let api = api.clone();
            async move { repository::decide(&api, id, decision, &comments).await }
        },
    )
}
