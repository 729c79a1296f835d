use super::{repository, utils::report_csv};
use crate::api::{ApiClient, ApiError, DailyReportEntry};
use crate::pages::dashboard::utils::{summarize_daily, DailyCounts};
use crate::state::loader::{create_loader, Loader};
use crate::utils::{time::today_in_app_tz, validation::parse_date_input};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DailyReportViewModel {
    pub date_input: RwSignal<String>,
    pub date: Memo<chrono::NaiveDate>,
    pub status_filter: RwSignal<String>,
    pub report: Loader<Vec<DailyReportEntry>>,
    pub counts: Memo<DailyCounts>,
    pub error: RwSignal<Option<ApiError>>,
}

impl DailyReportViewModel {
    /// Named after the date of the report on screen, not the raw input.
    pub fn export_file_name(&self) -> String {
        format!("daily-attendance-{}.csv", self.date.get_untracked().format("%Y-%m-%d"))
    }

    pub fn export(&self, entries: &[DailyReportEntry]) {
        let name = self.export_file_name();
        if let Err(err) = crate::utils::download::trigger_csv_download(&name, &report_csv(entries)) {
            self.error.set(Some(err));
        }
    }
}

pub fn use_daily_report_view_model() -> DailyReportViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let date_input = create_rw_signal(today_in_app_tz().format("%Y-%m-%d").to_string());
    // Half-typed dates keep the previous report instead of refetching.
    let date = create_memo(move |previous: Option<&chrono::NaiveDate>| {
        parse_date_input(&date_input.get())
            .or_else(|| previous.copied())
            .unwrap_or_else(today_in_app_tz)
    });
    let report = create_loader(
        move || date.get(),
        move |date| {
            let api = api.clone();
            async move { repository::load_daily(&api, date).await }
        },
    );
    let counts = create_memo(move |_| summarize_daily(&report.data().unwrap_or_default()));

    DailyReportViewModel {
        date_input,
        date,
        status_filter: create_rw_signal(String::new()),
        report,
        counts,
        error: create_rw_signal(None),
    }
}
