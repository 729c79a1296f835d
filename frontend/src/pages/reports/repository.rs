use crate::api::{ApiClient, ApiError, DailyReportEntry};
use chrono::NaiveDate;

pub async fn load_daily(api: &ApiClient, date: NaiveDate) -> Result<Vec<DailyReportEntry>, ApiError> {
    let mut entries = api.get_daily_report(date).await?;
    entries.sort_by(|a, b| a.employee_name.cmp(&b.employee_name));
    Ok(entries)
}
