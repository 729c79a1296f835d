use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, AttendanceSummary, ManualTimeEntry},
    utils::date_range::DateRange,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendancePeriod {
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
}

pub async fn load_period(api: &ApiClient, range: DateRange) -> Result<AttendancePeriod, ApiError> {
    let (records, summary) = futures::join!(
        api.get_my_attendance(range.start_date, range.end_date),
        api.get_attendance_summary(range.start_date, range.end_date),
    );
    Ok(AttendancePeriod {
        records: records?,
        summary: summary?,
    })
}

pub async fn save_manual_entry(api: &ApiClient, entry: ManualTimeEntry) -> Result<(), ApiError> {
    let created = api.create_manual_entry(&entry).await?;
    log::info!("manual time entry {} created", created.id);
    Ok(())
}
