use crate::{
    api::DailyReportEntry,
    utils::format::{format_hours_short, format_time},
};

pub const STATUS_FILTERS: &[&str] = &["Present", "Late", "Absent", "On Leave"];

pub fn status_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), "All statuses".to_string()))
        .chain(STATUS_FILTERS.iter().map(|s| (s.to_string(), s.to_string())))
        .collect()
}

pub fn filter_entries(entries: &[DailyReportEntry], status: &str) -> Vec<DailyReportEntry> {
    let wanted: String = status.chars().filter(|c| !c.is_whitespace()).collect();
    entries
        .iter()
        .filter(|entry| {
            wanted.is_empty()
                || entry
                    .status
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .eq_ignore_ascii_case(&wanted)
        })
        .cloned()
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn report_csv(entries: &[DailyReportEntry]) -> String {
    let mut out = String::from("Employee,Department,Clock in,Clock out,Hours,Status\n");
    for entry in entries {
        let row = [
            csv_field(&entry.employee_name),
            csv_field(entry.department_name.as_deref().unwrap_or("")),
            format_time(entry.clock_in_time),
            format_time(entry.clock_out_time),
            entry.total_hours.map(format_hours_short).unwrap_or_default(),
            csv_field(&entry.status),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
pub(crate) fn entry(name: &str, status: &str) -> DailyReportEntry {
    DailyReportEntry {
        employee_id: 1,
        employee_name: name.into(),
        department_name: Some("Engineering".into()),
        clock_in_time: None,
        clock_out_time: None,
        total_hours: Some(7.5),
        status: status.into(),
    }
}
