use chrono::{Datelike, NaiveDate};

pub type CalendarWeek = [Option<NaiveDate>; 7];

/// Monday-first weeks covering the month; cells outside it are `None`.
pub fn calendar_grid(year: i32, month: u32) -> Vec<CalendarWeek> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let mut weeks = Vec::new();
    let mut week: CalendarWeek = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;
    let mut day = first;

    while day.month() == month {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}
