use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeFilter {
    Today,
    #[default]
    Week,
    Month,
    Year,
}

impl DateRangeFilter {
    pub const ALL: [DateRangeFilter; 4] = [
        DateRangeFilter::Today,
        DateRangeFilter::Week,
        DateRangeFilter::Month,
        DateRangeFilter::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRangeFilter::Today => "today",
            DateRangeFilter::Week => "week",
            DateRangeFilter::Month => "month",
            DateRangeFilter::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangeFilter::Today => "Today",
            DateRangeFilter::Week => "This Week",
            DateRangeFilter::Month => "This Month",
            DateRangeFilter::Year => "This Year",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub fn month_bounds(date: NaiveDate) -> DateRange {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(date);
    DateRange {
        start_date: first,
        end_date: last,
    }
}

/// Weeks run Monday to Sunday and may straddle a year boundary.
pub fn date_range_for_filter(filter: DateRangeFilter, today: NaiveDate) -> DateRange {
    match filter {
        DateRangeFilter::Today => DateRange {
            start_date: today,
            end_date: today,
        },
        DateRangeFilter::Week => {
            let start = week_start(today);
            DateRange {
                start_date: start,
                end_date: start + Duration::days(6),
            }
        }
        DateRangeFilter::Month => month_bounds(today),
        DateRangeFilter::Year => DateRange {
            start_date: NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
            end_date: NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
        },
    }
}
