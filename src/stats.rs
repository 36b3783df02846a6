use crate::clock::date_key;
use crate::models::{CounterData, DailyPoint, StatsResponse, WeeklyAveragePoint, WeeklyPoint};
use chrono::{Datelike, Duration, NaiveDate};

const WEEK_COUNT: usize = 8;

pub fn build_stats_at(today: NaiveDate, data: &CounterData) -> StatsResponse {
    let count_on = |date: NaiveDate| data.days.get(&date_key(date)).copied().unwrap_or(0);

    let last_7_days = (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DailyPoint {
                date: date_key(date),
                count: count_on(date),
            }
        })
        .collect();

    let current_week_start = week_start(today);
    let mut weekly_totals = Vec::with_capacity(WEEK_COUNT);
    let mut weekly_averages = Vec::with_capacity(WEEK_COUNT);

    for offset in (0..WEEK_COUNT).rev() {
        let start = current_week_start - Duration::weeks(offset as i64);
        let end = start + Duration::days(6);

        let total = (0..7)
            .map(|day| count_on(start + Duration::days(day)))
            .fold(0u64, u64::saturating_add);

        // Only days up to and including today count towards the average.
        let days_counted = if today < start {
            0
        } else if today > end {
            7
        } else {
            (today - start).num_days() as u8 + 1
        };
        let denom = if days_counted == 0 { 1.0 } else { f64::from(days_counted) };

        weekly_totals.push(WeeklyPoint {
            week: week_label(start),
            start_date: date_key(start),
            end_date: date_key(end),
            count: total,
        });
        weekly_averages.push(WeeklyAveragePoint {
            week: week_label(start),
            days_counted,
            avg_count: total as f64 / denom,
        });
    }

    StatsResponse {
        last_7_days,
        weekly_totals,
        weekly_averages,
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
