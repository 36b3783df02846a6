use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date key (`YYYY-MM-DD`) to the number of pouches used that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CounterData {
    pub days: BTreeMap<String, u64>,
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Increase,
    Decrease,
}

impl ClickAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action.trim() {
            "add" => Some(Self::Increase),
            "sub" => Some(Self::Decrease),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyPoint {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyAveragePoint {
    pub week: String,
    pub days_counted: u8,
    pub avg_count: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub last_7_days: Vec<DailyPoint>,
    pub weekly_totals: Vec<WeeklyPoint>,
    pub weekly_averages: Vec<WeeklyAveragePoint>,
}
