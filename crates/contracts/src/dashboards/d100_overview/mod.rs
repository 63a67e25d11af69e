use serde::{Deserialize, Serialize};

/// Full payload of `dashboard.json`. Replaced wholesale on every load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: Vec<StatCard>,
    pub sales_history: SalesHistory,
    pub referrals: Vec<Referral>,
}

/// Headline figure shown in the stat card row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    /// Pre-formatted display value, e.g. "S/1000"
    pub value: String,
    /// Change against the previous period, e.g. "+12%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesHistory {
    /// One entry per day of week, in the order they should be plotted
    pub weekly: Vec<WeeklyPoint>,
    /// Percentages are independent and need not sum to 100
    pub periods: Vec<PeriodBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub day: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    pub name: String,
    pub percentage: f64,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    pub name: String,
    pub count: u32,
    pub percentage: f64,
}
