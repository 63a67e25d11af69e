use contracts::dashboards::d100_overview::{PeriodBreakdown, WeeklyPoint};

use crate::shared::chart::{ChartConfig, ChartKind};

/// Value axis of the weekly trend
pub const TREND_RANGE: (f64, f64) = (0.0, 100.0);

pub const TREND_COLOR: &str = "#3B82F6";

/// Segment colors, assigned by period index modulo length
pub const PALETTE: [&str; 4] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444"];

/// Trend over the weekly sales, in fetched order
pub fn trend_config(weekly: &[WeeklyPoint]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        labels: weekly.iter().map(|p| p.day.clone()).collect(),
        series: weekly.iter().map(|p| p.value).collect(),
        colors: vec![TREND_COLOR.to_string()],
        y_range: Some(TREND_RANGE),
    }
}

/// One segment per period, sized by its percentage
pub fn breakdown_config(periods: &[PeriodBreakdown]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Breakdown,
        labels: periods.iter().map(|p| p.name.clone()).collect(),
        series: periods.iter().map(|p| p.percentage).collect(),
        colors: (0..periods.len())
            .map(|i| PALETTE[i % PALETTE.len()].to_string())
            .collect(),
        y_range: None,
    }
}
