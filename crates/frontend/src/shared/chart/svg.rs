use leptos::prelude::*;

use super::{ChartConfig, ChartHandle, ChartKind, DrawingSurface};

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 32.0;

/// Surface that keeps live charts in a signal and renders them as inline SVG
#[derive(Clone, Copy)]
pub struct SvgChartSurface {
    charts: RwSignal<Vec<(ChartHandle, ChartConfig)>>,
    next_id: StoredValue<u64>,
}

impl SvgChartSurface {
    pub fn new() -> Self {
        Self {
            charts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Configs of the live charts of one kind, oldest first
    pub fn charts_of(&self, kind: ChartKind) -> Vec<ChartConfig> {
        self.charts.with(|charts| {
            charts
                .iter()
                .filter(|(_, config)| config.kind == kind)
                .map(|(_, config)| config.clone())
                .collect()
        })
    }

    pub fn live_count(&self) -> usize {
        self.charts.with_untracked(|charts| charts.len())
    }
}

impl Default for SvgChartSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for SvgChartSurface {
    fn create(&self, config: ChartConfig) -> ChartHandle {
        let handle = ChartHandle(self.next_id.get_value());
        self.next_id.update_value(|id| *id += 1);
        self.charts.update(|charts| charts.push((handle, config)));
        handle
    }

    fn dispose(&self, handle: ChartHandle) {
        if self
            .charts
            .with_untracked(|charts| charts.iter().any(|(h, _)| *h == handle))
        {
            self.charts.update(|charts| charts.retain(|(h, _)| *h != handle));
        }
    }
}

fn scale_y(value: f64, (min, max): (f64, f64)) -> f64 {
    let span = if max > min { max - min } else { 1.0 };
    let clamped = value.clamp(min, max);
    HEIGHT - PAD - (clamped - min) / span * (HEIGHT - 2.0 * PAD)
}

fn x_at(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return WIDTH / 2.0;
    }
    PAD + index as f64 * (WIDTH - 2.0 * PAD) / (count - 1) as f64
}

/// `points` attribute of the trend polyline
pub fn polyline_points(config: &ChartConfig) -> String {
    let range = config.y_range.unwrap_or_else(|| {
        let max = config.series.iter().cloned().fold(0.0_f64, f64::max);
        (0.0, max)
    });
    config
        .series
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, config.series.len()), scale_y(*v, range)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn SvgLineChart(config: ChartConfig) -> impl IntoView {
    let points = polyline_points(&config);
    let stroke = config
        .colors
        .first()
        .cloned()
        .unwrap_or_else(|| "#3B82F6".to_string());
    let count = config.labels.len();
    let labels = config
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = format!("{:.1}", x_at(i, count));
            let y = format!("{:.1}", HEIGHT - 8.0);
            view! {
                <text x=x y=y text-anchor="middle" class="chart-axis-label">
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);

    view! {
        <svg class="chart chart--line" viewBox=view_box role="img">
            <polyline points=points fill="none" stroke=stroke stroke-width="3" stroke-linejoin="round" />
            {labels}
        </svg>
    }
}

#[component]
pub fn SvgBreakdownChart(config: ChartConfig) -> impl IntoView {
    let max = config.series.iter().cloned().fold(0.0_f64, f64::max).max(1.0);
    let row_height = 28.0;
    let height = row_height * config.series.len() as f64 + 8.0;
    let bars = config
        .series
        .iter()
        .zip(config.labels.iter())
        .zip(config.colors.iter())
        .enumerate()
        .map(|(i, ((value, label), color))| {
            let top = i as f64 * row_height + 4.0;
            let bar_width = value / max * (WIDTH - 180.0);
            let bar_y = format!("{:.1}", top);
            let text_y = format!("{:.1}", top + 16.0);
            let value_x = format!("{:.1}", 118.0 + bar_width);
            let bar_width = format!("{:.1}", bar_width);
            let fill = color.clone();
            let percent = format!("{}%", value);
            view! {
                <g>
                    <text x="0" y=text_y.clone() class="chart-axis-label">{label.clone()}</text>
                    <rect x="110" y=bar_y width=bar_width height="20" rx="4" fill=fill />
                    <text x=value_x y=text_y class="chart-value-label">{percent}</text>
                </g>
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", WIDTH, height);

    view! {
        <svg class="chart chart--breakdown" viewBox=view_box role="img">
            {bars}
        </svg>
    }
}

/// Renders every live chart of `kind` on `surface`
#[component]
pub fn SvgCharts(surface: SvgChartSurface, kind: ChartKind) -> impl IntoView {
    move || {
        surface
            .charts_of(kind)
            .into_iter()
            .map(|config| match config.kind {
                ChartKind::Line => view! { <SvgLineChart config=config /> }.into_any(),
                ChartKind::Breakdown => view! { <SvgBreakdownChart config=config /> }.into_any(),
            })
            .collect_view()
    }
}
