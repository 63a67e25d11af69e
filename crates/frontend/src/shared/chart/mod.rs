//! Drawing-surface seam used by dashboards.
//!
//! View models only ever push configs into a surface and dispose the handles
//! they got back; nothing is read back.

pub mod svg;

pub use svg::SvgChartSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Single series over ordered categories
    Line,
    /// One segment per entry, sized by magnitude
    Breakdown,
}

/// Everything a surface needs to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<f64>,
    /// One color per segment for breakdowns, a single stroke color for lines
    pub colors: Vec<String>,
    /// Fixed value axis bounds, if any
    pub y_range: Option<(f64, f64)>,
}

/// Opaque id of a chart living on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartHandle(pub u64);

pub trait DrawingSurface: Send + Sync {
    fn create(&self, config: ChartConfig) -> ChartHandle;

    /// Unknown or already disposed handles are ignored.
    fn dispose(&self, handle: ChartHandle);
}
