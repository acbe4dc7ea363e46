#![forbid(unsafe_code)]

//! Line-chart scenes and their SVG serialization.
//!
//! [`layout_line_chart`] turns [`LineChartProps`] into a [`LineChartScene`] (container size,
//! pass-through attributes and one stroked path per series). [`svg::render_line_chart_svg`]
//! writes that scene out; other backends can consume the scene directly.

pub mod context;
pub mod line_chart;
pub mod model;
pub mod palette;
pub mod style;
pub mod svg;

pub use context::ChartletContext;
pub use line_chart::{LineChartProps, layout_line_chart};
pub use model::{LineChartScene, LinePath};
pub use palette::{CATEGORICAL, ChartColor, color_for};
pub use style::StyleOverlay;
pub use svg::SvgRenderOptions;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] chartlet_core::Error),
    #[error("line chart props JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lays out and serializes `props` in one step.
pub fn render_line_chart(
    props: &LineChartProps,
    context: &ChartletContext,
    options: &SvgRenderOptions,
) -> Result<String> {
    let scene = layout_line_chart(props, context)?;
    Ok(svg::render_line_chart_svg(&scene, options))
}
