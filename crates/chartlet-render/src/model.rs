use crate::style::StyleOverlay;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const LINE_STROKE_WIDTH: f64 = 3.0;
pub const LINE_JOIN: &str = "round";
pub const LINE_CAP: &str = "round";

/// One stroked, unfilled polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub d: String,
    pub fill: String,
    pub stroke: String,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
    #[serde(rename = "strokeLinejoin")]
    pub stroke_linejoin: String,
    #[serde(rename = "strokeLinecap")]
    pub stroke_linecap: String,
    #[serde(default, skip_serializing_if = "StyleOverlay::is_empty")]
    pub style: StyleOverlay,
}

impl LinePath {
    pub fn new(d: String, stroke: impl Into<String>, style: StyleOverlay) -> Self {
        Self {
            d,
            fill: "none".to_string(),
            stroke: stroke.into(),
            stroke_width: LINE_STROKE_WIDTH,
            stroke_linejoin: LINE_JOIN.to_string(),
            stroke_linecap: LINE_CAP.to_string(),
            style,
        }
    }
}

/// A sized drawing surface holding one path per series.
///
/// `width`/`height` are `None` when neither the props nor the context provided them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartScene {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Pass-through attributes for the container element.
    #[serde(default)]
    pub attrs: IndexMap<String, String>,
    #[serde(default)]
    pub paths: Vec<LinePath>,
}
