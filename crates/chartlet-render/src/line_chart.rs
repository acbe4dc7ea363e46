use crate::context::ChartletContext;
use crate::model::{LineChartScene, LinePath};
use crate::palette::{ChartColor, categorical, color_for};
use crate::style::StyleOverlay;
use crate::Result;
use chartlet_core::{SeriesInput, compute_line_paths, fmt_js};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_colors() -> Vec<ChartColor> {
    categorical()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartProps {
    /// Required; `None` is reported as invalid input when the chart is laid out.
    #[serde(default)]
    pub series: Option<Vec<SeriesInput>>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default = "default_colors")]
    pub colors: Vec<ChartColor>,
    #[serde(default)]
    pub path_style: StyleOverlay,
    #[serde(default)]
    pub path_styles: Vec<StyleOverlay>,
    /// Everything else is forwarded to the container.
    #[serde(flatten)]
    pub attrs: IndexMap<String, Value>,
}

impl Default for LineChartProps {
    fn default() -> Self {
        Self {
            series: None,
            width: None,
            height: None,
            colors: default_colors(),
            path_style: StyleOverlay::default(),
            path_styles: Vec::new(),
            attrs: IndexMap::new(),
        }
    }
}

impl LineChartProps {
    pub fn new(series: Vec<SeriesInput>) -> Self {
        Self {
            series: Some(series),
            ..Default::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

fn attr_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.as_f64().map(fmt_js).unwrap_or_else(|| n.to_string())),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Resolves dimensions against `context` and builds the scene for `props`.
///
/// Missing dimensions leave the container unsized and lay the geometry out against a zero
/// extent.
pub fn layout_line_chart(props: &LineChartProps, context: &ChartletContext) -> Result<LineChartScene> {
    let width = context.resolve_width(props.width);
    let height = context.resolve_height(props.height);
    if width.is_none() || height.is_none() {
        tracing::debug!(?width, ?height, "line chart has unresolved dimensions");
    }

    let geometry = compute_line_paths(
        props.series.as_deref(),
        width.unwrap_or(0.0),
        height.unwrap_or(0.0),
    )?;

    let paths = geometry
        .paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            LinePath::new(
                path.to_path_string(),
                color_for(&props.colors, i),
                props.path_style.merged(props.path_styles.get(i)),
            )
        })
        .collect();

    let attrs = props
        .attrs
        .iter()
        .filter_map(|(k, v)| attr_text(v).map(|t| (k.clone(), t)))
        .collect();

    Ok(LineChartScene {
        width,
        height,
        attrs,
        paths,
    })
}
