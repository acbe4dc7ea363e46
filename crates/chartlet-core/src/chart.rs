use crate::path::{PathData, build_path};
use crate::scale::{Alignment, AxisOptions, make_alignment_functions};
use crate::series::{DomainKind, SeriesInput, normalize_series_list};
use crate::Result;

/// Geometry of a line chart at fixed pixel extents.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    pub width: f64,
    pub height: f64,
    pub x_domain: DomainKind,
    pub x: Alignment,
    pub y: Alignment,
    /// One entry per input series, in input order.
    pub paths: Vec<PathData>,
}

/// Runs normalize -> scale -> path for every series of a line chart.
///
/// `width` and `height` must already be resolved. The x axis distributes evenly when the
/// series are keyed records and scales continuously when they are pair lists; the y axis
/// is continuous and reversed.
pub fn compute_line_paths(
    series: Option<&[SeriesInput]>,
    width: f64,
    height: f64,
) -> Result<LineGeometry> {
    let normalized = normalize_series_list(series)?;
    // An empty `[]` parses as a pair list; it has no x values and takes no part in the domain.
    let x_domain = DomainKind::combine(
        normalized
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.domain),
    )?;

    let x_pool: Vec<_> = normalized
        .iter()
        .flat_map(|s| s.x_values.iter().cloned())
        .collect();
    let y_pool: Vec<f64> = normalized
        .iter()
        .flat_map(|s| s.y_values.iter().copied())
        .collect();
    let (x, y) = make_alignment_functions(
        &x_pool,
        &y_pool,
        AxisOptions::for_domain(x_domain),
        AxisOptions::value_axis(),
    );

    let paths = normalized
        .iter()
        .map(|s| build_path(s, &x, &y, width, height))
        .collect::<Vec<_>>();

    tracing::debug!(
        series = paths.len(),
        points = x_pool.len(),
        ?x_domain,
        width,
        height,
        "computed line chart geometry"
    );

    Ok(LineGeometry {
        width,
        height,
        x_domain,
        x,
        y,
        paths,
    })
}
