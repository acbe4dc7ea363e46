use crate::geom::{Point, point};
use crate::scale::Alignment;
use crate::series::{AxisValue, NormalizedSeries};
use ryu_js::Buffer;

/// Polyline through one series, in pixel space and x order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    points: Vec<Point>,
}

impl PathData {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// SVG path datum: `M x y` for the first point, `L x y` for the rest, joined by spaces.
    pub fn to_path_string(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if i == 0 { 'M' } else { 'L' });
            out.push(' ');
            fmt_js_into(&mut out, p.x);
            out.push(' ');
            fmt_js_into(&mut out, p.y);
        }
        out
    }
}

impl std::fmt::Display for PathData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_path_string())
    }
}

/// Writes `v` the way JavaScript's `Number#toString` would.
pub fn fmt_js_into(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("NaN");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        return;
    }
    // JS prints -0 as "0".
    let v = if v == 0.0 { 0.0 } else { v };
    let mut b = Buffer::new();
    out.push_str(b.format_finite(v));
}

pub fn fmt_js(v: f64) -> String {
    let mut out = String::new();
    fmt_js_into(&mut out, v);
    out
}

/// Indices of `x_values` in ascending axis order; ties keep their input order.
pub fn sorted_indices(x_values: &[AxisValue], x: &Alignment) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..x_values.len()).collect();
    idx.sort_by(|&a, &b| x.rank(&x_values[a]).total_cmp(&x.rank(&x_values[b])));
    idx
}

pub fn build_path(
    series: &NormalizedSeries,
    x: &Alignment,
    y: &Alignment,
    width: f64,
    height: f64,
) -> PathData {
    let points = sorted_indices(&series.x_values, x)
        .into_iter()
        .map(|i| {
            let y_value = AxisValue::Number(series.y_values.get(i).copied().unwrap_or(f64::NAN));
            point(
                x.position(&series.x_values[i], width),
                y.position(&y_value, height),
            )
        })
        .collect();
    PathData::from_points(points)
}
