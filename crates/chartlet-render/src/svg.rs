use crate::model::{LineChartScene, LinePath};
use chartlet_core::fmt_js;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Optional root `id`.
    pub diagram_id: Option<String>,
    /// Emit a `viewBox` matching the resolved size.
    pub view_box: bool,
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_xml_into(out, value);
    out.push('"');
}

/// SVG attribute name for a container pass-through key (`className` -> `class`).
fn container_attr_name(key: &str) -> Option<&str> {
    match key {
        "className" => Some("class"),
        // Owned by the renderer.
        "width" | "height" | "xmlns" | "viewBox" => None,
        // Event handlers never reach markup.
        k if k.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on")) => None,
        k if k.is_empty() || !k.chars().all(|c| c.is_ascii_alphanumeric() || "-_:.".contains(c)) => {
            None
        }
        k => Some(k),
    }
}

fn render_path(out: &mut String, path: &LinePath) {
    out.push_str("<path");
    push_attr(out, "d", &path.d);
    push_attr(out, "fill", &path.fill);
    push_attr(out, "stroke", &path.stroke);
    push_attr(out, "stroke-width", &fmt_js(path.stroke_width));
    push_attr(out, "stroke-linejoin", &path.stroke_linejoin);
    push_attr(out, "stroke-linecap", &path.stroke_linecap);
    let css = path.style.to_css();
    if !css.is_empty() {
        push_attr(out, "style", &css);
    }
    out.push_str("/>");
}

/// Serializes a line-chart scene as a standalone SVG document.
pub fn render_line_chart_svg(scene: &LineChartScene, options: &SvgRenderOptions) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    if let Some(id) = options.diagram_id.as_deref() {
        push_attr(&mut out, "id", id);
    }
    if let Some(w) = scene.width {
        push_attr(&mut out, "width", &fmt_js(w));
    }
    if let Some(h) = scene.height {
        push_attr(&mut out, "height", &fmt_js(h));
    }
    if options.view_box {
        if let (Some(w), Some(h)) = (scene.width, scene.height) {
            let _ = write!(&mut out, r#" viewBox="0 0 {} {}""#, fmt_js(w), fmt_js(h));
        }
    }
    for (k, v) in &scene.attrs {
        if let Some(name) = container_attr_name(k) {
            push_attr(&mut out, name, v);
        }
    }
    out.push('>');
    for path in &scene.paths {
        render_path(&mut out, path);
    }
    out.push_str("</svg>");
    out
}
