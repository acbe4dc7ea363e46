#![forbid(unsafe_code)]

//! `chartlet` is a headless line-chart renderer: series data in, SVG path geometry out.
//!
//! # Features
//!
//! - `render` (default): scene layout + SVG serialization (`chartlet::render`)
//! - `raster`: PNG/JPG output via pure-Rust SVG rasterization

pub use chartlet_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use chartlet_render::model::{LineChartScene, LinePath};
    pub use chartlet_render::svg::{SvgRenderOptions, escape_xml, render_line_chart_svg};
    pub use chartlet_render::Error as ChartRenderError;
    pub use chartlet_render::{
        CATEGORICAL, ChartColor, ChartletContext, LineChartProps, StyleOverlay, color_for,
        layout_line_chart,
    };

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Render(#[from] ChartRenderError),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several charts can be
    /// inlined into one document.
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "chart-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 6);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "chart-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "chart" {
            return "chart-untitled".to_string();
        }
        out.to_string()
    }

    pub fn layout_json_sync(props_json: &str, context: &ChartletContext) -> Result<LineChartScene> {
        let props = LineChartProps::from_json_str(props_json)?;
        Ok(layout_line_chart(&props, context)?)
    }

    pub fn render_svg_sync(
        props: &LineChartProps,
        context: &ChartletContext,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        Ok(chartlet_render::render_line_chart(
            props,
            context,
            svg_options,
        )?)
    }

    /// Bundles the ambient context and SVG options for repeated rendering.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub context: ChartletContext,
        pub svg: SvgRenderOptions,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_auto_size(mut self, width: f64, height: f64) -> Self {
            self.context = ChartletContext::new(width, height);
            self
        }

        pub fn layout_sync(&self, props: &LineChartProps) -> Result<LineChartScene> {
            Ok(layout_line_chart(props, &self.context)?)
        }

        pub fn render_svg_sync(&self, props: &LineChartProps) -> Result<String> {
            render_svg_sync(props, &self.context, &self.svg)
        }

        pub fn render_json_svg_sync(&self, props_json: &str) -> Result<String> {
            let props = LineChartProps::from_json_str(props_json)?;
            self.render_svg_sync(&props)
        }

        pub fn render_svg_sync_with_diagram_id(
            &self,
            props: &LineChartProps,
            diagram_id: &str,
        ) -> Result<String> {
            let mut svg = self.svg.clone();
            svg.diagram_id = Some(sanitize_svg_id(diagram_id));
            render_svg_sync(props, &self.context, &svg)
        }

        #[cfg(feature = "raster")]
        pub fn render_png_sync(
            &self,
            props: &LineChartProps,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::render_png_sync(props, &self.context, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg_sync(
            &self,
            props: &LineChartProps,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::render_jpeg_sync(props, &self.context, raster)
        }
    }

}
