#![forbid(unsafe_code)]

use super::{ChartletContext, HeadlessError, LineChartProps, SvgRenderOptions, layout_line_chart};
use chartlet_render::svg::render_line_chart_svg;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error("raster output needs a resolved width and height")]
    Unsized,
    #[error("unsupported background color `{color}` (expected `transparent`, `white`, `black` or #hex)")]
    Background { color: String },
    #[error("JPG rendering requires an opaque background color (e.g. white)")]
    JpegOpaqueBackgroundRequired,
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("failed to encode JPG")]
    JpegEncode,
}

impl From<chartlet_render::Error> for RasterError {
    fn from(value: chartlet_render::Error) -> Self {
        Self::Headless(HeadlessError::from(value))
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    /// Painted behind the chart. PNG defaults to transparent, JPG to white.
    pub background: Option<String>,
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            jpeg_quality: 90,
        }
    }
}

/// Colour painted under the chart's paths.
///
/// Accepts the same hex notation as the chart palette (`#rgb`, `#rgba`, `#rrggbb`,
/// `#rrggbbaa`) plus `transparent`, `white` and `black`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBackground {
    rgba: [u8; 4],
}

impl ChartBackground {
    pub const TRANSPARENT: Self = Self { rgba: [0, 0, 0, 0] };
    pub const WHITE: Self = Self {
        rgba: [255, 255, 255, 255],
    };

    pub fn parse(text: &str) -> Result<Self> {
        let unsupported = || RasterError::Background {
            color: text.to_string(),
        };
        let s = text.trim().to_ascii_lowercase();
        let rgba = match s.as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "white" => return Ok(Self::WHITE),
            "black" => [0, 0, 0, 255],
            _ => {
                let digits = s
                    .strip_prefix('#')
                    .and_then(|hex| hex.chars().map(|c| c.to_digit(16)).collect::<Option<Vec<_>>>())
                    .ok_or_else(unsupported)?;
                let channels: Vec<u8> = match digits.len() {
                    3 | 4 => digits.iter().map(|&d| (d * 17) as u8).collect(),
                    6 | 8 => digits.chunks(2).map(|p| (p[0] * 16 + p[1]) as u8).collect(),
                    _ => return Err(unsupported()),
                };
                [
                    channels[0],
                    channels[1],
                    channels[2],
                    channels.get(3).copied().unwrap_or(255),
                ]
            }
        };
        Ok(Self { rgba })
    }

    pub fn is_opaque(&self) -> bool {
        self.rgba[3] == 255
    }

    fn to_color(self) -> tiny_skia::Color {
        let [r, g, b, a] = self.rgba;
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

impl RasterOptions {
    fn background_or(&self, fallback: ChartBackground) -> Result<ChartBackground> {
        self.background
            .as_deref()
            .map_or(Ok(fallback), ChartBackground::parse)
    }
}

/// Lays the chart out, refusing unsized scenes, and paints it over `background`.
fn rasterize_chart(
    props: &LineChartProps,
    context: &ChartletContext,
    scale: f32,
    background: ChartBackground,
) -> Result<tiny_skia::Pixmap> {
    let scene = layout_line_chart(props, context)?;
    let (Some(width), Some(height)) = (scene.width, scene.height) else {
        return Err(RasterError::Unsized);
    };
    let svg = render_line_chart_svg(
        &scene,
        &SvgRenderOptions {
            diagram_id: None,
            view_box: true,
        },
    );

    // Line charts carry no text, so no font database is loaded.
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|_| RasterError::SvgParse)?;

    let width_px = (width as f32 * scale).ceil().max(1.0) as u32;
    let height_px = (height as f32 * scale).ceil().max(1.0) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(
        RasterError::PixmapAlloc {
            width: width_px,
            height: height_px,
        },
    )?;
    if background != ChartBackground::TRANSPARENT {
        pixmap.fill(background.to_color());
    }
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    tracing::debug!(width_px, height_px, scale, "rasterized line chart");
    Ok(pixmap)
}

pub fn render_png_sync(
    props: &LineChartProps,
    context: &ChartletContext,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let background = raster.background_or(ChartBackground::TRANSPARENT)?;
    let pixmap = rasterize_chart(props, context, raster.scale, background)?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

pub fn render_jpeg_sync(
    props: &LineChartProps,
    context: &ChartletContext,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let background = raster.background_or(ChartBackground::WHITE)?;
    if !background.is_opaque() {
        return Err(RasterError::JpegOpaqueBackgroundRequired);
    }
    let pixmap = rasterize_chart(props, context, raster.scale, background)?;

    // Opaque background: every pixel has alpha 255, so premultiplied RGB is plain RGB.
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut out = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, raster.jpeg_quality)
        .encode(&rgb, pixmap.width(), pixmap.height(), image::ExtendedColorType::Rgb8)
        .map_err(|_| RasterError::JpegEncode)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> LineChartProps {
        LineChartProps::from_json_str(
            r#"{ "series": [[[0, 0], [1, 5], [2, 2]]], "width": 40, "height": 20 }"#,
        )
        .unwrap()
    }

    #[test]
    fn line_chart_png_has_signature_and_size() {
        let bytes = render_png_sync(&props(), &ChartletContext::default(), &RasterOptions::default())
            .unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
        // IHDR width/height, big-endian.
        assert_eq!(&bytes[16..20], &40u32.to_be_bytes());
        assert_eq!(&bytes[20..24], &20u32.to_be_bytes());
    }

    #[test]
    fn scale_multiplies_pixel_size() {
        let raster = RasterOptions {
            scale: 2.0,
            ..Default::default()
        };
        let bytes = render_png_sync(&props(), &ChartletContext::default(), &raster).unwrap();
        assert_eq!(&bytes[16..20], &80u32.to_be_bytes());
    }

    #[test]
    fn unsized_chart_cannot_be_rasterized() {
        let props = LineChartProps::from_json_str(r#"{ "series": [] }"#).unwrap();
        let err = render_png_sync(&props, &ChartletContext::default(), &RasterOptions::default())
            .unwrap_err();
        assert!(matches!(err, RasterError::Unsized));
    }

    #[test]
    fn jpeg_requires_opaque_background() {
        let raster = RasterOptions {
            background: Some("transparent".to_string()),
            ..Default::default()
        };
        let err = render_jpeg_sync(&props(), &ChartletContext::default(), &raster).unwrap_err();
        assert!(matches!(err, RasterError::JpegOpaqueBackgroundRequired));

        let bytes =
            render_jpeg_sync(&props(), &ChartletContext::default(), &RasterOptions::default())
                .unwrap();
        assert!(bytes.starts_with(&[0xFF, 0xD8]));
    }

    #[test]
    fn background_accepts_palette_hex_notation() {
        assert_eq!(ChartBackground::parse("#fff").unwrap(), ChartBackground::WHITE);
        assert_eq!(ChartBackground::parse(" White ").unwrap(), ChartBackground::WHITE);
        assert_eq!(
            ChartBackground::parse("#4E79A7").unwrap(),
            ChartBackground {
                rgba: [0x4e, 0x79, 0xa7, 255]
            }
        );
        assert!(!ChartBackground::parse("#00000080").unwrap().is_opaque());
        assert!(!ChartBackground::parse("#0008").unwrap().is_opaque());
        for bad in ["teal", "#12", "#ggg", "fff"] {
            assert!(matches!(
                ChartBackground::parse(bad),
                Err(RasterError::Background { .. })
            ));
        }
    }

    #[test]
    fn opaque_background_fills_png_corners() {
        let raster = RasterOptions {
            background: Some("#102030".to_string()),
            ..Default::default()
        };
        let bytes = render_png_sync(&props(), &ChartletContext::default(), &raster).unwrap();
        let pixmap = tiny_skia::Pixmap::decode_png(&bytes).unwrap();
        let px = pixmap.pixel(0, 0).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (0x10, 0x20, 0x30, 255));
    }

    #[test]
    fn png_rejects_unknown_background() {
        let raster = RasterOptions {
            background: Some("rebeccapurple".to_string()),
            ..Default::default()
        };
        let err = render_png_sync(&props(), &ChartletContext::default(), &raster).unwrap_err();
        assert!(matches!(err, RasterError::Background { .. }));
    }
}
