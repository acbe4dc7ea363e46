#![forbid(unsafe_code)]

//! Headless line-chart geometry.
//!
//! Series come in as pair lists or keyed records, are split into x/y columns, positioned by a
//! shared pair of axis alignments and serialized as SVG path data. Everything here is a pure
//! function of its inputs.
//!
//! # Features
//!
//! - `generate` (default): random categorical datasets for demos and tests (`chartlet_core::generate`)

pub mod chart;
mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod geom;
pub mod path;
pub mod scale;
pub mod series;

pub use chart::{LineGeometry, compute_line_paths};
pub use error::{Error, Result};
pub use path::{PathData, build_path, fmt_js};
pub use scale::{Alignment, AxisOptions, make_alignment_functions};
pub use series::{
    AxisValue, DomainKind, NormalizedSeries, SeriesInput, normalize_series, normalize_series_list,
};

#[cfg(test)]
mod tests;
