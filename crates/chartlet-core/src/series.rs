use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One line's worth of raw data.
///
/// JSON input is untagged: an array of `[x, y]` pairs becomes [`SeriesInput::Pairs`], an object
/// becomes [`SeriesInput::Record`] with its keys kept in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesInput {
    Pairs(Vec<[f64; 2]>),
    Record(IndexMap<String, f64>),
}

impl From<Vec<[f64; 2]>> for SeriesInput {
    fn from(value: Vec<[f64; 2]>) -> Self {
        Self::Pairs(value)
    }
}

impl From<IndexMap<String, f64>> for SeriesInput {
    fn from(value: IndexMap<String, f64>) -> Self {
        Self::Record(value)
    }
}

impl SeriesInput {
    pub fn len(&self) -> usize {
        match self {
            Self::Pairs(pairs) => pairs.len(),
            Self::Record(record) => record.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn domain(&self) -> DomainKind {
        match self {
            Self::Pairs(_) => DomainKind::Continuous,
            Self::Record(_) => DomainKind::Categorical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainKind {
    Continuous,
    Categorical,
}

impl DomainKind {
    /// Folds the x domains of several series into the one shared x axis.
    ///
    /// An empty set of series is continuous.
    pub fn combine(kinds: impl IntoIterator<Item = DomainKind>) -> Result<DomainKind> {
        let mut out: Option<DomainKind> = None;
        for kind in kinds {
            match out {
                None => out = Some(kind),
                Some(prev) if prev == kind => {}
                Some(_) => {
                    return Err(Error::invalid_input(
                        "cannot mix keyed-record series with pair-list series on one x axis",
                    ));
                }
            }
        }
        Ok(out.unwrap_or(DomainKind::Continuous))
    }
}

/// A value on an axis: either a number or a category label.
///
/// Equality and hashing use the bit pattern of numbers (with `-0.0` folded into `0.0`) so that
/// values can be collected into an ordered categorical domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Category(String),
}

impl AxisValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Category(_) => None,
        }
    }

    fn number_bits(v: f64) -> u64 {
        if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
    }
}

impl PartialEq for AxisValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Self::number_bits(*a) == Self::number_bits(*b),
            (Self::Category(a), Self::Category(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AxisValue {}

impl Hash for AxisValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(v) => {
                0u8.hash(state);
                Self::number_bits(*v).hash(state);
            }
            Self::Category(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AxisValue {
    fn from(value: &str) -> Self {
        Self::Category(value.to_string())
    }
}

/// Column-wise view of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    pub domain: DomainKind,
    pub x_values: Vec<AxisValue>,
    pub y_values: Vec<f64>,
}

impl NormalizedSeries {
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }
}

pub fn normalize_series(input: &SeriesInput) -> NormalizedSeries {
    match input {
        SeriesInput::Pairs(pairs) => {
            let (x_values, y_values) = pairs
                .iter()
                .map(|[x, y]| (AxisValue::Number(*x), *y))
                .unzip();
            NormalizedSeries {
                domain: DomainKind::Continuous,
                x_values,
                y_values,
            }
        }
        SeriesInput::Record(record) => {
            let (x_values, y_values) = record
                .iter()
                .map(|(k, v)| (AxisValue::Category(k.clone()), *v))
                .unzip();
            NormalizedSeries {
                domain: DomainKind::Categorical,
                x_values,
                y_values,
            }
        }
    }
}

pub fn normalize_series_list(series: Option<&[SeriesInput]>) -> Result<Vec<NormalizedSeries>> {
    let Some(series) = series else {
        return Err(Error::invalid_input("expected series"));
    };
    Ok(series.iter().map(normalize_series).collect())
}
