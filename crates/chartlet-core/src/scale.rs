use crate::series::{AxisValue, DomainKind};
use indexmap::IndexSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisOptions {
    /// Spread distinct values evenly instead of scaling by magnitude.
    pub distribute: bool,
    /// Map larger values to smaller pixel coordinates.
    pub reverse: bool,
}

impl AxisOptions {
    /// x axis options for a chart whose series share `domain`.
    ///
    /// Categorical domains are always distributed.
    pub fn for_domain(domain: DomainKind) -> Self {
        Self {
            distribute: matches!(domain, DomainKind::Categorical),
            reverse: false,
        }
    }

    /// The y axis of a line chart: continuous and flipped so that larger values sit higher.
    pub fn value_axis() -> Self {
        Self {
            distribute: false,
            reverse: true,
        }
    }
}

/// Maps raw values to pixel coordinates within an extent.
///
/// Every series of a chart is positioned through the same pair of alignments, so the bounds
/// (or the categorical domain) are taken from the values of all series together.
#[derive(Debug, Clone, PartialEq)]
pub enum Alignment {
    Continuous {
        /// `None` when the pool has no finite numbers.
        bounds: Option<(f64, f64)>,
        reverse: bool,
    },
    Distributed {
        domain: IndexSet<AxisValue>,
        reverse: bool,
    },
}

impl Alignment {
    pub fn new<'a>(pool: impl IntoIterator<Item = &'a AxisValue>, options: AxisOptions) -> Self {
        if options.distribute {
            let domain = pool.into_iter().cloned().collect::<IndexSet<_>>();
            return Self::Distributed {
                domain,
                reverse: options.reverse,
            };
        }

        let mut bounds: Option<(f64, f64)> = None;
        for v in pool.into_iter().filter_map(AxisValue::as_number) {
            if !v.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        Self::Continuous {
            bounds,
            reverse: options.reverse,
        }
    }

    pub fn reverse(&self) -> bool {
        match self {
            Self::Continuous { reverse, .. } | Self::Distributed { reverse, .. } => *reverse,
        }
    }

    /// Position of `value` along the axis as a fraction in `[0, 1]`, before reversal.
    ///
    /// Degenerate axes (one distinct value, or nothing to scale against) return `0.5`.
    fn fraction(&self, value: &AxisValue) -> f64 {
        match self {
            Self::Continuous { bounds, .. } => {
                let Some(v) = value.as_number() else {
                    return f64::NAN;
                };
                match *bounds {
                    Some((lo, hi)) if lo < hi => (v - lo) / (hi - lo),
                    _ => 0.5,
                }
            }
            Self::Distributed { domain, .. } => {
                let n = domain.len();
                if n <= 1 {
                    return 0.5;
                }
                // Unknown values land on the first slot.
                let idx = domain.get_index_of(value).unwrap_or(0);
                idx as f64 / (n - 1) as f64
            }
        }
    }

    pub fn position(&self, value: &AxisValue, extent: f64) -> f64 {
        let t = self.fraction(value);
        if self.reverse() {
            extent - t * extent
        } else {
            t * extent
        }
    }

    /// Sort key along the axis, independent of extent and direction.
    pub fn rank(&self, value: &AxisValue) -> f64 {
        match self {
            Self::Continuous { .. } => value.as_number().unwrap_or(f64::NAN),
            Self::Distributed { domain, .. } => domain
                .get_index_of(value)
                .map(|i| i as f64)
                .unwrap_or(f64::NAN),
        }
    }
}

/// Builds the x and y alignments of one chart from the flattened values of all its series.
pub fn make_alignment_functions(
    x_values: &[AxisValue],
    y_values: &[f64],
    x_options: AxisOptions,
    y_options: AxisOptions,
) -> (Alignment, Alignment) {
    let y_pool: Vec<AxisValue> = y_values.iter().copied().map(AxisValue::Number).collect();
    let x = Alignment::new(x_values, x_options);
    let y = Alignment::new(&y_pool, y_options);
    tracing::trace!(?x_options, ?y_options, "built alignment functions");
    (x, y)
}
