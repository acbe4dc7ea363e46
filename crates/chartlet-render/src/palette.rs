pub type ChartColor = String;

/// Default categorical palette.
pub const CATEGORICAL: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

pub fn categorical() -> Vec<ChartColor> {
    CATEGORICAL.iter().map(|c| c.to_string()).collect()
}

/// Colour of the series at `index`.
///
/// Indices past the end of the palette wrap around. An empty palette falls back to
/// [`CATEGORICAL`].
pub fn color_for(palette: &[ChartColor], index: usize) -> &str {
    if palette.is_empty() {
        return CATEGORICAL[index % CATEGORICAL.len()];
    }
    &palette[index % palette.len()]
}
