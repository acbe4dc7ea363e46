use serde::{Deserialize, Serialize};

/// Size defaults inherited from the surrounding layout.
///
/// Explicit chart dimensions always win; these only fill in what the caller left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartletContext {
    #[serde(default)]
    pub auto_width: Option<f64>,
    #[serde(default)]
    pub auto_height: Option<f64>,
}

impl ChartletContext {
    pub fn new(auto_width: f64, auto_height: f64) -> Self {
        Self {
            auto_width: Some(auto_width),
            auto_height: Some(auto_height),
        }
    }

    pub fn resolve_width(&self, explicit: Option<f64>) -> Option<f64> {
        explicit.or(self.auto_width)
    }

    pub fn resolve_height(&self, explicit: Option<f64>) -> Option<f64> {
        explicit.or(self.auto_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_beats_auto_beats_nothing() {
        let ctx = ChartletContext::new(300.0, 150.0);
        assert_eq!(ctx.resolve_width(Some(80.0)), Some(80.0));
        assert_eq!(ctx.resolve_width(None), Some(300.0));
        assert_eq!(ctx.resolve_height(None), Some(150.0));
        assert_eq!(ChartletContext::default().resolve_width(None), None);
    }

    #[test]
    fn reads_camel_case_json() {
        let ctx: ChartletContext =
            serde_json::from_str(r#"{ "autoWidth": 640 }"#).expect("context json");
        assert_eq!(ctx.auto_width, Some(640.0));
        assert_eq!(ctx.auto_height, None);
    }
}
