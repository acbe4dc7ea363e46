use chartlet_core::fmt_js;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inline CSS properties, in declaration order.
///
/// Keys may be camelCase (`strokeDasharray`) or already kebab-case; values are strings or
/// numbers. `null` and booleans are ignored when rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOverlay(IndexMap<String, Value>);

impl StyleOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `self` overlaid by `over`: keys of `over` win, new keys are appended.
    pub fn merged(&self, over: Option<&StyleOverlay>) -> StyleOverlay {
        let mut out = self.clone();
        if let Some(over) = over {
            for (k, v) in &over.0 {
                out.0.insert(k.clone(), v.clone());
            }
        }
        out
    }

    /// Renders as a `style` attribute value, e.g. `stroke-dasharray: 4 2; opacity: 0.5`.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        for (k, v) in &self.0 {
            let value = match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.as_f64().map(fmt_js).unwrap_or_else(|| n.to_string()),
                _ => continue,
            };
            decls.push(format!("{}: {}", css_property_name(k), value));
        }
        decls.join("; ")
    }
}

fn css_property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    // Vendor prefixes (`WebkitX` -> `-webkit-x`) already gained their leading dash.
    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}
