use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-interest obsession weights. Keys are normalized interests.
pub type ObsessionWeights = HashMap<String, f64>;

/// Explicit per-request exploration state. Nothing here outlives the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Comma-separated free-text interests.
    #[serde(default)]
    pub custom_text: String,
    /// When false, `selected` is ignored and only `custom_text` counts.
    #[serde(default = "default_true")]
    pub use_defaults: bool,
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub weights: ObsessionWeights,
}

fn default_true() -> bool {
    true
}

impl SessionState {
    /// The pre-selected list fed to the normalizer.
    pub fn preselected(&self) -> &[String] {
        if self.use_defaults {
            &self.selected
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_defaults_defaults_to_true() {
        let session: SessionState =
            serde_json::from_str(r#"{"selected": ["sport"]}"#).unwrap();
        assert!(session.use_defaults);
        assert_eq!(session.preselected(), ["sport".to_string()]);
        assert!(session.custom_text.is_empty());
    }

    #[test]
    fn test_disabled_defaults_hide_selection() {
        let session: SessionState =
            serde_json::from_str(r#"{"selected": ["sport"], "use_defaults": false}"#).unwrap();
        assert!(session.preselected().is_empty());
    }
}
