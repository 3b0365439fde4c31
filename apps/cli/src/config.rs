// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.
//!
//! Command-line flags take precedence over these values.

use mep_lite_risers::{RiserOptions, DEFAULT_TAG_FAMILY};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum deviation from plumb (degrees) for a riser.
    pub vertical_tolerance_deg: f64,
    /// Node limit for network discovery (`None` = unbounded).
    pub max_nodes: Option<usize>,
    /// Annotation family of the riser tags.
    pub tag_family: String,
    /// Emit JSON log lines instead of human-readable output.
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            vertical_tolerance_deg: lookup("MEP_LITE_VERTICAL_TOLERANCE_DEG")
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.vertical_tolerance_deg),
            max_nodes: lookup("MEP_LITE_MAX_NODES")
                .and_then(|v| v.parse().ok())
                .or(defaults.max_nodes),
            tag_family: lookup("MEP_LITE_TAG_FAMILY")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.tag_family),
            log_json: lookup("MEP_LITE_LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_json),
        }
    }
}

/// Built-in values used when a variable is unset or invalid.
impl Default for Config {
    fn default() -> Self {
        Self {
            vertical_tolerance_deg: RiserOptions::default().vertical_tolerance_deg,
            max_nodes: None,
            tag_family: DEFAULT_TAG_FAMILY.to_string(),
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn unset_environment_yields_defaults() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.vertical_tolerance_deg, 1.0);
        assert_eq!(c.max_nodes, None);
        assert_eq!(c.tag_family, DEFAULT_TAG_FAMILY);
        assert!(!c.log_json);
    }

    #[test]
    fn reads_overrides() {
        let c = config(&[
            ("MEP_LITE_VERTICAL_TOLERANCE_DEG", "2.5"),
            ("MEP_LITE_MAX_NODES", "5000"),
            ("MEP_LITE_TAG_FAMILY", " Arrows "),
            ("MEP_LITE_LOG_JSON", "true"),
        ]);
        assert_eq!(c.vertical_tolerance_deg, 2.5);
        assert_eq!(c.max_nodes, Some(5000));
        assert_eq!(c.tag_family, "Arrows");
        assert!(c.log_json);
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[
            ("MEP_LITE_VERTICAL_TOLERANCE_DEG", "-3"),
            ("MEP_LITE_MAX_NODES", "lots"),
            ("MEP_LITE_TAG_FAMILY", "  "),
            ("MEP_LITE_LOG_JSON", "maybe"),
        ]);
        assert_eq!(c.vertical_tolerance_deg, 1.0);
        assert_eq!(c.max_nodes, None);
        assert_eq!(c.tag_family, DEFAULT_TAG_FAMILY);
        assert!(!c.log_json);
    }
}
