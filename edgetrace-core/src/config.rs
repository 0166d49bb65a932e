use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::replay::Pacing;
use crate::types::EdgePreset;

/// Edge detection settings for the upstream filter chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub preset: EdgePreset,
    /// Overrides the preset's low threshold when set
    pub low_threshold: Option<f32>,
    /// Overrides the preset's high threshold when set
    pub high_threshold: Option<f32>,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            preset: EdgePreset::default(),
            low_threshold: None,
            high_threshold: None,
        }
    }
}

impl EdgeConfig {
    /// Effective (low, high) thresholds
    pub fn thresholds(&self) -> (f32, f32) {
        let (low, high) = self.preset.thresholds();
        (
            self.low_threshold.unwrap_or(low),
            self.high_threshold.unwrap_or(high),
        )
    }
}

/// Everything the tracing pipeline can be tuned with
/// Loaded from a JSON file; absent fields take their defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub edges: EdgeConfig,
    /// Thin the edge image to a 1-pixel skeleton before tracing
    pub thin: bool,
    /// Draw jumps as dashed connectors in SVG output
    pub show_jumps: bool,
    pub pacing: Pacing,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            edges: EdgeConfig::default(),
            thin: true,
            show_jumps: false,
            pacing: Pacing::default(),
        }
    }
}

impl TraceConfig {
    pub fn validate(&self) -> Result<(), TraceError> {
        let (low, high) = self.edges.thresholds();
        if !(low.is_finite() && high.is_finite()) || low < 0.0 || low > high {
            return Err(TraceError::InvalidConfig(format!(
                "edge thresholds must satisfy 0 <= low <= high, got {} / {}",
                low, high
            )));
        }
        if !self.pacing.is_valid() {
            return Err(TraceError::InvalidConfig(
                "pacing delays must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence_over_preset() {
        let edges = EdgeConfig {
            preset: EdgePreset::Strict,
            low_threshold: Some(80.0),
            ..EdgeConfig::default()
        };
        assert_eq!(edges.thresholds(), (80.0, 200.0));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: TraceConfig =
            serde_json::from_str(r#"{ "edges": { "preset": "sensitive" }, "pacing": { "step_ms": 2.5 } }"#)
                .unwrap();
        assert_eq!(config.edges.thresholds(), (30.0, 100.0));
        assert!(config.thin);
        assert_eq!(config.pacing.step_ms, 2.5);
        assert_eq!(config.pacing.release_ms, 500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let config = TraceConfig {
            edges: EdgeConfig {
                low_threshold: Some(200.0),
                high_threshold: Some(100.0),
                ..EdgeConfig::default()
            },
            ..TraceConfig::default()
        };
        assert!(matches!(config.validate(), Err(TraceError::InvalidConfig(_))));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let mut config = TraceConfig::default();
        config.edges.low_threshold = Some(-5.0);
        assert!(config.validate().is_err());
    }
}
