//! Seven-suppression settings.
//!
//! Two independent rules limit how often a seven is accepted:
//!
//! - the **window** rule caps sevens among the last `window_size` rolls;
//! - the **percentage** rule caps the share of sevens across all rolls.
//!
//! Either rule can veto a seven. Settings are validated before a session
//! uses them; out-of-range values are rejected rather than clamped.

use serde::{Deserialize, Serialize};

use crate::error::{SevensError, SevensResult};

/// Configuration for the seven-suppression policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuppressionConfig {
    /// Whether the sliding-window rule is active.
    pub window_enabled: bool,
    /// How many recent rolls the window covers (at least 1).
    pub window_size: usize,
    /// Sevens allowed inside the window before further sevens are vetoed.
    pub window_max_sevens: usize,
    /// Whether the lifetime percentage rule is active.
    pub percentage_enabled: bool,
    /// Highest share of sevens, in percent (0-100), that may be reached.
    pub max_percentage: f64,
}

impl Default for SuppressionConfig {
    fn default() -> Self {
        Self {
            window_enabled: true,
            window_size: 3,
            window_max_sevens: 2,
            percentage_enabled: true,
            max_percentage: 16.67,
        }
    }
}

impl SuppressionConfig {
    /// A configuration with both rules switched off: a fair roller.
    pub fn unrestricted() -> Self {
        Self {
            window_enabled: false,
            percentage_enabled: false,
            ..Self::default()
        }
    }

    /// Enable the window rule with the given size and seven cap.
    pub fn with_window(mut self, size: usize, max_sevens: usize) -> Self {
        self.window_enabled = true;
        self.window_size = size;
        self.window_max_sevens = max_sevens;
        self
    }

    /// Disable the window rule.
    pub fn without_window(mut self) -> Self {
        self.window_enabled = false;
        self
    }

    /// Enable the percentage rule with the given ceiling.
    pub fn with_max_percentage(mut self, max_percentage: f64) -> Self {
        self.percentage_enabled = true;
        self.max_percentage = max_percentage;
        self
    }

    /// Disable the percentage rule.
    pub fn without_percentage(mut self) -> Self {
        self.percentage_enabled = false;
        self
    }

    /// Whether neither rule can ever veto a seven.
    pub fn is_unrestricted(&self) -> bool {
        !self.window_enabled && !self.percentage_enabled
    }

    /// Check that every setting is in range.
    ///
    /// Disabled rules are validated too, so toggling a rule back on can
    /// never activate a bad value.
    pub fn validate(&self) -> SevensResult<()> {
        if self.window_size == 0 {
            return Err(SevensError::InvalidConfig(
                "window size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.max_percentage) {
            return Err(SevensError::InvalidConfig(format!(
                "max percentage must be between 0 and 100, got {}",
                self.max_percentage
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing keys take
    /// their default values.
    pub fn from_json(json: &str) -> SevensResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SevensError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> SevensResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SevensError::InvalidConfig(e.to_string()))
    }
}

impl std::fmt::Display for SuppressionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.window_enabled {
            write!(
                f,
                "window: at most {} seven(s) in the last {} roll(s)",
                self.window_max_sevens, self.window_size
            )?;
        } else {
            write!(f, "window: off")?;
        }
        if self.percentage_enabled {
            write!(f, "; percentage: at most {}%", self.max_percentage)
        } else {
            write!(f, "; percentage: off")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SuppressionConfig::default();
        assert!(cfg.window_enabled);
        assert_eq!(cfg.window_size, 3);
        assert_eq!(cfg.window_max_sevens, 2);
        assert!(cfg.percentage_enabled);
        assert!((cfg.max_percentage - 16.67).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = SuppressionConfig::unrestricted()
            .with_window(5, 1)
            .with_max_percentage(10.0);
        assert!(cfg.window_enabled);
        assert_eq!(cfg.window_size, 5);
        assert_eq!(cfg.window_max_sevens, 1);
        assert!(cfg.percentage_enabled);
        assert!(!cfg.is_unrestricted());

        let cfg = cfg.without_window().without_percentage();
        assert!(cfg.is_unrestricted());
    }

    #[test]
    fn rejects_zero_window() {
        let cfg = SuppressionConfig::default().with_window(0, 2);
        assert!(matches!(cfg.validate(), Err(SevensError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_window_even_when_disabled() {
        let cfg = SuppressionConfig::default().with_window(0, 2).without_window();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_percentage() {
        for bad in [-0.1, 100.01, f64::NAN, f64::INFINITY] {
            let cfg = SuppressionConfig::default().with_max_percentage(bad);
            assert!(cfg.validate().is_err(), "{bad} should be rejected");
        }
        for ok in [0.0, 100.0, 50.5] {
            let cfg = SuppressionConfig::default().with_max_percentage(ok);
            assert!(cfg.validate().is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn json_round_trip() {
        let cfg = SuppressionConfig::default().with_window(4, 1);
        let json = cfg.to_json().unwrap();
        assert!(json.contains("windowSize"));
        let back = SuppressionConfig::from_json(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn json_missing_keys_use_defaults() {
        let cfg = SuppressionConfig::from_json(r#"{"percentageEnabled": false}"#).unwrap();
        assert!(!cfg.percentage_enabled);
        assert_eq!(cfg.window_size, 3);
    }

    #[test]
    fn json_invalid_values_rejected() {
        assert!(SuppressionConfig::from_json(r#"{"maxPercentage": 150}"#).is_err());
        assert!(SuppressionConfig::from_json("not json").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(
            SuppressionConfig::default().to_string(),
            "window: at most 2 seven(s) in the last 3 roll(s); percentage: at most 16.67%"
        );
        assert_eq!(
            SuppressionConfig::unrestricted().to_string(),
            "window: off; percentage: off"
        );
    }
}
