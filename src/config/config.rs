use crate::misc::EngineError;
use crate::ranking::TieBreak;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// File name probed in the working directory when no explicit config path
/// is given.
pub const DEFAULT_CONFIG_FILE: &str = "greenlight.toml";

/// Run configuration. One instance covers a whole computation; the
/// discount rate in particular is shared by every stream-to-PV derivation
/// within a run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Per-period discount rate applied to stream-mode inputs.
    pub discount_rate: f64,

    /// Number of benefit periods (columns B0..B{n-1}) expected in stream mode.
    pub periods: usize,

    /// Allowed deviation of a policy's probability sum from 1.
    pub probability_tolerance: f64,

    /// How policies with equal PV(ETNB) receive ranks.
    pub tie_break: TieBreak,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discount_rate: 0.07,
            periods: 4,
            probability_tolerance: crate::PROB_TOLERANCE,
            tie_break: TieBreak::Competition,
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults.
    ///
    /// An explicit path must exist; the default `greenlight.toml` falls
    /// back to defaults when absent.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).with_context(|| format!("reading configuration file '{}'", path.display()))?;
            (path.to_path_buf(), text)
        } else {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(path) {
                Ok(text) => (path.to_path_buf(), text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => {
                    return Err(e).with_context(|| format!("reading configuration file '{DEFAULT_CONFIG_FILE}'"));
                }
            }
        };

        let config: Self = toml::from_str(&text).with_context(|| format!("parsing configuration file '{}'", final_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(EngineError::InvalidDiscountRate { rate: self.discount_rate });
        }

        if self.periods == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "periods must be at least 1".into(),
            });
        }

        if !self.probability_tolerance.is_finite() || self.probability_tolerance < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("probability tolerance must be >= 0 (got {})", self.probability_tolerance),
            });
        }

        Ok(())
    }
}
