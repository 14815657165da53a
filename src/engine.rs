//! The public prediction contract: a validated [`Config`] plus the
//! [`Engine`] that turns two free-text team names and a league label into a
//! ranked [`TipPair`].

use thiserror::Error;

use crate::market;
use crate::rates;
use crate::selection;
use crate::selection::TipPair;

#[derive(Debug, Error)]
pub enum InvalidConfig {
    #[error("sharpen tau must be a positive finite number, got {0}")]
    BadSharpenTau(f64),

    #[error("strong-diff tilt threshold must be finite, got {0}")]
    BadStrongDiffTilt(f64),

    #[error("edge threshold must be finite, got {0}")]
    BadEdgeMin(f64),
}

/// Tuning knobs for the prediction engine. The defaults reproduce the
/// reference behaviour; every knob is a named constant in its home module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Exponent applied when sharpening the 1X2 probabilities.
    pub sharpen_tau: f64,

    /// Rating-point gap at which the big-favourite goal tilt applies.
    pub strong_diff_tilt: f64,

    /// Edge below which the top tip is flagged low-confidence.
    pub edge_min: f64,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            sharpen_tau: market::DEFAULT_SHARPEN_TAU,
            strong_diff_tilt: rates::DEFAULT_STRONG_DIFF_TILT,
            edge_min: selection::DEFAULT_EDGE_MIN,
        }
    }
}
impl Config {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if !self.sharpen_tau.is_finite() || self.sharpen_tau <= 0.0 {
            return Err(InvalidConfig::BadSharpenTau(self.sharpen_tau));
        }
        if !self.strong_diff_tilt.is_finite() {
            return Err(InvalidConfig::BadStrongDiffTilt(self.strong_diff_tilt));
        }
        if !self.edge_min.is_finite() {
            return Err(InvalidConfig::BadEdgeMin(self.edge_min));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Engine {
    config: Config,
}
impl Engine {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Predicts a fixture. Total over all inputs: unknown teams fall back to
    /// the default rating, unknown leagues to the default baseline, and the
    /// result is deterministic for fixed inputs and config.
    pub fn predict(&self, home: &str, away: &str, league: &str) -> TipPair {
        predict(home, away, league, &self.config)
    }
}

impl TryFrom<Config> for Engine {
    type Error = InvalidConfig;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// Single-call form of [`Engine::predict`] for callers carrying their own
/// (already sane) config.
pub fn predict(home: &str, away: &str, league: &str, config: &Config) -> TipPair {
    let rates = rates::estimate(home, away, league, config.strong_diff_tilt);
    let probs = market::compute(&rates, config.sharpen_tau);
    selection::select(&probs, config.edge_min)
}
