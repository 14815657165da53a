//! Market probability derivation: sharpened 1X2 from the score grid, total
//! goals from the summed-rate Poisson, and both-teams-to-score by
//! inclusion-exclusion.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter};

use crate::poisson;
use crate::probs::SliceExt;
use crate::rates::GoalRates;
use crate::scoregrid::{Outcome, ScoreGrid, Side};

/// Goals line for the totals market: over/under 2.5.
pub const TOTAL_GOALS_LINE: u8 = 3;

/// Calibration exponent applied to the 1X2 buckets unless overridden through
/// the engine config. The raw grid is too flat relative to actual outcomes.
pub const DEFAULT_SHARPEN_TAU: f64 = 1.25;

#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    EnumCount,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Market {
    #[serde(rename = "1X2")]
    HeadToHead,
    #[serde(rename = "Over/Under 2.5")]
    TotalGoals,
    #[serde(rename = "BTTS")]
    BothTeamsToScore,
}
impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Market::HeadToHead => write!(f, "1X2"),
            Market::TotalGoals => write!(f, "Over/Under 2.5"),
            Market::BothTeamsToScore => write!(f, "BTTS"),
        }
    }
}

/// The full probability picture for one fixture. All values lie in [0, 1];
/// the 1X2 triple sums to 1 and each two-way pair sums to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketProbs {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
    pub over: f64,
    pub under: f64,
    pub btts_yes: f64,
    pub btts_no: f64,
}

/// Derives all market probabilities from a pair of goal rates. The 1X2
/// buckets are renormalised to absorb the truncated tail, then sharpened;
/// the two-way markets are left unsharpened.
pub fn compute(rates: &GoalRates, sharpen_tau: f64) -> MarketProbs {
    let scoregrid = ScoreGrid::from_rates(rates);
    let mut h2h = [
        Outcome::Win(Side::Home).gather(&scoregrid),
        Outcome::Draw.gather(&scoregrid),
        Outcome::Win(Side::Away).gather(&scoregrid),
    ];
    h2h.normalise(1.0);
    h2h.sharpen(sharpen_tau);

    let under = poisson::cdf(TOTAL_GOALS_LINE - 1, rates.total());
    let btts_no = f64::exp(-rates.home) + f64::exp(-rates.away) - f64::exp(-rates.total());

    MarketProbs {
        home_win: h2h[0],
        draw: h2h[1],
        away_win: h2h[2],
        over: 1.0 - under,
        under,
        btts_yes: 1.0 - btts_no,
        btts_no,
    }
}
