//! Tip selection: ranks the three candidate markets by statistical edge over
//! a no-information baseline and picks a top and an alternate tip.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::market::{Market, MarketProbs};

/// Implied probability of a three-way market under no information.
const UNIFORM_THREE_WAY: f64 = 1.0 / 3.0;

/// Implied probability of a two-way market under no information.
const UNIFORM_TWO_WAY: f64 = 0.5;

/// Edge threshold below which the top tip carries a low-confidence note
/// unless overridden through the engine config.
pub const DEFAULT_EDGE_MIN: f64 = 0.08;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "low-edge-fallback")]
    LowEdgeFallback,
}

/// A single market pick. `label` is drawn from the fixed per-market
/// vocabulary: "1"/"X"/"2", "Over 2.5"/"Under 2.5", "Yes"/"No".
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tip {
    pub market: Market,
    pub label: &'static str,
    pub probability: f64,
    pub edge: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Flag>,
}

/// The best and next-best tips for a fixture. Exactly one of each, always:
/// three candidate markets are evaluated unconditionally.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TipPair {
    pub top: Tip,
    pub second: Tip,
}

/// Picks the top and alternate tips from the market probabilities. A tip's
/// edge is its probability in excess of the uniform baseline for its market.
/// Candidates are ranked by edge descending; an exact edge tie resolves by
/// fixed market priority (1X2, then totals, then BTTS) rather than by sort
/// stability. Below `edge_min` the top tip is flagged, never withheld.
pub fn select(probs: &MarketProbs, edge_min: f64) -> TipPair {
    let mut candidates = [
        best_head_to_head(probs),
        best_total_goals(probs),
        best_both_teams_to_score(probs),
    ];
    candidates.sort_by(|a, b| {
        b.edge
            .partial_cmp(&a.edge)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.market.cmp(&b.market))
    });

    let [mut top, second, _] = candidates;
    if top.edge < edge_min {
        top.note = Some(Flag::LowEdgeFallback);
    }
    TipPair { top, second }
}

/// Highest-probability 1X2 outcome. A probability tie resolves in listed
/// order: home, draw, away.
fn best_head_to_head(probs: &MarketProbs) -> Tip {
    let mut best = ("1", probs.home_win);
    for outcome in [("X", probs.draw), ("2", probs.away_win)] {
        if outcome.1 > best.1 {
            best = outcome;
        }
    }
    let (label, probability) = best;
    tip(Market::HeadToHead, label, probability, UNIFORM_THREE_WAY)
}

fn best_total_goals(probs: &MarketProbs) -> Tip {
    let (label, probability) = if probs.over >= probs.under {
        ("Over 2.5", probs.over)
    } else {
        ("Under 2.5", probs.under)
    };
    tip(Market::TotalGoals, label, probability, UNIFORM_TWO_WAY)
}

fn best_both_teams_to_score(probs: &MarketProbs) -> Tip {
    let (label, probability) = if probs.btts_yes >= probs.btts_no {
        ("Yes", probs.btts_yes)
    } else {
        ("No", probs.btts_no)
    };
    tip(Market::BothTeamsToScore, label, probability, UNIFORM_TWO_WAY)
}

fn tip(market: Market, label: &'static str, probability: f64, baseline: f64) -> Tip {
    Tip {
        market,
        label,
        probability,
        edge: probability - baseline,
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market;
    use crate::rates::GoalRates;
    use assert_float_eq::*;

    fn probs_for(home: f64, away: f64) -> MarketProbs {
        market::compute(&GoalRates { home, away }, market::DEFAULT_SHARPEN_TAU)
    }

    #[test]
    fn always_returns_two_distinct_markets() {
        let tips = select(&probs_for(1.7, 1.0), DEFAULT_EDGE_MIN);
        assert_ne!(tips.top.market, tips.second.market);
        assert!(tips.top.edge >= tips.second.edge);
    }

    #[test]
    fn balanced_match_is_flagged_low_edge() {
        let tips = select(&probs_for(1.325, 1.325), DEFAULT_EDGE_MIN);
        assert!(tips.top.edge < DEFAULT_EDGE_MIN, "tips: {tips:?}");
        assert_eq!(Some(Flag::LowEdgeFallback), tips.top.note);
        assert_eq!(None, tips.second.note);
    }

    #[test]
    fn lopsided_match_is_not_flagged() {
        let tips = select(&probs_for(3.2, 0.15), DEFAULT_EDGE_MIN);
        assert!(tips.top.edge >= DEFAULT_EDGE_MIN, "tips: {tips:?}");
        assert_eq!(None, tips.top.note);
    }

    #[test]
    fn edge_is_excess_over_uniform() {
        let probs = probs_for(2.0, 0.9);
        let tips = select(&probs, DEFAULT_EDGE_MIN);
        for tip in [&tips.top, &tips.second] {
            let baseline = match tip.market {
                Market::HeadToHead => UNIFORM_THREE_WAY,
                _ => UNIFORM_TWO_WAY,
            };
            assert_float_absolute_eq!(tip.probability - baseline, tip.edge, 1e-12);
        }
    }

    #[test]
    fn exact_ties_resolve_by_market_priority() {
        // hand-built so totals and BTTS share an edge and beat 1X2
        let probs = MarketProbs {
            home_win: 0.34,
            draw: 0.33,
            away_win: 0.33,
            over: 0.58,
            under: 0.42,
            btts_yes: 0.58,
            btts_no: 0.42,
        };
        let tips = select(&probs, DEFAULT_EDGE_MIN);
        assert_eq!(Market::TotalGoals, tips.top.market);
        assert_eq!(Market::BothTeamsToScore, tips.second.market);
    }

    #[test]
    fn labels_come_from_the_fixed_vocabulary() {
        for (home, away) in [(3.2, 0.15), (0.15, 3.2), (1.3, 1.3), (0.3, 0.3)] {
            let tips = select(&probs_for(home, away), DEFAULT_EDGE_MIN);
            for tip in [&tips.top, &tips.second] {
                let valid = match tip.market {
                    Market::HeadToHead => ["1", "X", "2"].contains(&tip.label),
                    Market::TotalGoals => ["Over 2.5", "Under 2.5"].contains(&tip.label),
                    Market::BothTeamsToScore => ["Yes", "No"].contains(&tip.label),
                };
                assert!(valid, "tip: {tip:?}");
            }
        }
    }
}
