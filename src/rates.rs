//! Expected-goals estimation: combines two seed ratings, the home-advantage
//! bonus and the league baseline into a pair of clamped Poisson rates.

use crate::league;
use crate::team;

/// Fixed rating-point bonus credited to the home side.
pub const HOME_ADVANTAGE: f64 = 65.0;

/// Rating gap at or above which the big-favourite tilt kicks in, unless
/// overridden through the engine config.
pub const DEFAULT_STRONG_DIFF_TILT: f64 = 220.0;

/// Per-side rate bounds keeping the truncated Poisson grid numerically sane.
pub const MIN_RATE: f64 = 0.15;
pub const MAX_RATE: f64 = 3.2;

const SPLIT_SLOPE: f64 = 0.12;
const SPLIT_SCALE: f64 = 650.0;
const MIN_SPLIT: f64 = 0.36;
const MAX_SPLIT: f64 = 0.64;
const VENUE_SCALE: f64 = 2200.0;
const TILT_HOME: f64 = 1.10;
const TILT_AWAY: f64 = 0.90;

/// Expected goals for each side of a fixture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalRates {
    pub home: f64,
    pub away: f64,
}
impl GoalRates {
    /// Combined rate; total goals in an independent-Poisson model is Poisson
    /// with the summed rate.
    pub fn total(&self) -> f64 {
        self.home + self.away
    }
}

/// Estimates goal rates for a fixture given free-text team names and a league
/// label. Pure function of its inputs and the static tables.
pub fn estimate(home: &str, away: &str, league: &str, strong_diff_tilt: f64) -> GoalRates {
    from_ratings(
        team::strength(home),
        team::strength(away),
        league::baseline(league),
        strong_diff_tilt,
    )
}

/// Rating-level estimator. The split bounds keep either side from being
/// modelled as a near-certain shutout regardless of the rating gap.
pub fn from_ratings(
    home_rating: f64,
    away_rating: f64,
    baseline: f64,
    strong_diff_tilt: f64,
) -> GoalRates {
    let diff = home_rating + HOME_ADVANTAGE - away_rating;
    let split = (0.5 + SPLIT_SLOPE * f64::tanh(diff / SPLIT_SCALE)).clamp(MIN_SPLIT, MAX_SPLIT);
    let mut home = baseline * split * (1.0 + diff / VENUE_SCALE);
    let mut away = baseline * (1.0 - split) * (1.0 - diff / VENUE_SCALE);
    if home_rating - away_rating >= strong_diff_tilt {
        home *= TILT_HOME;
        away *= TILT_AWAY;
    }
    GoalRates {
        home: home.clamp(MIN_RATE, MAX_RATE),
        away: away.clamp(MIN_RATE, MAX_RATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn seeded_derby_favours_the_home_side() {
        // ratings 1880 vs 1820: diff = (1880 + 65) - 1820 = 125
        let rates = estimate(
            "Manchester City",
            "Liverpool",
            "Premier League",
            DEFAULT_STRONG_DIFF_TILT,
        );
        assert!(rates.home > rates.away, "rates: {rates:?}");
        assert!(rates.home >= MIN_RATE && rates.home <= MAX_RATE);
        assert!(rates.away >= MIN_RATE && rates.away <= MAX_RATE);
    }

    #[test]
    fn unknown_teams_split_the_default_baseline() {
        // both sides default to 1500, so diff is the home advantage alone
        let rates = estimate(
            "UnknownTeamX",
            "UnknownTeamY",
            "Obscure Regional Cup",
            DEFAULT_STRONG_DIFF_TILT,
        );
        assert!(rates.home > rates.away, "rates: {rates:?}");
        assert_float_absolute_eq!(2.65 / 2.0, rates.home, 0.1);
        assert_float_absolute_eq!(2.65 / 2.0, rates.away, 0.1);
    }

    #[test]
    fn equal_ratings_still_favour_home() {
        let rates = from_ratings(1700.0, 1700.0, 2.65, DEFAULT_STRONG_DIFF_TILT);
        assert!(rates.home > rates.away, "rates: {rates:?}");
    }

    #[test]
    fn extreme_gaps_stay_clamped() {
        let rates = from_ratings(2500.0, 1500.0, 3.1, DEFAULT_STRONG_DIFF_TILT);
        assert!(rates.home <= MAX_RATE, "rates: {rates:?}");
        assert!(rates.away >= MIN_RATE, "rates: {rates:?}");

        // a wide enough gap pins both sides to the bounds
        let rates = from_ratings(3500.0, 1500.0, 3.1, DEFAULT_STRONG_DIFF_TILT);
        assert_eq!(MAX_RATE, rates.home);
        assert_eq!(MIN_RATE, rates.away);

        let rates = from_ratings(1500.0, 3500.0, 3.1, DEFAULT_STRONG_DIFF_TILT);
        assert_eq!(MIN_RATE, rates.home);
        assert_eq!(MAX_RATE, rates.away);
    }

    #[test]
    fn tilt_applies_only_at_the_threshold() {
        let at = from_ratings(1720.0, 1500.0, 2.65, DEFAULT_STRONG_DIFF_TILT);
        let below = from_ratings(1719.0, 1500.0, 2.65, DEFAULT_STRONG_DIFF_TILT);
        // a one-point rating change cannot explain a 10% rate jump
        assert!(at.home / below.home > 1.05, "at: {at:?}, below: {below:?}");
        assert!(at.away / below.away < 0.95, "at: {at:?}, below: {below:?}");
    }

    #[test]
    fn tilt_threshold_is_configurable() {
        let tilted = from_ratings(1650.0, 1500.0, 2.65, 150.0);
        let untilted = from_ratings(1650.0, 1500.0, 2.65, DEFAULT_STRONG_DIFF_TILT);
        assert!(tilted.home > untilted.home);
    }
}
