//! The discrete score distribution of a fixture: joint probabilities of
//! every scoreline up to [`GOAL_CAP`] goals per side, filled from a pair of
//! independent Poisson rates.

use crate::poisson;
use crate::rates::GoalRates;

/// Truncation cap on goals per side. The omitted tail mass is negligible for
/// rates within the clamp bounds.
pub const GOAL_CAP: u8 = 12;

const DIM: usize = GOAL_CAP as usize + 1;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
    GoalsUnder(u8),
    GoalsOver(u8),
}
impl Outcome {
    pub fn gather(&self, scoregrid: &ScoreGrid) -> f64 {
        match self {
            Outcome::Win(side) => Self::gather_win(side, scoregrid),
            Outcome::Draw => Self::gather_draw(scoregrid),
            Outcome::GoalsUnder(goals) => Self::gather_goals_under(*goals, scoregrid),
            Outcome::GoalsOver(goals) => Self::gather_goals_over(*goals, scoregrid),
        }
    }

    fn gather_win(side: &Side, scoregrid: &ScoreGrid) -> f64 {
        let mut prob = 0.0;
        match side {
            Side::Home => {
                for home_goals in 1..DIM {
                    for away_goals in 0..home_goals {
                        prob += scoregrid.cells[home_goals][away_goals];
                    }
                }
            }
            Side::Away => {
                for away_goals in 1..DIM {
                    for home_goals in 0..away_goals {
                        prob += scoregrid.cells[home_goals][away_goals];
                    }
                }
            }
        }
        prob
    }

    fn gather_draw(scoregrid: &ScoreGrid) -> f64 {
        let mut prob = 0.0;
        for index in 0..DIM {
            prob += scoregrid.cells[index][index];
        }
        prob
    }

    fn gather_goals_over(goals: u8, scoregrid: &ScoreGrid) -> f64 {
        let goals = goals as usize;
        let mut prob = 0.0;
        for home_goals in 0..DIM {
            for away_goals in 0..DIM {
                if home_goals + away_goals > goals {
                    prob += scoregrid.cells[home_goals][away_goals];
                }
            }
        }
        prob
    }

    fn gather_goals_under(goals: u8, scoregrid: &ScoreGrid) -> f64 {
        let goals = goals as usize;
        let mut prob = 0.0;
        for home_goals in 0..DIM {
            for away_goals in 0..DIM {
                if home_goals + away_goals < goals {
                    prob += scoregrid.cells[home_goals][away_goals];
                }
            }
        }
        prob
    }
}

pub struct ScoreGrid {
    cells: [[f64; DIM]; DIM],
}
impl ScoreGrid {
    /// Fills the grid from independent per-side Poisson rates.
    pub fn from_rates(rates: &GoalRates) -> Self {
        let mut cells = [[0.0; DIM]; DIM];
        for (home_goals, row) in cells.iter_mut().enumerate() {
            let home_prob = poisson::pmf(home_goals as u8, rates.home);
            for (away_goals, cell) in row.iter_mut().enumerate() {
                *cell = home_prob * poisson::pmf(away_goals as u8, rates.away);
            }
        }
        Self { cells }
    }

    pub fn probability(&self, score: &Score) -> f64 {
        self.cells[score.home as usize][score.away as usize]
    }

    /// Total mass captured by the grid; short of 1 by the truncated tail.
    pub fn sum(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }
}
