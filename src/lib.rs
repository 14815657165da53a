//! A Poisson model of daily football fixtures. Derives 1X2, total-goals and
//! both-teams-to-score probabilities from seed ratings and a league baseline,
//! and ranks the resulting tips by statistical edge.

pub mod cache;
pub mod engine;
pub mod fixture;
pub mod league;
pub mod market;
pub mod poisson;
pub mod print;
pub mod probs;
pub mod rates;
pub mod scoregrid;
pub mod selection;
pub mod team;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
