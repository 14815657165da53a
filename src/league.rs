//! League baseline resolution: maps a free-text competition label to an
//! expected combined goals-per-match figure.

/// Baseline applied when no pattern matches the label.
pub const DEFAULT_BASELINE: f64 = 2.65;

/// Ordered (substring pattern, baseline) pairs; the first containment match
/// wins. High-scoring leagues are checked ahead of the generic patterns.
/// Keep this a slice, not a map: overlapping patterns depend on check order.
const BASELINES: &[(&str, f64)] = &[
    ("bundesliga", 3.1),
    ("eredivisie", 3.05),
    ("champions", 2.95),
    ("premier", 2.9),
    ("serie a", 2.85),
    ("europa", 2.8),
    ("ligue 1", 2.8),
    ("la liga", 2.75),
    ("laliga", 2.75),
    ("primera", 2.75),
    ("primeira", 2.7),
    ("super lig", 2.7),
    ("championship", 2.55),
];

/// Resolves a free-text league label to its goals-per-match baseline. Total
/// over all strings; unknown and empty labels get [`DEFAULT_BASELINE`].
pub fn baseline(label: &str) -> f64 {
    let label = label.to_lowercase();
    BASELINES
        .iter()
        .find(|(pattern, _)| label.contains(pattern))
        .map(|&(_, goals)| goals)
        .unwrap_or(DEFAULT_BASELINE)
}
