//! Raw fixture records as handed over by the external schedule source. Team
//! names and league labels are free text of uneven quality; resolution is
//! the model's problem, not the reader's.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One fixture row. `kickoff` carries the source's kickoff-time text
/// verbatim when present; it plays no part in the model.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub league: String,
    pub home: String,
    pub away: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kickoff: Option<String>,
}
impl std::fmt::Display for Fixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {} ({})", self.home, self.away, self.league)
    }
}

/// Loads a JSON array of fixture records from a file.
pub fn read_fixtures(path: impl AsRef<Path>) -> anyhow::Result<Vec<Fixture>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read fixtures from {}", path.display()))?;
    let fixtures = serde_json::from_str::<Vec<Fixture>>(&raw)
        .with_context(|| format!("malformed fixture list in {}", path.display()))?;
    Ok(fixtures)
}
