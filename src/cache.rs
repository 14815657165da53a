//! An in-memory tip store covering one refresh cycle. The surrounding
//! scheduler decides when a cycle ends; the cache itself has no notion of
//! freshness and nothing here survives the process.

use rustc_hash::FxHashMap;

use crate::engine::Engine;
use crate::fixture::Fixture;
use crate::selection::TipPair;

#[derive(Debug, Default)]
pub struct TipCache {
    entries: FxHashMap<Fixture, TipPair>,
}
impl TipCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cached tips for `fixture`, computing them on first sight.
    pub fn tips_for(&mut self, fixture: &Fixture, engine: &Engine) -> &TipPair {
        if !self.entries.contains_key(fixture) {
            let tips = engine.predict(&fixture.home, &fixture.away, &fixture.league);
            self.entries.insert(fixture.clone(), tips);
        }
        &self.entries[fixture]
    }

    /// Drops every entry; called at the start of a refresh cycle.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Config;

    fn fixture() -> Fixture {
        Fixture {
            league: "Premier League".to_string(),
            home: "Arsenal".to_string(),
            away: "Chelsea".to_string(),
            kickoff: None,
        }
    }

    #[test]
    fn computes_once_per_fixture() {
        let engine = Engine::try_from(Config::default()).unwrap();
        let mut cache = TipCache::new();
        assert!(cache.is_empty());

        let first = cache.tips_for(&fixture(), &engine).clone();
        let second = cache.tips_for(&fixture(), &engine).clone();
        assert_eq!(first, second);
        assert_eq!(1, cache.len());
    }

    #[test]
    fn distinct_fixtures_get_distinct_entries() {
        let engine = Engine::try_from(Config::default()).unwrap();
        let mut cache = TipCache::new();
        cache.tips_for(&fixture(), &engine);

        let mut reversed = fixture();
        std::mem::swap(&mut reversed.home, &mut reversed.away);
        cache.tips_for(&reversed, &engine);
        assert_eq!(2, cache.len());
    }

    #[test]
    fn invalidate_empties_the_cache() {
        let engine = Engine::try_from(Config::default()).unwrap();
        let mut cache = TipCache::new();
        cache.tips_for(&fixture(), &engine);
        cache.invalidate();
        assert!(cache.is_empty());
    }
}
