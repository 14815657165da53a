//! Team strength resolution. Free-text names are normalised, folded onto a
//! canonical key through an alias table, and looked up in a hand-curated
//! seed-rating table on an Elo-like scale. Both tables are immutable
//! process-wide state, safe for unsynchronised concurrent reads.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Rating assigned to any team absent from the seed table.
pub const DEFAULT_RATING: f64 = 1500.0;

/// Normalised verbose forms mapped onto their canonical seed key.
static ALIASES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    FxHashMap::from_iter([
        ("manchester city fc", "manchester city"),
        ("man city", "manchester city"),
        ("manchester united fc", "manchester united"),
        ("man united", "manchester united"),
        ("man utd", "manchester united"),
        ("liverpool fc", "liverpool"),
        ("arsenal fc", "arsenal"),
        ("chelsea fc", "chelsea"),
        ("tottenham hotspur", "tottenham"),
        ("spurs", "tottenham"),
        ("newcastle united", "newcastle"),
        ("west ham united", "west ham"),
        ("wolverhampton wanderers", "wolves"),
        ("brighton and hove albion", "brighton"),
        ("brighton hove albion", "brighton"),
        ("afc bournemouth", "bournemouth"),
        ("leicester city", "leicester"),
        ("paris saint germain", "psg"),
        ("paris saint germain fc", "psg"),
        ("paris sg", "psg"),
        ("fc bayern munich", "bayern munich"),
        ("bayern munchen", "bayern munich"),
        ("fc bayern munchen", "bayern munich"),
        ("borussia dortmund 09", "borussia dortmund"),
        ("bvb", "borussia dortmund"),
        ("bayer 04 leverkusen", "bayer leverkusen"),
        ("rasenballsport leipzig", "rb leipzig"),
        ("borussia mgladbach", "borussia monchengladbach"),
        ("vfb stuttgart", "stuttgart"),
        ("sc freiburg", "freiburg"),
        ("vfl wolfsburg", "wolfsburg"),
        ("tsg hoffenheim", "hoffenheim"),
        ("1899 hoffenheim", "hoffenheim"),
        ("real madrid cf", "real madrid"),
        ("fc barcelona", "barcelona"),
        ("atletico de madrid", "atletico madrid"),
        ("athletic club", "athletic bilbao"),
        ("real betis balompie", "real betis"),
        ("internazionale", "inter"),
        ("inter milan", "inter"),
        ("fc internazionale milano", "inter"),
        ("milan", "ac milan"),
        ("juventus fc", "juventus"),
        ("ssc napoli", "napoli"),
        ("as roma", "roma"),
        ("ss lazio", "lazio"),
        ("acf fiorentina", "fiorentina"),
        ("olympique de marseille", "marseille"),
        ("olympique marseille", "marseille"),
        ("olympique lyonnais", "lyon"),
        ("as monaco", "monaco"),
        ("losc lille", "lille"),
        ("fc porto", "porto"),
        ("sl benfica", "benfica"),
        ("sporting cp", "sporting"),
        ("sporting lisbon", "sporting"),
        ("afc ajax", "ajax"),
        ("psv eindhoven", "psv"),
        ("celtic fc", "celtic"),
        ("rangers fc", "rangers"),
        ("fc salzburg", "red bull salzburg"),
    ])
});

/// Seed ratings, canonical key → rating. Hand-curated, roughly 1500–1950.
static RATINGS: Lazy<FxHashMap<&'static str, f64>> = Lazy::new(|| {
    FxHashMap::from_iter([
        // England
        ("manchester city", 1880.0),
        ("arsenal", 1850.0),
        ("liverpool", 1820.0),
        ("chelsea", 1710.0),
        ("tottenham", 1700.0),
        ("newcastle", 1690.0),
        ("aston villa", 1670.0),
        ("manchester united", 1650.0),
        ("brighton", 1630.0),
        ("west ham", 1620.0),
        ("crystal palace", 1590.0),
        ("brentford", 1590.0),
        ("fulham", 1580.0),
        ("wolves", 1570.0),
        ("bournemouth", 1570.0),
        ("everton", 1560.0),
        ("nottingham forest", 1560.0),
        ("leicester", 1550.0),
        // Spain
        ("real madrid", 1930.0),
        ("barcelona", 1860.0),
        ("atletico madrid", 1780.0),
        ("athletic bilbao", 1660.0),
        ("villarreal", 1640.0),
        ("girona", 1620.0),
        ("real sociedad", 1620.0),
        ("real betis", 1610.0),
        ("sevilla", 1600.0),
        ("valencia", 1580.0),
        ("osasuna", 1550.0),
        ("getafe", 1540.0),
        ("celta vigo", 1530.0),
        // Germany
        ("bayern munich", 1890.0),
        ("bayer leverkusen", 1760.0),
        ("borussia dortmund", 1750.0),
        ("rb leipzig", 1740.0),
        ("eintracht frankfurt", 1660.0),
        ("stuttgart", 1650.0),
        ("freiburg", 1610.0),
        ("wolfsburg", 1600.0),
        ("borussia monchengladbach", 1580.0),
        ("hoffenheim", 1570.0),
        ("union berlin", 1560.0),
        ("mainz", 1550.0),
        ("werder bremen", 1550.0),
        ("augsburg", 1520.0),
        // Italy
        ("inter", 1840.0),
        ("juventus", 1740.0),
        ("napoli", 1730.0),
        ("ac milan", 1720.0),
        ("atalanta", 1700.0),
        ("roma", 1660.0),
        ("lazio", 1630.0),
        ("bologna", 1630.0),
        ("fiorentina", 1620.0),
        ("torino", 1570.0),
        // France
        ("psg", 1830.0),
        ("monaco", 1660.0),
        ("marseille", 1640.0),
        ("lille", 1620.0),
        ("lyon", 1600.0),
        ("nice", 1590.0),
        ("rennes", 1580.0),
        // elsewhere in Europe
        ("benfica", 1700.0),
        ("sporting", 1690.0),
        ("porto", 1680.0),
        ("braga", 1580.0),
        ("psv", 1670.0),
        ("feyenoord", 1650.0),
        ("ajax", 1640.0),
        ("galatasaray", 1600.0),
        ("fenerbahce", 1580.0),
        ("shakhtar donetsk", 1590.0),
        ("red bull salzburg", 1580.0),
        ("club brugge", 1570.0),
        ("celtic", 1560.0),
        ("besiktas", 1540.0),
        ("dynamo kyiv", 1540.0),
        ("rangers", 1530.0),
    ])
});

/// Lowercases `name`, collapses every run of non-alphanumeric characters into
/// a single space and trims the ends. Pure and total over all strings.
pub fn normalise(name: &str) -> String {
    let mut normalised = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            normalised.push(ch.to_ascii_lowercase());
        } else if !normalised.ends_with(' ') {
            normalised.push(' ');
        }
    }
    normalised.trim().to_string()
}

/// Resolves a free-text team name to its seed rating. Aliased names are
/// folded onto their canonical key first; names that are seed keys in their
/// own right resolve directly; everything else gets [`DEFAULT_RATING`].
pub fn strength(name: &str) -> f64 {
    let key = normalise(name);
    if let Some(canonical) = ALIASES.get(key.as_str()) {
        if let Some(&rating) = RATINGS.get(canonical) {
            return rating;
        }
    }
    RATINGS
        .get(key.as_str())
        .copied()
        .unwrap_or(DEFAULT_RATING)
}
