//! # Duplicate Song Detection
//!
//! Warns catalog contributors that a song they are about to create probably
//! exists already. Advisory only: callers show the matches, never block on
//! them.
//!
//! ## Scoring
//! Titles are compared after normalization (case, punctuation, spacing) using
//! normalized Levenshtein similarity from `strsim`. The score is a distance in
//! `[0, 1]`: `0.0` is an identical title, lower is better.
//!
//! Each corpus entry is scored twice and keeps the better result:
//! 1. normalized query vs normalized title
//! 2. the same with leading filler words removed ("Oh", "O", "The", "A", "An"),
//!    so "O Come All Ye Faithful" finds "Oh Come All Ye Faithful"
//!
//! Matches at or above the threshold are dropped, each song id appears once,
//! and the best few are returned in ascending score order.
//!
//! ## Example
//! ```rust
//! use chordchart::{find_duplicates, SongSummary};
//!
//! let corpus = vec![SongSummary {
//!     id: "1".to_string(),
//!     title: "Amazing Grace".to_string(),
//!     artist: Some("John Newton".to_string()),
//!     slug: "amazing-grace".to_string(),
//! }];
//!
//! let matches = find_duplicates("amazing grace!", &corpus);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].score, 0.0);
//!
//! assert!(find_duplicates("Xyzzy Quux", &corpus).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Distance below which a title counts as a likely duplicate
pub const DEFAULT_THRESHOLD: f64 = 0.3;
/// Maximum number of matches returned
pub const DEFAULT_MAX_RESULTS: usize = 5;
/// Queries shorter than this (in characters, after trimming) match nothing
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 3;

/// Words stripped from the start of a title for the second comparison
const LEADING_FILLER: [&str; 5] = ["oh", "o", "the", "a", "an"];

/// A song from the catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    pub slug: String,
}

/// A likely duplicate of the queried title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialDuplicate {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub slug: String,
    /// Distance in `[0, 1]`, lower is a closer match
    pub score: f64,
}

/// Tunables for [`find_duplicates_with_config`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DuplicateConfig {
    pub threshold: f64,
    pub max_results: usize,
    pub min_query_length: usize,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
        }
    }
}

/// Lowercase, drop apostrophes, turn other punctuation into spaces and
/// collapse whitespace.
///
/// ```
/// use chordchart::duplicates::normalize_title;
///
/// assert_eq!(normalize_title("  It's   Well (With My Soul)! "), "its well with my soul");
/// ```
pub fn normalize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '\'' | '’'))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove leading filler words from a normalized title.
///
/// Never returns an empty string: a title made only of filler is kept whole.
pub fn strip_leading_filler(normalized: &str) -> &str {
    let mut rest = normalized;
    loop {
        let stripped = LEADING_FILLER.iter().find_map(|word| {
            rest.strip_prefix(word)
                .and_then(|r| r.strip_prefix(' '))
                .filter(|r| !r.is_empty())
        });
        match stripped {
            Some(r) => rest = r,
            None => return rest,
        }
    }
}

/// Normalized forms of one title, computed once per search
struct TitleKey {
    full: String,
    stripped: String,
}

impl TitleKey {
    fn new(title: &str) -> Self {
        let full = normalize_title(title);
        let stripped = strip_leading_filler(&full).to_string();
        Self { full, stripped }
    }

    fn distance(&self, other: &TitleKey) -> f64 {
        let full = 1.0 - strsim::normalized_levenshtein(&self.full, &other.full);
        let stripped = 1.0 - strsim::normalized_levenshtein(&self.stripped, &other.stripped);
        full.min(stripped).clamp(0.0, 1.0)
    }
}

/// Find likely duplicates of `title` in `corpus` with default settings.
pub fn find_duplicates(title: &str, corpus: &[SongSummary]) -> Vec<PotentialDuplicate> {
    find_duplicates_with_config(title, corpus, &DuplicateConfig::default())
}

/// Find likely duplicates of `title` in `corpus`.
///
/// Returns an empty list for queries shorter than `min_query_length`
/// characters after trimming, or that normalize to nothing.
pub fn find_duplicates_with_config(
    title: &str,
    corpus: &[SongSummary],
    config: &DuplicateConfig,
) -> Vec<PotentialDuplicate> {
    let title = title.trim();
    if title.chars().count() < config.min_query_length {
        return Vec::new();
    }

    let query = TitleKey::new(title);
    if query.full.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<PotentialDuplicate> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for song in corpus {
        let score = query.distance(&TitleKey::new(&song.title));
        tracing::trace!(id = %song.id, title = %song.title, score, "scored candidate");
        if score >= config.threshold {
            continue;
        }

        let candidate = PotentialDuplicate {
            id: song.id.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            slug: song.slug.clone(),
            score,
        };
        match seen.get(song.id.as_str()) {
            Some(&idx) if score < matches[idx].score => matches[idx] = candidate,
            Some(_) => {}
            None => {
                seen.insert(&song.id, matches.len());
                matches.push(candidate);
            }
        }
    }

    matches.sort_by(|a, b| a.score.total_cmp(&b.score));
    matches.truncate(config.max_results);

    tracing::debug!(
        query = %title,
        corpus = corpus.len(),
        matches = matches.len(),
        top_score = ?matches.first().map(|m| m.score),
        "duplicate search complete"
    );

    matches
}
