use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game – one row of the dataset
// ---------------------------------------------------------------------------

/// A single game record (one data row of the source file).
///
/// Fields are public for reading; the store only ever hands out shared
/// references, so nothing can change a record once it is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    pub platform: String,
    /// Calendar release date; serialised as `YYYY-MM-DD`.
    pub release_date: NaiveDate,
    /// Audience score, usually on a 0–10 scale.
    pub user_review: f64,
    /// Critic aggregate score, usually on a 0–100 scale.
    pub meta_score: i32,
    pub summary: String,
}

impl Game {
    pub fn new(
        name: impl Into<String>,
        platform: impl Into<String>,
        release_date: NaiveDate,
        user_review: f64,
        meta_score: i32,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            platform: platform.into(),
            release_date,
            user_review,
            meta_score,
            summary: summary.into(),
        }
    }

    /// Release year, the granularity most queries work at.
    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }
}

// -- Manual Eq/Ord/Hash so Game can live in BTreeSet / HashSet --
//
// `user_review` is compared with `f64::total_cmp` and hashed by bit pattern,
// which keeps equality, ordering and hashing consistent with each other.

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Game {}

impl PartialOrd for Game {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Game {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.platform.cmp(&other.platform))
            .then_with(|| self.release_date.cmp(&other.release_date))
            .then_with(|| self.user_review.total_cmp(&other.user_review))
            .then_with(|| self.meta_score.cmp(&other.meta_score))
            .then_with(|| self.summary.cmp(&other.summary))
    }
}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.platform.hash(state);
        self.release_date.hash(state);
        self.user_review.to_bits().hash(state);
        self.meta_score.hash(state);
        self.summary.hash(state);
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) user {:.1} / meta {}",
            self.name, self.platform, self.release_date, self.user_review, self.meta_score
        )
    }
}
