use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::error::QueryError;
use super::model::Game;

// ---------------------------------------------------------------------------
// GameRecommender – the loaded dataset and its queries
// ---------------------------------------------------------------------------

/// Immutable, fully loaded collection of games.
///
/// Build one with [`GameRecommender::from_reader`](crate::data::loader) or
/// [`GameRecommender::from_games`]; every query borrows from it and none of
/// them take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct GameRecommender {
    games: Vec<Game>,
}

impl GameRecommender {
    /// Wrap an already parsed list of games, keeping their order.
    pub fn from_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the dataset had no data rows.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All games in dataset order.
    pub fn all_games(&self) -> &[Game] {
        &self.games
    }

    /// Distinct platform names, sorted.
    pub fn platforms(&self) -> BTreeSet<&str> {
        self.games.iter().map(|g| g.platform.as_str()).collect()
    }

    /// Games released strictly after `date`, in dataset order.
    pub fn released_after(&self, date: NaiveDate) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| g.release_date > date)
            .collect()
    }

    /// The `n` best games by user review score, highest first.
    ///
    /// The sort is stable, so games with equal scores keep their dataset
    /// order and repeated calls return the same sequence. If `n` exceeds
    /// the dataset size every game is returned.
    pub fn top_n_user_rated(&self, n: usize) -> Vec<&Game> {
        let mut ranked: Vec<&Game> = self.games.iter().collect();
        ranked.sort_by(|a, b| b.user_review.total_cmp(&a.user_review));
        ranked.truncate(n);
        ranked
    }

    /// Years (ascending, distinct) in which at least one game reached
    /// `minimal_score` meta score or higher.
    pub fn years_with_top_scoring(&self, minimal_score: i32) -> Vec<i32> {
        self.games
            .iter()
            .filter(|g| g.meta_score >= minimal_score)
            .map(Game::release_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Names of the games released in `year`, joined by `", "`.
    /// Empty string when nothing was released that year.
    pub fn names_released_in(&self, year: i32) -> String {
        self.games
            .iter()
            .filter(|g| g.release_year() == year)
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The game with the highest user review score on `platform`.
    ///
    /// A blank platform and a platform with no games are both
    /// [`QueryError::NotFound`]. Among equally rated games the one appearing
    /// last in the dataset wins.
    pub fn highest_user_rated_on(&self, platform: &str) -> Result<&Game, QueryError> {
        if platform.trim().is_empty() {
            return Err(QueryError::NotFound(
                "platform cannot be empty".to_string(),
            ));
        }

        self.games
            .iter()
            .filter(|g| g.platform == platform)
            .max_by(|a, b| a.user_review.total_cmp(&b.user_review))
            .ok_or_else(|| QueryError::NotFound(format!("no games for platform '{platform}'")))
    }

    /// Games grouped by platform. Only platforms with at least one game
    /// appear as keys; duplicate rows collapse into one set entry.
    pub fn games_by_platform(&self) -> BTreeMap<&str, BTreeSet<&Game>> {
        let mut grouped: BTreeMap<&str, BTreeSet<&Game>> = BTreeMap::new();
        for game in &self.games {
            grouped
                .entry(game.platform.as_str())
                .or_default()
                .insert(game);
        }
        grouped
    }

    /// Inclusive span of release years for `platform`.
    ///
    /// Returns 0 for a blank or unknown platform and 1 when every game on it
    /// came out in the same year.
    pub fn years_active(&self, platform: &str) -> u32 {
        if platform.trim().is_empty() {
            return 0;
        }

        let years = self
            .games
            .iter()
            .filter(|g| g.platform == platform)
            .map(Game::release_year);

        let (min, max) = years.fold((i32::MAX, i32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
        if min > max {
            return 0;
        }
        (max - min + 1).unsigned_abs()
    }

    /// Games whose summary contains every keyword (case-sensitive).
    ///
    /// No keywords matches every game. A blank keyword is rejected with
    /// [`QueryError::InvalidArgument`].
    pub fn similar_to<S: AsRef<str>>(&self, keywords: &[S]) -> Result<Vec<&Game>, QueryError> {
        if keywords.iter().any(|k| k.as_ref().trim().is_empty()) {
            return Err(QueryError::InvalidArgument(
                "keywords cannot be blank".to_string(),
            ));
        }

        Ok(self
            .games
            .iter()
            .filter(|g| keywords.iter().all(|k| g.summary.contains(k.as_ref())))
            .collect())
    }
}
