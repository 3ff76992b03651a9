use std::collections::BTreeSet;

use super::recommender::GameRecommender;

// ---------------------------------------------------------------------------
// Platform filter: which platforms are currently shown
// ---------------------------------------------------------------------------

/// Set of selected platform names. An empty set hides everything.
pub type PlatformFilter = BTreeSet<String>;

/// Initialise a [`PlatformFilter`] with every platform selected.
pub fn init_filter_state(recommender: &GameRecommender) -> PlatformFilter {
    recommender
        .platforms()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Return indices (into [`GameRecommender::all_games`]) of games whose
/// platform is selected.
pub fn filtered_indices(recommender: &GameRecommender, selected: &PlatformFilter) -> Vec<usize> {
    recommender
        .all_games()
        .iter()
        .enumerate()
        .filter(|(_, game)| selected.contains(&game.platform))
        .map(|(i, _)| i)
        .collect()
}
