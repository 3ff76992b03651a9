use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use game_recommender::data::filter::{PlatformFilter, filtered_indices, init_filter_state};
use game_recommender::data::{Game, GameRecommender, LoadOptions, load_file};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Query inputs and results
// ---------------------------------------------------------------------------

/// Which query the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    AllGames,
    ReleasedAfter,
    TopUserRated,
    YearsWithTopScoring,
    NamesReleasedIn,
    HighestOnPlatform,
    ByPlatform,
    YearsActive,
    SimilarTo,
}

/// Values edited in the query widgets.
#[derive(Debug, Clone)]
pub struct QueryInputs {
    pub released_after: NaiveDate,
    pub top_n: usize,
    pub minimal_score: i32,
    pub year: i32,
    pub platform: String,
    /// Whitespace-separated keywords.
    pub keywords: String,
}

impl Default for QueryInputs {
    fn default() -> Self {
        Self {
            released_after: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            top_n: 10,
            minimal_score: 90,
            year: 2010,
            platform: String::new(),
            keywords: String::new(),
        }
    }
}

/// Rendered result of the last query. Owns its data so it outlives the
/// borrow of the dataset that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Games { title: String, games: Vec<Game> },
    Years { title: String, years: Vec<i32> },
    Text { title: String, text: String },
    Count { title: String, count: u32 },
    Groups { title: String, groups: Vec<(String, usize)> },
    Failed { title: String, message: String },
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub recommender: Option<GameRecommender>,

    /// File the dataset came from.
    pub source: Option<PathBuf>,

    /// How files are parsed.
    pub load_options: LoadOptions,

    /// Selected platforms.
    pub filters: PlatformFilter,

    /// Indices of games passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Platform colours.
    pub color_map: Option<ColorMap>,

    pub inputs: QueryInputs,

    /// Result of the last query run.
    pub outcome: Option<QueryOutcome>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(load_options: LoadOptions) -> Self {
        Self {
            recommender: None,
            source: None,
            load_options,
            filters: PlatformFilter::default(),
            visible_indices: Vec::new(),
            color_map: None,
            inputs: QueryInputs::default(),
            outcome: None,
            status_message: None,
        }
    }

    /// Load `path` and make it the current dataset.
    ///
    /// On failure the previous dataset stays in place and the error is kept
    /// in `status_message`.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let result = load_file(path, &self.load_options)
            .with_context(|| format!("loading {}", path.display()));

        match result {
            Ok(recommender) => {
                log::info!(
                    "Loaded {} games on {} platforms from {}",
                    recommender.len(),
                    recommender.platforms().len(),
                    path.display()
                );
                self.source = Some(path.to_path_buf());
                self.set_dataset(recommender);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Ingest a newly loaded dataset, initialise filters and colour.
    pub fn set_dataset(&mut self, recommender: GameRecommender) {
        self.filters = init_filter_state(&recommender);
        self.visible_indices = (0..recommender.len()).collect();
        self.color_map = Some(ColorMap::new(&recommender.platforms()));
        self.inputs.platform = recommender
            .platforms()
            .first()
            .map(|p| p.to_string())
            .unwrap_or_default();

        self.recommender = Some(recommender);
        self.outcome = None;
        self.status_message = None;
    }

    /// Recompute `visible_indices` after filter change.
    pub fn refilter(&mut self) {
        if let Some(rec) = &self.recommender {
            self.visible_indices = filtered_indices(rec, &self.filters);
        }
    }

    /// Toggle a single platform in the filter.
    pub fn toggle_platform(&mut self, platform: &str) {
        if !self.filters.remove(platform) {
            self.filters.insert(platform.to_string());
        }
        self.refilter();
    }

    /// Select every platform.
    pub fn select_all(&mut self) {
        if let Some(rec) = &self.recommender {
            self.filters = init_filter_state(rec);
            self.refilter();
        }
    }

    /// Deselect every platform.
    pub fn select_none(&mut self) {
        self.filters.clear();
        self.refilter();
    }

    /// Run `query` with the current inputs and keep its outcome.
    pub fn run_query(&mut self, query: Query) {
        let Some(rec) = &self.recommender else {
            self.status_message = Some("No dataset loaded".to_string());
            return;
        };
        self.outcome = Some(evaluate(rec, &self.inputs, query));
    }
}

fn owned(games: Vec<&Game>) -> Vec<Game> {
    games.into_iter().cloned().collect()
}

/// Run one query against the dataset.
pub fn evaluate(rec: &GameRecommender, inputs: &QueryInputs, query: Query) -> QueryOutcome {
    match query {
        Query::AllGames => QueryOutcome::Games {
            title: "All games".to_string(),
            games: rec.all_games().to_vec(),
        },
        Query::ReleasedAfter => QueryOutcome::Games {
            title: format!("Released after {}", inputs.released_after),
            games: owned(rec.released_after(inputs.released_after)),
        },
        Query::TopUserRated => QueryOutcome::Games {
            title: format!("Top {} by user review", inputs.top_n),
            games: owned(rec.top_n_user_rated(inputs.top_n)),
        },
        Query::YearsWithTopScoring => QueryOutcome::Years {
            title: format!("Years with meta score ≥ {}", inputs.minimal_score),
            years: rec.years_with_top_scoring(inputs.minimal_score),
        },
        Query::NamesReleasedIn => QueryOutcome::Text {
            title: format!("Released in {}", inputs.year),
            text: rec.names_released_in(inputs.year),
        },
        Query::HighestOnPlatform => {
            let title = format!("Highest user rated on '{}'", inputs.platform);
            match rec.highest_user_rated_on(&inputs.platform) {
                Ok(game) => QueryOutcome::Games {
                    title,
                    games: vec![game.clone()],
                },
                Err(e) => QueryOutcome::Failed {
                    title,
                    message: e.to_string(),
                },
            }
        }
        Query::ByPlatform => QueryOutcome::Groups {
            title: "Games by platform".to_string(),
            groups: rec
                .games_by_platform()
                .into_iter()
                .map(|(platform, games)| (platform.to_string(), games.len()))
                .collect(),
        },
        Query::YearsActive => QueryOutcome::Count {
            title: format!("Years active for '{}'", inputs.platform),
            count: rec.years_active(&inputs.platform),
        },
        Query::SimilarTo => {
            let keywords: Vec<&str> = inputs.keywords.split_whitespace().collect();
            let title = format!("Summaries containing {keywords:?}");
            match rec.similar_to(&keywords) {
                Ok(games) => QueryOutcome::Games {
                    title,
                    games: owned(games),
                },
                Err(e) => QueryOutcome::Failed {
                    title,
                    message: e.to_string(),
                },
            }
        }
    }
}
