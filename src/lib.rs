//! Read-only queries over an in-memory dataset of games, plus the gift
//! delivery check.
//!
//! ```no_run
//! use game_recommender::data::{GameRecommender, LoadOptions};
//!
//! let file = std::fs::File::open("games.csv")?;
//! let recommender = GameRecommender::from_reader(file, &LoadOptions::default())?;
//! for game in recommender.top_n_user_rated(3) {
//!     println!("{game}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod data;
pub mod delivery;
