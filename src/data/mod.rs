//! Data layer: core types, loading, querying, and filtering.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → GameRecommender
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐
//!   │ GameRecommender   │  Vec<Game>, read-only queries
//!   └──────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  platform selection → visible indices
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod recommender;

pub use error::{DatasetLoadError, QueryError};
pub use loader::{LoadOptions, load_file};
pub use model::Game;
pub use recommender::GameRecommender;
