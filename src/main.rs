mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Result, bail};
use app::GameRecommenderApp;
use clap::Parser;
use eframe::egui;
use game_recommender::data::LoadOptions;
use state::AppState;

/// Browse and query a dataset of games.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Dataset to open on start (.csv, .txt or .json).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Field delimiter for delimited text files.
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

impl Cli {
    fn load_options(&self) -> Result<LoadOptions> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }
        Ok(LoadOptions {
            delimiter: self.delimiter as u8,
            ..LoadOptions::default()
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::new(cli.load_options()?);
    if let Some(path) = &cli.data {
        // Keep going on failure: the error is shown in the status line.
        let _ = state.open(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game Recommender",
        options,
        Box::new(|_cc| Ok(Box::new(GameRecommenderApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_comma() {
        let cli = Cli::try_parse_from(["game-recommender"]).unwrap();
        assert_eq!(cli.load_options().unwrap().delimiter, b',');
        assert!(cli.data.is_none());
    }

    #[test]
    fn cli_accepts_data_and_delimiter() {
        let cli = Cli::try_parse_from(["game-recommender", "--data", "games.csv", "--delimiter", ";"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("games.csv")));
        assert_eq!(cli.load_options().unwrap().delimiter, b';');
    }

    #[test]
    fn cli_rejects_non_ascii_delimiter() {
        let cli = Cli::try_parse_from(["game-recommender", "--delimiter", "§"]).unwrap();
        assert!(cli.load_options().is_err());
    }
}
