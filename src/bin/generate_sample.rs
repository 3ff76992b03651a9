use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use game_recommender::data::Game;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Platforms with the first and last year they received releases.
const PLATFORMS: [(&str, i32, i32); 5] = [
    ("PC", 1996, 2023),
    ("PlayStation 2", 2000, 2010),
    ("Xbox 360", 2005, 2015),
    ("Switch", 2017, 2023),
    ("Game Boy Advance", 2001, 2008),
];

const ADJECTIVES: [&str; 8] = [
    "Crimson", "Silent", "Eternal", "Broken", "Iron", "Hidden", "Lost", "Neon",
];
const NOUNS: [&str; 8] = [
    "Kingdom", "Frontier", "Protocol", "Harbor", "Legacy", "Echo", "Citadel", "Drift",
];
const HOOKS: [&str; 6] = [
    "an open world",
    "a great story",
    "tactical combat",
    "a vast dungeon",
    "online co-op",
    "a hand-drawn art style",
];

/// Build the sample games from a fixed seed.
fn generate_games(seed: u64) -> Result<Vec<Game>> {
    let mut rng = SimpleRng::new(seed);
    let mut games = Vec::new();

    for (i, adjective) in ADJECTIVES.iter().enumerate() {
        for noun in NOUNS.iter().skip(i % 3) {
            let &(platform, first, last) = rng.pick(&PLATFORMS);
            let year_span = (last - first + 1) as u64;
            let year = first + (rng.next_u64() % year_span) as i32;
            let day_of_year = rng.next_u64() % 365;
            let release_date = NaiveDate::from_ymd_opt(year, 1, 1)
                .and_then(|d| d.checked_add_days(Days::new(day_of_year)))
                .context("building release date")?;

            // One decimal place, 3.0..=10.0
            let user_review = (30.0 + rng.next_f64() * 70.0).round() / 10.0;
            let meta_score = 40 + (rng.next_u64() % 60) as i32;
            let summary = format!(
                "A {} adventure with {}, {}, and {}.",
                adjective.to_lowercase(),
                rng.pick(&HOOKS),
                rng.pick(&HOOKS),
                rng.pick(&HOOKS)
            );

            games.push(Game::new(
                format!("{adjective} {noun}"),
                platform,
                release_date,
                user_review,
                meta_score,
                summary,
            ));
        }
    }

    Ok(games)
}

/// Write `games` as CSV with a header row.
fn write_games<W: Write>(out: W, games: &[Game]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for game in games {
        writer.serialize(game).context("writing game row")?;
    }
    writer.flush().context("flushing output")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("games.csv"));

    let games = generate_games(42)?;
    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    write_games(file, &games)?;

    println!("Wrote {} games to {}", games.len(), output_path.display());
    Ok(())
}
