//! `match-stats` loads one season of football results from a CSV file into an
//! in-memory list of [`types::Match`] records and answers a fixed set of
//! report queries over it.
//!
//! The primary entrypoint is [`load::load_matches_from_path`], which reads the
//! whole source file (header line discarded, every other line one record),
//! validates it, and returns the full list, or fails as a whole. There is no
//! partial load: the query layer only ever sees a fully validated list, which
//! is why every query in [`queries`] is total.
//!
//! ## Source format
//!
//! Comma-separated, one header line, then seven positional fields per record:
//!
//! ```text
//! date,time,home,away,home_goals,away_goals,info
//! 2019-05-18,15:30,FC Bayern Muenchen,Eintracht Frankfurt,5,1,BUNDESLIGA
//! ```
//!
//! Scores must be non-negative integers; everything else is kept as text.
//!
//! ## Quick example: load and query
//!
//! ```no_run
//! use match_stats::load::{load_matches_from_path, LoadOptions};
//! use match_stats::queries;
//!
//! # fn main() -> Result<(), match_stats::LoadError> {
//! let games = load_matches_from_path("data/games.csv", &LoadOptions::default())?;
//!
//! println!(
//!     "{} Bundesliga games, {:.2} goals per game",
//!     queries::competition_game_count(&games, "BUNDESLIGA"),
//!     queries::average_goals(&games),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Querying without a file
//!
//! The query layer only needs a slice, so tests and callers can build records
//! directly:
//!
//! ```rust
//! use match_stats::queries;
//! use match_stats::types::{Match, Outcome};
//!
//! let games = vec![Match {
//!     date: "2019-05-18".to_string(),
//!     time: "15:30".to_string(),
//!     home: "FC Bayern Muenchen".to_string(),
//!     away: "Eintracht Frankfurt".to_string(),
//!     home_goals: 5,
//!     away_goals: 1,
//!     info: "BUNDESLIGA".to_string(),
//! }];
//!
//! let by_outcome = queries::group_by_outcome(&games);
//! assert_eq!(by_outcome[&Outcome::Won].len(), 1);
//! assert!(queries::fewest_goals_min(&games).is_some());
//! ```
//!
//! ## Modules
//!
//! - [`load`]: load entrypoint, CSV-level loading, and load observability
//! - [`types`]: the match record model and its derived classifications
//! - [`queries`]: the report queries (pure functions over `&[Match]`)
//! - [`error`]: the error type used across the load path

pub mod error;
pub mod load;
pub mod queries;
pub mod types;

pub use error::{LoadError, LoadResult};
