//! Core data model: one played match and its derived classifications.
//!
//! Loading produces a `Vec<Match>`; records are immutable after construction
//! and every query in [`crate::queries`] works on a shared `&[Match]`.

use std::fmt;

/// Result of a match from the home side's point of view.
///
/// `Ord` is derived so groupings keyed by outcome can live in an ordered map
/// with a fixed iteration order (`Won` < `Lost` < `Draw`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Home side scored more goals.
    Won,
    /// Home side scored fewer goals.
    Lost,
    /// Both sides scored the same number of goals.
    Draw,
}

/// One played match.
///
/// Dates and kickoff times are kept as raw text; the report queries only
/// ever do substring and equality checks on them. Scores are `u32`, so
/// non-negativity holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Match date as it appeared in the source (e.g. `2019-05-18`).
    pub date: String,
    /// Kickoff time as it appeared in the source (e.g. `15:30`).
    pub time: String,
    /// Home team name.
    pub home: String,
    /// Away team name.
    pub away: String,
    /// Goals scored by the home side.
    pub home_goals: u32,
    /// Goals scored by the away side.
    pub away_goals: u32,
    /// Free-text info tag (may carry a competition marker).
    pub info: String,
}

impl Match {
    /// Total number of goals scored in this match.
    pub fn goal_count(&self) -> u32 {
        self.home_goals + self.away_goals
    }

    /// Classify the match from the home side's point of view.
    pub fn outcome(&self) -> Outcome {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => Outcome::Won,
            std::cmp::Ordering::Less => Outcome::Lost,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for Match {
    /// Renders every field in a fixed order. The exact layout carries no
    /// meaning, but it is stable for a given record, and all "print this
    /// match" behaviors go through it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} {}:{} {} | {}",
            self.date, self.time, self.home, self.home_goals, self.away_goals, self.away, self.info
        )
    }
}
