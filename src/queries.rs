//! The report queries.
//!
//! Every function here is a pure, stateless query over a shared `&[Match]`
//! slice: nothing is mutated, nothing is cached, and each call recomputes
//! its answer from scratch. Once a list has been loaded, every query is
//! total: the empty-input answers are `0`, `0.0`, `None`, an empty string,
//! or `false`, never an error.
//!
//! Groupings are returned as `BTreeMap`s, so their iteration order is fixed
//! (outcome buckets in `Won`/`Lost`/`Draw` order, team buckets in
//! lexicographic name order).
//!
//! ## Example: count, partition, average
//!
//! ```rust
//! use match_stats::queries;
//! use match_stats::types::Match;
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
//! assert_eq!(queries::competition_game_count(&games, "BUNDESLIGA"), 1);
//! let (home, away) = queries::partition_by_home(&games, "FC Bayern Muenchen");
//! assert_eq!((home.len(), away.len()), (1, 0));
//! assert_eq!(queries::average_goals(&games), 6.0);
//! ```

use std::collections::{BTreeMap, HashSet};

use crate::types::{Match, Outcome};

/// How many games carry `marker` in their info tag (case-sensitive
/// substring match).
pub fn competition_game_count(games: &[Match], marker: &str) -> usize {
    games.iter().filter(|g| g.info.contains(marker)).count()
}

/// Split the games into (home games, away games) for `team`, by exact
/// equality on the home-team field.
///
/// The two sides are disjoint, together they contain every input game, and
/// each side keeps the original input order. Either side may be empty.
pub fn partition_by_home<'a>(games: &'a [Match], team: &str) -> (Vec<&'a Match>, Vec<&'a Match>) {
    games.iter().partition(|g| g.home == team)
}

/// Group the games by their [`Outcome`].
///
/// A bucket with no members is absent from the map. Callers that want
/// get-or-empty semantics ask with
/// `map.get(&outcome).map(Vec::as_slice).unwrap_or(&[])`.
pub fn group_by_outcome(games: &[Match]) -> BTreeMap<Outcome, Vec<&Match>> {
    let mut buckets: BTreeMap<Outcome, Vec<&Match>> = BTreeMap::new();
    for g in games {
        buckets.entry(g.outcome()).or_default().push(g);
    }
    buckets
}

/// Arithmetic mean of goals per game, accumulated as integers and divided
/// at the end. `0.0` for an empty list.
pub fn average_goals(games: &[Match]) -> f64 {
    if games.is_empty() {
        return 0.0;
    }
    let total: u64 = games.iter().map(|g| u64::from(g.goal_count())).sum();
    total as f64 / games.len() as f64
}

/// Arithmetic mean of goals per game, accumulated directly in floating
/// point. Produces the same value as [`average_goals`] for the same input:
/// goal counts are small integers, so the `f64` sum is exact and both
/// functions divide the same sum by the same count. `0.0` for an empty list.
pub fn average_goals_fold(games: &[Match]) -> f64 {
    if games.is_empty() {
        return 0.0;
    }
    let total = games
        .iter()
        .fold(0.0_f64, |acc, g| acc + f64::from(g.goal_count()));
    total / games.len() as f64
}

/// How many games `team` played at home and won.
///
/// Two independent predicates joined by AND; the filter order does not
/// change the count.
pub fn home_win_count(games: &[Match], team: &str) -> usize {
    games
        .iter()
        .filter(|g| g.home == team)
        .filter(|g| g.outcome() == Outcome::Won)
        .count()
}

/// The game with the fewest total goals, found by a stable ascending sort
/// followed by take-first. `None` for an empty list.
///
/// On ties the sort's stability keeps the original order, so the first of
/// the tied games wins.
pub fn fewest_goals_sorted(games: &[Match]) -> Option<&Match> {
    let mut by_goals: Vec<&Match> = games.iter().collect();
    by_goals.sort_by_key(|g| g.goal_count());
    by_goals.first().copied()
}

/// The game with the fewest total goals, found by a direct minimum-by-key.
/// `None` for an empty list.
///
/// `Iterator::min_by_key` keeps the *last* of equally-minimal elements, so
/// the key includes the original index to select the first instead. Agrees
/// with [`fewest_goals_sorted`] on every input, ties included.
pub fn fewest_goals_min(games: &[Match]) -> Option<&Match> {
    games
        .iter()
        .enumerate()
        .min_by_key(|(idx, g)| (g.goal_count(), *idx))
        .map(|(_, g)| g)
}

/// The distinct kickoff times, in order of first occurrence, joined with
/// `", "`. Empty string for an empty list.
pub fn distinct_kickoff_times(games: &[Match]) -> String {
    let mut seen = HashSet::new();
    games
        .iter()
        .map(|g| g.time.as_str())
        .filter(|t| seen.insert(*t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether some game has `team` as the away side, a home-side [`Outcome::Won`]
/// classification, and at least two goals in total.
///
/// Note the exact conditions: the outcome is judged from the home side (so
/// this matches games the away side dropped), and the threshold is on the
/// combined goal count, not the winning margin. The season report has always
/// asked the question this way, and it is kept as asked.
pub fn won_away_with_two_goals(games: &[Match], team: &str) -> bool {
    games
        .iter()
        .filter(|g| g.away == team)
        .any(|g| g.outcome() == Outcome::Won && g.goal_count() >= 2)
}

/// The games whose date contains `year`, grouped by home team.
///
/// Groups iterate in lexicographic home-team order; within a group, games
/// keep their original order. Flattening the map's values yields exactly
/// the filtered games (same multiset), just regrouped.
pub fn games_by_home_for_year<'a>(games: &'a [Match], year: &str) -> BTreeMap<&'a str, Vec<&'a Match>> {
    let mut by_home: BTreeMap<&str, Vec<&Match>> = BTreeMap::new();
    for g in games.iter().filter(|g| g.date.contains(year)) {
        by_home.entry(g.home.as_str()).or_default().push(g);
    }
    by_home
}
