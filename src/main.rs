//! Season report: loads the results file and prints the answers to a fixed
//! sequence of queries. Runs front to back with no state between queries; a
//! load failure ends the run before any query output.

use std::process::ExitCode;
use std::sync::Arc;

use match_stats::load::{load_matches_from_path, LoadOptions, StdErrObserver};
use match_stats::queries;
use match_stats::types::{Match, Outcome};

const GAMES_CSV: &str = "data/games.csv";
const BUNDESLIGA: &str = "BUNDESLIGA";
const BAYERN: &str = "FC Bayern Muenchen";
const YEAR: &str = "2019";

fn main() -> ExitCode {
    let opts = LoadOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };

    // A failed load has been reported to stderr by the observer; no report
    // output may follow it.
    let Ok(games) = load_matches_from_path(GAMES_CSV, &opts) else {
        return ExitCode::FAILURE;
    };

    for game in &games {
        println!("{game}");
    }
    println!();

    // 1: competition filter + count
    let bundesliga_game_count = queries::competition_game_count(&games, BUNDESLIGA);
    println!("There were {bundesliga_game_count} Bundesliga games");
    println!();

    // 2: home/away partition
    let (home_games, away_games) = queries::partition_by_home(&games, BAYERN);
    println!("*** HOME ***");
    print_games(&home_games);
    println!("*** AWAY ***");
    print_games(&away_games);
    println!();

    // 3: group by outcome (empty buckets print as empty sections)
    let by_outcome = queries::group_by_outcome(&games);
    for (label, outcome) in [
        ("*** WON ***", Outcome::Won),
        ("*** DRAW ***", Outcome::Draw),
        ("*** LOST ***", Outcome::Lost),
    ] {
        println!("{label}");
        print_games(by_outcome.get(&outcome).map(Vec::as_slice).unwrap_or(&[]));
    }
    println!();

    // 4 + 5: average goals per game, two formulations with one answer
    println!("Average goals per game: {:.2}", queries::average_goals(&games));
    println!(
        "Average goals per game: {:.2}",
        queries::average_goals_fold(&games)
    );
    println!();

    // 6: home wins of the target team
    let won_home_games = queries::home_win_count(&games, BAYERN);
    println!("{BAYERN} won {won_home_games} games at home");
    println!();

    // 7 + 8: fewest goals, two formulations with one answer
    print_fewest(queries::fewest_goals_sorted(&games));
    print_fewest(queries::fewest_goals_min(&games));
    println!();

    // 9: distinct kickoff times
    println!(
        "Distinct kickoff times: {}",
        queries::distinct_kickoff_times(&games)
    );
    println!();

    // 10: away-game existence check
    let answer = if queries::won_away_with_two_goals(&games, BAYERN) {
        "yes"
    } else {
        "no"
    };
    println!("{BAYERN} won an away game with at least 2 goals: {answer}");
    println!();

    // 11: one year's games, grouped by home team, flattened back to a list
    let by_home = queries::games_by_home_for_year(&games, YEAR);
    for game in by_home.values().flatten() {
        println!("{game}");
    }

    ExitCode::SUCCESS
}

fn print_games(games: &[&Match]) {
    for game in games {
        println!("{game}");
    }
}

fn print_fewest(game: Option<&Match>) {
    match game {
        Some(game) => println!("Game with fewest goals: {game}"),
        None => println!("Game with fewest goals: none"),
    }
}
