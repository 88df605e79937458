use match_stats::load::csv::load_matches_from_reader;
use match_stats::queries;
use match_stats::types::{Match, Outcome};

const BAYERN: &str = "FC Bayern Muenchen";

fn game(date: &str, time: &str, home: &str, away: &str, hg: u32, ag: u32, info: &str) -> Match {
    Match {
        date: date.to_string(),
        time: time.to_string(),
        home: home.to_string(),
        away: away.to_string(),
        home_goals: hg,
        away_goals: ag,
        info: info.to_string(),
    }
}

fn season() -> Vec<Match> {
    vec![
        game("2019-08-16", "20:30", BAYERN, "Hertha BSC", 2, 2, "BUNDESLIGA"),
        game("2019-08-24", "18:30", "FC Schalke 04", BAYERN, 0, 3, "BUNDESLIGA"),
        game("2019-08-31", "15:30", BAYERN, "1. FSV Mainz 05", 6, 1, "BUNDESLIGA"),
        game("2019-10-29", "20:45", "VfL Bochum", BAYERN, 1, 2, "DFB-POKAL"),
        game("2019-11-02", "15:30", "Eintracht Frankfurt", BAYERN, 5, 1, "BUNDESLIGA"),
        game("2018-12-22", "15:30", BAYERN, "Eintracht Frankfurt", 3, 0, "BUNDESLIGA"),
    ]
}

/// Render-and-sort, so two lists can be compared as multisets.
fn multiset(games: &[&Match]) -> Vec<String> {
    let mut rendered: Vec<String> = games.iter().map(|g| g.to_string()).collect();
    rendered.sort();
    rendered
}

// One record: home=Bayern, 3-1, BUNDESLIGA, 2019. Every query has a known answer.
#[test]
fn scenario_single_bayern_home_win() {
    let games = vec![game("2019-05-01", "15:30", BAYERN, "Borussia Dortmund", 3, 1, "BUNDESLIGA")];

    assert_eq!(queries::competition_game_count(&games, "BUNDESLIGA"), 1);

    let (home, away) = queries::partition_by_home(&games, BAYERN);
    assert_eq!(home.len(), 1);
    assert!(away.is_empty());

    let by_outcome = queries::group_by_outcome(&games);
    assert_eq!(by_outcome[&Outcome::Won].len(), 1);
    assert!(!by_outcome.contains_key(&Outcome::Lost));
    assert!(!by_outcome.contains_key(&Outcome::Draw));

    assert_eq!(queries::average_goals(&games), 2.0);
    assert_eq!(queries::average_goals_fold(&games), 2.0);
    assert_eq!(queries::home_win_count(&games, BAYERN), 1);

    assert_eq!(queries::fewest_goals_sorted(&games), Some(&games[0]));
    assert_eq!(queries::fewest_goals_min(&games), Some(&games[0]));

    assert_eq!(queries::distinct_kickoff_times(&games), "15:30");

    // The target team is the home side here, so the away-game check is false.
    assert!(!queries::won_away_with_two_goals(&games, BAYERN));

    let by_home = queries::games_by_home_for_year(&games, "2019");
    let flattened: Vec<&Match> = by_home.values().flatten().copied().collect();
    assert_eq!(flattened.len(), 1);
}

// Two goalless games: both fewest-goals formulations must pick the first one.
#[test]
fn scenario_tied_fewest_goals_picks_first_in_input_order() {
    let games = vec![
        game("2019-09-01", "15:30", "FC Schalke 04", "Hertha BSC", 1, 1, "BUNDESLIGA"),
        game("2019-09-08", "15:30", "VfL Wolfsburg", "1. FC Koeln", 0, 0, "BUNDESLIGA"),
        game("2019-09-15", "18:30", "SC Freiburg", "1. FSV Mainz 05", 0, 0, "BUNDESLIGA"),
    ];

    assert_eq!(queries::fewest_goals_sorted(&games), Some(&games[1]));
    assert_eq!(queries::fewest_goals_min(&games), Some(&games[1]));
    assert_eq!(
        queries::fewest_goals_sorted(&games),
        queries::fewest_goals_min(&games)
    );
}

// Header-only source file: the list is empty and every query still answers.
#[test]
fn scenario_header_only_source() {
    let input = "date,time,home,away,home_goals,away_goals,info\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());
    let games = load_matches_from_reader(&mut rdr).unwrap();
    assert!(games.is_empty());

    assert_eq!(queries::competition_game_count(&games, "BUNDESLIGA"), 0);
    assert_eq!(queries::average_goals(&games), 0.0);
    assert_eq!(queries::average_goals_fold(&games), 0.0);
    assert_eq!(queries::fewest_goals_sorted(&games), None);
    assert_eq!(queries::fewest_goals_min(&games), None);
    assert_eq!(queries::distinct_kickoff_times(&games), "");
    assert!(!queries::won_away_with_two_goals(&games, BAYERN));
}

#[test]
fn partition_sides_are_disjoint_and_cover_the_input() {
    let games = season();
    let (home, away) = queries::partition_by_home(&games, BAYERN);

    assert_eq!(home.len() + away.len(), games.len());
    assert!(home.iter().all(|g| g.home == BAYERN));
    assert!(away.iter().all(|g| g.home != BAYERN));

    let both: Vec<&Match> = home.iter().chain(away.iter()).copied().collect();
    let all: Vec<&Match> = games.iter().collect();
    assert_eq!(multiset(&both), multiset(&all));

    // Each side keeps input order.
    assert_eq!(home[0], &games[0]);
    assert_eq!(away[0], &games[1]);
}

#[test]
fn both_average_formulations_agree() {
    let games = season();
    assert_eq!(queries::average_goals(&games), queries::average_goals_fold(&games));

    // 4 + 3 + 7 + 3 + 6 + 3 = 26 goals over 6 games.
    let expected = 26.0 / 6.0;
    assert!((queries::average_goals(&games) - expected).abs() < 1e-12);
}

#[test]
fn outcome_buckets_cover_all_games_and_absent_buckets_read_as_empty() {
    let games = season();
    let by_outcome = queries::group_by_outcome(&games);

    let total: usize = by_outcome.values().map(Vec::len).sum();
    assert_eq!(total, games.len());

    // All-draw input: only the Draw bucket exists, the others read as empty.
    let draws = vec![
        game("2019-09-01", "15:30", "FC Schalke 04", "Hertha BSC", 1, 1, "BUNDESLIGA"),
        game("2019-09-08", "15:30", "VfL Wolfsburg", "1. FC Koeln", 0, 0, "BUNDESLIGA"),
    ];
    let by_outcome = queries::group_by_outcome(&draws);
    assert_eq!(by_outcome.len(), 1);
    assert!(!by_outcome.contains_key(&Outcome::Won));
    let won: &[&Match] = by_outcome
        .get(&Outcome::Won)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    assert!(won.is_empty());
    assert_eq!(by_outcome[&Outcome::Draw].len(), 2);
}

#[test]
fn home_win_count_ignores_away_wins_and_home_draws() {
    let games = season();
    // Home games: 2:2 draw, 6:1 win, 3:0 win.
    assert_eq!(queries::home_win_count(&games, BAYERN), 2);
}

#[test]
fn away_check_matches_home_side_wins_with_two_total_goals() {
    // Target away, home side won, 6 goals in total: matches.
    let dropped_away = vec![game("2019-11-02", "15:30", "Eintracht Frankfurt", BAYERN, 5, 1, "BUNDESLIGA")];
    assert!(queries::won_away_with_two_goals(&dropped_away, BAYERN));

    // Target away and actually winning: no match, the outcome is judged
    // from the home side.
    let won_away = vec![game("2019-08-24", "18:30", "FC Schalke 04", BAYERN, 0, 3, "BUNDESLIGA")];
    assert!(!queries::won_away_with_two_goals(&won_away, BAYERN));

    // Home side won but only one goal in total: below the threshold.
    let narrow = vec![game("2019-09-14", "15:30", "RB Leipzig", BAYERN, 1, 0, "BUNDESLIGA")];
    assert!(!queries::won_away_with_two_goals(&narrow, BAYERN));

    // Target at home: never matches, whatever the score.
    let at_home = vec![game("2019-08-31", "15:30", BAYERN, "1. FSV Mainz 05", 6, 1, "BUNDESLIGA")];
    assert!(!queries::won_away_with_two_goals(&at_home, BAYERN));
}

#[test]
fn year_grouping_flattens_back_to_the_filtered_games() {
    let games = season();
    let by_home = queries::games_by_home_for_year(&games, "2019");

    let filtered: Vec<&Match> = games.iter().filter(|g| g.date.contains("2019")).collect();
    let flattened: Vec<&Match> = by_home.values().flatten().copied().collect();
    assert_eq!(multiset(&flattened), multiset(&filtered));
    // The 2018 game is filtered out.
    assert_eq!(flattened.len(), games.len() - 1);

    // Groups iterate in lexicographic home-team order.
    let keys: Vec<&str> = by_home.keys().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    // Within a group, original order is preserved.
    let bayern_home: Vec<&Match> = by_home[BAYERN].clone();
    assert_eq!(bayern_home, vec![&games[0], &games[2]]);
}
