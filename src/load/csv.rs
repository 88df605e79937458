//! CSV-level loading of match records.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::Match;

/// Number of fields in one record line.
pub const FIELD_COUNT: usize = 7;

/// Load all matches from a CSV file.
///
/// Rules:
///
/// - The first line is a header and is discarded, whatever it contains.
/// - Every following line is one record with exactly seven positional
///   fields: date, time, home, away, home goals, away goals, info.
/// - Score fields must parse as non-negative integers.
/// - The first malformed line aborts the whole load.
pub fn load_matches_from_csv_path(path: impl AsRef<Path>) -> LoadResult<Vec<Match>> {
    // Open the file directly so a missing source surfaces as an I/O error,
    // not a reader-level one. The handle is dropped when the load returns.
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    load_matches_from_reader(&mut rdr)
}

/// Load all matches from an existing CSV reader.
///
/// The reader should be built with `has_headers(true)` (so the header line is
/// consumed and discarded) and `flexible(true)` (so ragged lines surface as a
/// field-count error here rather than a reader-level one).
pub fn load_matches_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<Vec<Match>> {
    let mut matches: Vec<Match> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based line numbers for users; +1 again because the header is line 1.
        let line = row_idx0 + 2;
        let record = result?;

        if record.len() != FIELD_COUNT {
            return Err(LoadError::FieldCount {
                line,
                expected: FIELD_COUNT,
                found: record.len(),
            });
        }

        matches.push(Match {
            date: field_text(&record, 0),
            time: field_text(&record, 1),
            home: field_text(&record, 2),
            away: field_text(&record, 3),
            home_goals: parse_score(line, "home_goals", record.get(4).unwrap_or(""))?,
            away_goals: parse_score(line, "away_goals", record.get(5).unwrap_or(""))?,
            info: field_text(&record, 6),
        });
    }

    Ok(matches)
}

fn field_text(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_owned()
}

fn parse_score(line: usize, field: &'static str, raw: &str) -> LoadResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| LoadError::Parse {
            line,
            field,
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
