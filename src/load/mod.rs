//! Loading the match list from its source file.
//!
//! Most callers should use [`load_matches_from_path`], which reads the whole
//! source into an in-memory `Vec<`[`crate::types::Match`]`>` and, if an
//! observer is configured, reports success/failure/alerts to it.
//!
//! The reader-level functions are available under [`csv`].

pub mod csv;
pub mod observability;

use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::Match;

pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, StdErrObserver,
};

/// Options controlling load behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl std::fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load the full match list from a CSV file.
///
/// The source file handle lives only for the duration of this call. Any
/// failure (missing file, unreadable file, malformed line) aborts the load;
/// there is no partial result.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with match count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use match_stats::load::{load_matches_from_path, LoadOptions, StdErrObserver};
///
/// # fn main() -> Result<(), match_stats::LoadError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
///
/// let games = load_matches_from_path("data/games.csv", &opts)?;
/// println!("loaded {} games", games.len());
/// # Ok(())
/// # }
/// ```
pub fn load_matches_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> LoadResult<Vec<Match>> {
    let path = path.as_ref();
    let result = csv::load_matches_from_csv_path(path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(matches) => obs.on_success(
                &ctx,
                LoadStats {
                    matches: matches.len(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::FieldCount { .. } => LoadSeverity::Error,
        LoadError::Parse { .. } => LoadSeverity::Error,
    }
}
