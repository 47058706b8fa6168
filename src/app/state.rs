//! View state owned by the top-level controller
//!
//! Transitions: `Idle -> Loading -> Loaded | Failed`, and any state back to
//! `Loading` on re-fetch. Every fetch is tagged with a [`RequestToken`]; only
//! the completion carrying the most recent token is applied, so a slow stale
//! response cannot overwrite fresher data.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::app::models::DiveEntry;
use crate::app::services::selection::{SessionSelection, default_selected_date};
use crate::app::services::sheet_source::FetchOutcome;

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Load state of the log book
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,

    /// A fetch is in flight
    Loading,

    /// Records are available; `selected_date` is `None` only when empty
    Loaded {
        records: Vec<DiveEntry>,
        selected_date: Option<String>,
    },

    /// The last fetch could not retrieve the export
    Failed { reason: String },
}

/// Owns the load state and applies fetch results and user selections
#[derive(Debug)]
pub struct LogbookController {
    state: LoadState,
    issued: u64,
    last_synced: Option<DateTime<Local>>,
    /// Last session shown, carried across re-fetches
    remembered_date: Option<String>,
}

impl Default for LogbookController {
    fn default() -> Self {
        Self::new()
    }
}

impl LogbookController {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            issued: 0,
            last_synced: None,
            remembered_date: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Time of the last applied successful fetch
    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    /// Enter `Loading` and issue a token for the new fetch
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.issued += 1;
        self.state = LoadState::Loading;
        debug!("Issued fetch #{}", self.issued);
        RequestToken(self.issued)
    }

    /// Apply a fetch result; returns false when the token is stale
    ///
    /// A session the user already picked survives a refresh when the new
    /// records still contain it; otherwise the newest session is selected.
    pub fn complete_fetch(&mut self, token: RequestToken, outcome: FetchOutcome) -> bool {
        if token.0 != self.issued {
            debug!(
                "Discarding stale fetch #{} (latest is #{})",
                token.0, self.issued
            );
            return false;
        }

        let previous = self.remembered_date.take();

        self.state = match outcome {
            FetchOutcome::Loaded { entries, .. } => {
                let selected_date = previous
                    .filter(|date| entries.iter().any(|entry| &entry.date == date))
                    .or_else(|| default_selected_date(&entries).map(str::to_string));
                self.last_synced = Some(Local::now());
                self.remembered_date = selected_date.clone();
                info!("Log book holds {} dives", entries.len());
                LoadState::Loaded {
                    records: entries,
                    selected_date,
                }
            }
            FetchOutcome::Failed { reason } => {
                self.remembered_date = previous;
                LoadState::Failed { reason }
            }
        };
        true
    }

    /// Choose a session; ignored unless records are loaded
    pub fn select_date(&mut self, date: impl Into<String>) -> bool {
        match &mut self.state {
            LoadState::Loaded { selected_date, .. } => {
                let date = date.into();
                *selected_date = Some(date.clone());
                self.remembered_date = Some(date);
                true
            }
            _ => false,
        }
    }

    /// Currently selected session date
    pub fn selected_date(&self) -> Option<&str> {
        match &self.state {
            LoadState::Loaded { selected_date, .. } => selected_date.as_deref(),
            _ => None,
        }
    }

    /// Records of the current snapshot, empty unless loaded
    pub fn records(&self) -> &[DiveEntry] {
        match &self.state {
            LoadState::Loaded { records, .. } => records,
            _ => &[],
        }
    }

    /// Derived session selection, available once loading has finished
    pub fn selection(&self) -> Option<SessionSelection<'_>> {
        match &self.state {
            LoadState::Loaded {
                records,
                selected_date,
            } => Some(SessionSelection::select(records, selected_date.as_deref())),
            LoadState::Failed { .. } => Some(SessionSelection::select(&[], None)),
            LoadState::Idle | LoadState::Loading => None,
        }
    }
}
