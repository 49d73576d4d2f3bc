//! Search view-state: one tagged union of states plus a reducer, instead of a pile
//! of independently mutated flags.
//!
//! Two states flow through the front end: `Idle` (activity tiles / search box) and
//! `Searching` (progress steps, then results). Every in-flight search carries a
//! sequence number; completion events for a superseded sequence are dropped, so
//! the latest *issued* search always wins regardless of response arrival order.
//!
//! The two progress steps are cosmetic: they bracket a single atomic relay round
//! trip and carry no real backend phases.

pub mod recent;

pub use recent::{RecentSearches, RECENT_CAP};

use crate::gear::RecommendationSet;

/// Fixed progress-step labels, in display order.
pub const STEP_LABELS: [&str; 2] = [
    "Search for the best gear recommendations",
    "Gather product information and specifications",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Loading,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    pub label: &'static str,
    pub state: StepState,
}

/// Steps as they look right after a submit: first loading, second pending.
fn fresh_steps() -> [ProgressStep; 2] {
    [
        ProgressStep {
            label: STEP_LABELS[0],
            state: StepState::Loading,
        },
        ProgressStep {
            label: STEP_LABELS[1],
            state: StepState::Pending,
        },
    ]
}

/// The view state. `Idle.last_error` surfaces the most recent failure (cleared by
/// the next submit or an explicit back).
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Idle {
        last_error: Option<String>,
    },
    Searching {
        query: String,
        seq: u64,
        steps: [ProgressStep; 2],
        results: Option<RecommendationSet>,
    },
}

/// Reducer input. `seq` on completion events is the sequence the request was
/// issued with; mismatches are stale and ignored.
#[derive(Clone, Debug)]
pub enum SearchEvent {
    /// Tile selection or typed query. Discards prior results and supersedes any
    /// in-flight search.
    Submitted { query: String },
    /// The relay round trip came back; advances the cosmetic steps.
    ResponseReceived { seq: u64 },
    /// Parsed recommendations for the given sequence.
    Resolved { seq: u64, set: RecommendationSet },
    /// The relay call failed for the given sequence.
    Failed { seq: u64, error: String },
    /// Explicit return to the tiles.
    Back,
}

/// View state plus the sequence counter the reducer allocates from.
#[derive(Clone, Debug)]
pub struct SearchUi {
    state: ViewState,
    next_seq: u64,
}

impl Default for SearchUi {
    fn default() -> Self {
        SearchUi {
            state: ViewState::Idle { last_error: None },
            next_seq: 0,
        }
    }
}

impl SearchUi {
    pub fn new() -> Self {
        SearchUi::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Sequence number of the in-flight search, if any. Callers tag their relay
    /// call with this and echo it back in `Resolved` / `Failed`.
    pub fn active_seq(&self) -> Option<u64> {
        match &self.state {
            ViewState::Searching { seq, .. } => Some(*seq),
            ViewState::Idle { .. } => None,
        }
    }

    pub fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Submitted { query } => {
                self.next_seq += 1;
                self.state = ViewState::Searching {
                    query,
                    seq: self.next_seq,
                    steps: fresh_steps(),
                    results: None,
                };
            }
            SearchEvent::ResponseReceived { seq } => {
                if let ViewState::Searching {
                    seq: current, steps, ..
                } = &mut self.state
                {
                    if *current == seq {
                        steps[0].state = StepState::Completed;
                        steps[1].state = StepState::Loading;
                    }
                }
            }
            SearchEvent::Resolved { seq, set } => {
                if let ViewState::Searching {
                    seq: current,
                    steps,
                    results,
                    ..
                } = &mut self.state
                {
                    if *current == seq {
                        steps[0].state = StepState::Completed;
                        steps[1].state = StepState::Completed;
                        *results = Some(set);
                    }
                }
            }
            SearchEvent::Failed { seq, error } => {
                if self.active_seq() == Some(seq) {
                    self.state = ViewState::Idle {
                        last_error: Some(error),
                    };
                }
            }
            SearchEvent::Back => {
                self.state = ViewState::Idle { last_error: None };
            }
        }
    }
}
