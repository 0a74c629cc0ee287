//! State for the history panel: two independent machines, one for the list
//! and one for the lazily loaded detail of the selected entry.
//!
//! Detail selection is last-writer-wins. Requests cannot be cancelled, so
//! every selection gets a fresh sequence token and completions carrying a
//! stale token are dropped — including stale failures, which must not smear
//! an error over a newer selection.

use common::model::upload::{HistoryDetail, HistoryEntry};

/// List loading. Loaded once on first display; a failure stays until the
/// user navigates away (no automatic retry).
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    NotLoaded,
    Loading,
    Loaded(Vec<HistoryEntry>),
    LoadFailed(String),
}

impl ListState {
    /// `NotLoaded` → `Loading`. Returns `false` when a load already ran.
    pub fn begin_load(&mut self) -> bool {
        if !matches!(self, ListState::NotLoaded) {
            return false;
        }
        *self = ListState::Loading;
        true
    }

    /// `Loading` → `Loaded`/`LoadFailed`; ignored in any other state.
    pub fn finish_load(&mut self, outcome: Result<Vec<HistoryEntry>, String>) {
        if !matches!(self, ListState::Loading) {
            return;
        }
        *self = match outcome {
            Ok(entries) => ListState::Loaded(entries),
            Err(message) => ListState::LoadFailed(message),
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    NoneSelected,
    Loading { id: i64 },
    Selected(HistoryDetail),
    SelectFailed(String),
}

/// Detail loading with the last-writer-wins guard.
pub struct DetailMachine {
    state: DetailState,
    next_seq: u64,
    /// Token of the in-flight load, if any. Completions with any other token
    /// are stale and get dropped.
    pending_seq: Option<u64>,
}

impl DetailMachine {
    pub fn new() -> Self {
        DetailMachine {
            state: DetailState::NoneSelected,
            next_seq: 0,
            pending_seq: None,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Starts loading a detail, superseding any in-flight load, and returns
    /// the token its completion must present.
    pub fn begin_select(&mut self, id: i64) -> u64 {
        self.next_seq += 1;
        self.pending_seq = Some(self.next_seq);
        self.state = DetailState::Loading { id };
        self.next_seq
    }

    /// Applies a completion if it belongs to the newest selection. Returns
    /// whether the state changed.
    pub fn finish_select(&mut self, seq: u64, outcome: Result<HistoryDetail, String>) -> bool {
        if self.pending_seq != Some(seq) {
            return false;
        }
        self.pending_seq = None;
        self.state = match outcome {
            Ok(detail) => DetailState::Selected(detail),
            Err(message) => DetailState::SelectFailed(message),
        };
        true
    }
}

pub struct HistoryComponent {
    pub list: ListState,
    pub detail: DetailMachine,
}

impl HistoryComponent {
    pub fn new() -> Self {
        HistoryComponent {
            list: ListState::NotLoaded,
            detail: DetailMachine::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, filename: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            filename: filename.to_string(),
            created_at: "2026-08-23T10:00:00.000Z".to_string(),
        }
    }

    fn detail(id: i64, filename: &str) -> HistoryDetail {
        HistoryDetail {
            id,
            filename: filename.to_string(),
            created_at: "2026-08-23T10:00:00.000Z".to_string(),
            data: Vec::new(),
            download_url: format!("/download/{}", id),
        }
    }

    #[test]
    fn list_loads_exactly_once() {
        let mut list = ListState::NotLoaded;
        assert!(list.begin_load());
        assert!(!list.begin_load());
        list.finish_load(Ok(vec![entry(1, "a.zip")]));
        assert!(matches!(&list, ListState::Loaded(entries) if entries.len() == 1));
        assert!(!list.begin_load());
    }

    #[test]
    fn list_failure_is_sticky() {
        let mut list = ListState::NotLoaded;
        list.begin_load();
        list.finish_load(Err("history is down".to_string()));
        assert_eq!(list, ListState::LoadFailed("history is down".to_string()));
        // No spinner-driven retry loop.
        assert!(!list.begin_load());
    }

    #[test]
    fn selecting_replaces_the_previous_detail() {
        let mut machine = DetailMachine::new();
        let seq_a = machine.begin_select(1);
        assert!(machine.finish_select(seq_a, Ok(detail(1, "a.zip"))));

        let seq_b = machine.begin_select(2);
        assert!(machine.finish_select(seq_b, Ok(detail(2, "b.zip"))));
        assert!(matches!(machine.state(), DetailState::Selected(d) if d.id == 2));
    }

    #[test]
    fn last_selection_wins_over_an_out_of_order_response() {
        let mut machine = DetailMachine::new();
        let seq_a = machine.begin_select(1);
        let seq_b = machine.begin_select(2);

        // B's response arrives first and is applied.
        assert!(machine.finish_select(seq_b, Ok(detail(2, "b.zip"))));
        // A's late response must not overwrite the newer selection.
        assert!(!machine.finish_select(seq_a, Ok(detail(1, "a.zip"))));
        assert!(matches!(machine.state(), DetailState::Selected(d) if d.id == 2));
    }

    #[test]
    fn stale_failure_does_not_leak_into_a_newer_selection() {
        let mut machine = DetailMachine::new();
        let seq_a = machine.begin_select(1);
        let seq_b = machine.begin_select(2);

        // The abandoned first request fails after the second one started.
        assert!(!machine.finish_select(seq_a, Err("Upload not found.".to_string())));
        assert!(matches!(machine.state(), DetailState::Loading { id: 2 }));

        assert!(machine.finish_select(seq_b, Ok(detail(2, "b.zip"))));
        assert!(matches!(machine.state(), DetailState::Selected(d) if d.id == 2));
    }

    #[test]
    fn failure_of_the_current_selection_is_surfaced() {
        let mut machine = DetailMachine::new();
        let seq = machine.begin_select(9);
        assert!(machine.finish_select(seq, Err("Upload not found.".to_string())));
        assert_eq!(
            machine.state(),
            &DetailState::SelectFailed("Upload not found.".to_string())
        );
    }
}
