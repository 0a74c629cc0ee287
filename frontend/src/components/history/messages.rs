use common::model::upload::{HistoryDetail, HistoryEntry};

pub enum Msg {
    /// The history list request completed.
    ListLoaded(Result<Vec<HistoryEntry>, String>),
    /// An entry was clicked.
    Select(i64),
    /// A detail request completed; `seq` ties it to the selection that
    /// started it so stale responses can be dropped.
    DetailLoaded {
        seq: u64,
        outcome: Result<HistoryDetail, String>,
    },
}
