//! State for the upload panel.
//!
//! `UploadState` is the submission state machine proper; the transition
//! methods are pure so the machine can be tested without a DOM. The
//! component struct adds the presentational bits around it: the drag-hover
//! flag, the table/canvas switch for the fresh result, and the file input
//! node ref.

use common::model::upload::{is_zip_filename, UploadResult};
use yew::NodeRef;

/// Error shown when the picked file is not a ZIP archive. Cleared only by
/// the next valid action, never on its own.
pub const INVALID_FILE_TYPE: &str = "invalid file type";

/// Submission state machine. One file at a time; while `Submitting`, new
/// submissions are ignored and the submission surface is disabled.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    Validating,
    Submitting,
    Succeeded(UploadResult),
    Failed(String),
}

impl UploadState {
    pub fn can_submit(&self) -> bool {
        !matches!(self, UploadState::Validating | UploadState::Submitting)
    }

    /// `Idle`/`Failed`/`Succeeded` → `Validating`. Returns `false` (and
    /// leaves the state alone) when a submission is already in progress.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        *self = UploadState::Validating;
        true
    }

    /// Extension check. `Validating` → `Submitting` when the name passes,
    /// `Validating` → `Failed` otherwise. Returns `true` when the submission
    /// should proceed to the network.
    pub fn validate(&mut self, filename: &str) -> bool {
        if !matches!(self, UploadState::Validating) {
            return false;
        }
        if is_zip_filename(filename) {
            *self = UploadState::Submitting;
            true
        } else {
            *self = UploadState::Failed(INVALID_FILE_TYPE.to_string());
            false
        }
    }

    /// `Submitting` → `Succeeded`/`Failed`. A completion arriving in any
    /// other state is ignored.
    pub fn finish(&mut self, outcome: Result<UploadResult, String>) {
        if !matches!(self, UploadState::Submitting) {
            return;
        }
        *self = match outcome {
            Ok(result) => UploadState::Succeeded(result),
            Err(message) => UploadState::Failed(message),
        };
    }

    /// `Succeeded` → `Idle`, discarding the held result. Only available
    /// from `Succeeded`.
    pub fn reset(&mut self) {
        if matches!(self, UploadState::Succeeded(_)) {
            *self = UploadState::Idle;
        }
    }
}

/// How a successful result is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Canvas,
}

impl ViewMode {
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Table => ViewMode::Canvas,
            ViewMode::Canvas => ViewMode::Table,
        }
    }
}

pub struct UploadComponent {
    pub state: UploadState,
    pub view_mode: ViewMode,
    /// Purely presentational drop-target hover flag. Cleared on drop and on
    /// drag-leave, independent of the submission machine.
    pub drag_over: bool,
    pub file_input_ref: NodeRef,
}

impl UploadComponent {
    pub fn new() -> Self {
        UploadComponent {
            state: UploadState::Idle,
            view_mode: ViewMode::Table,
            drag_over: false,
            file_input_ref: NodeRef::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> UploadResult {
        use common::model::record::Record;
        UploadResult {
            id: 7,
            data: vec![Record::new()
                .with("scene_number", 1i64)
                .with("location", "INT. HOUSE")],
        }
    }

    #[test]
    fn happy_path_walks_all_four_states() {
        let mut state = UploadState::Idle;
        assert!(state.begin());
        assert_eq!(state, UploadState::Validating);
        assert!(state.validate("script.zip"));
        assert_eq!(state, UploadState::Submitting);

        let result = sample_result();
        state.finish(Ok(result.clone()));
        assert_eq!(state, UploadState::Succeeded(result));
    }

    #[test]
    fn non_zip_name_fails_validation_without_reaching_the_network() {
        let mut state = UploadState::Idle;
        assert!(state.begin());
        // `validate` returning false is the caller's signal to skip the request.
        assert!(!state.validate("notes.txt"));
        assert_eq!(state, UploadState::Failed(INVALID_FILE_TYPE.to_string()));
    }

    #[test]
    fn submissions_are_ignored_while_one_is_in_flight() {
        let mut state = UploadState::Submitting;
        assert!(!state.begin());
        assert_eq!(state, UploadState::Submitting);
    }

    #[test]
    fn a_failed_submission_can_be_retried() {
        let mut state = UploadState::Failed("boom".to_string());
        assert!(state.begin());
        assert!(state.validate("second-try.ZIP"));
        assert_eq!(state, UploadState::Submitting);
    }

    #[test]
    fn failure_carries_the_backend_message() {
        let mut state = UploadState::Submitting;
        state.finish(Err("Invalid ZIP archive.".to_string()));
        assert_eq!(state, UploadState::Failed("Invalid ZIP archive.".to_string()));
    }

    #[test]
    fn late_completions_outside_submitting_are_dropped() {
        let mut state = UploadState::Failed("boom".to_string());
        state.finish(Ok(sample_result()));
        assert_eq!(state, UploadState::Failed("boom".to_string()));
    }

    #[test]
    fn reset_only_applies_to_a_successful_state() {
        let mut state = UploadState::Succeeded(sample_result());
        state.reset();
        assert_eq!(state, UploadState::Idle);

        let mut state = UploadState::Failed("boom".to_string());
        state.reset();
        assert_eq!(state, UploadState::Failed("boom".to_string()));
    }

    #[test]
    fn view_mode_toggles_between_table_and_canvas() {
        assert_eq!(ViewMode::Table.toggled(), ViewMode::Canvas);
        assert_eq!(ViewMode::Canvas.toggled(), ViewMode::Table);
    }
}
