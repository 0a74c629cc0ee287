use common::model::upload::UploadResult;

pub enum Msg {
    /// A file was picked via the input or dropped onto the panel.
    FileSelected(web_sys::File),
    /// Drop-target hover changed (presentational only).
    DragState(bool),
    /// The upload request completed.
    Finished(Result<UploadResult, String>),
    /// Switch the result view between table and canvas.
    ToggleView,
    /// Discard the current result and start over.
    Reset,
}
