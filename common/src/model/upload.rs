//! Wire types for the upload and history endpoints, shared verbatim between
//! the actix backend and the Yew frontend.

use serde::{Deserialize, Serialize};

use crate::model::record::Record;

/// Response to a successful `POST /upload`: the new row id plus the scene
/// breakdown produced by the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub id: i64,
    pub data: Vec<Record>,
}

/// One entry of `GET /history`: metadata only, no rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub filename: String,
    /// ISO-8601 UTC timestamp, as produced by the backend.
    pub created_at: String,
}

/// Full result of `GET /result/{id}`: the history metadata plus the stored
/// rows and a ready-to-use download link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDetail {
    pub id: i64,
    pub filename: String,
    pub created_at: String,
    pub data: Vec<Record>,
    pub download_url: String,
}

/// Case-insensitive `.zip` extension check.
///
/// This is the only validation applied before an upload leaves the browser;
/// the backend applies the same check and everything beyond the filename is
/// its job.
pub fn is_zip_filename(name: &str) -> bool {
    let name = name.trim();
    name.len() > ".zip".len() && name.to_ascii_lowercase().ends_with(".zip")
}
