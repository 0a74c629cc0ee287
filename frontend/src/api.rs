//! Typed client for the backend endpoints.
//!
//! All three networked calls share one response contract: a success body is
//! parsed as JSON and returned as-is, a failure collapses into
//! `ApiError::Request` carrying the response body text when there is one and
//! a generic message otherwise. The only local check is the `.zip` filename
//! validation, which fails with `ApiError::Validation` before any request is
//! made.

use std::fmt;

use common::model::upload::{is_zip_filename, HistoryDetail, HistoryEntry, UploadResult};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Local, pre-network, user-correctable (wrong file type).
    Validation(String),
    /// Network or backend failure, with the best available message.
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(message) | ApiError::Request(message) => f.write_str(message),
        }
    }
}

/// Uploads one zipped script and returns the generated breakdown.
pub async fn upload_script(file: File) -> Result<UploadResult, ApiError> {
    if !is_zip_filename(&file.name()) {
        return Err(ApiError::Validation(
            "Only ZIP archives are supported.".to_string(),
        ));
    }

    let form = FormData::new()
        .map_err(|_| ApiError::Request("Could not build the upload form.".to_string()))?;
    form.append_with_blob("file", &file)
        .map_err(|_| ApiError::Request("Could not attach the file.".to_string()))?;

    let response = Request::post("/upload")
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    parse_response(response).await
}

/// All past uploads, newest first.
pub async fn get_history() -> Result<Vec<HistoryEntry>, ApiError> {
    get_json("/history").await
}

/// The stored breakdown for one past upload.
pub async fn get_result(id: i64) -> Result<HistoryDetail, ApiError> {
    get_json(&format!("/result/{}", id)).await
}

/// Link to the downloadable result file. Pure; no request is made.
pub fn download_url(id: i64) -> String {
    format!("/download/{}", id)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    parse_response(response).await
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Request(error_message(response).await));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))
}

async fn error_message(response: Response) -> String {
    match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => "Network error".to_string(),
    }
}
