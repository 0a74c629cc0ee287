//! Handler for `GET /result/{id}`: the stored breakdown for one upload.

use actix_web::{web, HttpResponse, Responder};
use common::model::record::Record;
use common::model::upload::HistoryDetail;
use log::{error, warn};

use crate::config::AppConfig;
use crate::db;

pub async fn process(id: web::Path<i64>, config: web::Data<AppConfig>) -> impl Responder {
    match fetch_detail(*id, &config) {
        Ok(Some(detail)) => HttpResponse::Ok().json(detail),
        Ok(None) => HttpResponse::NotFound().body("Upload not found."),
        Err(e) => {
            error!("result lookup failed for id {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving result: {}", e))
        }
    }
}

fn fetch_detail(id: i64, config: &AppConfig) -> Result<Option<HistoryDetail>, String> {
    let conn = db::open(&config.db_path).map_err(|e| e.to_string())?;
    let row = match db::get_upload(&conn, id).map_err(|e| e.to_string())? {
        Some(row) => row,
        None => return Ok(None),
    };

    // A corrupt stored payload degrades to an empty table rather than a 5xx.
    let data: Vec<Record> = serde_json::from_str(&row.data_json).unwrap_or_else(|e| {
        warn!("stored rows for upload {} are unreadable: {}", id, e);
        Vec::new()
    });

    Ok(Some(HistoryDetail {
        id: row.id,
        filename: row.filename,
        created_at: row.created_at,
        data,
        download_url: format!("/download/{}", row.id),
    }))
}
