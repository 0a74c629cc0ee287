//! Handler for `GET /history`: all past uploads, newest first.

use actix_web::{web, HttpResponse, Responder};
use common::model::upload::HistoryEntry;
use log::error;

use crate::config::AppConfig;
use crate::db;

pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match list_history(&config) {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => {
            error!("history query failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error listing uploads: {}", e))
        }
    }
}

fn list_history(config: &AppConfig) -> Result<Vec<HistoryEntry>, String> {
    let conn = db::open(&config.db_path).map_err(|e| e.to_string())?;
    db::list_uploads(&conn).map_err(|e| e.to_string())
}
