//! Handler for `GET /download/{id}`: streams the stored result table as an
//! attachment.

use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};
use log::error;

use crate::config::AppConfig;
use crate::db;

pub async fn process(
    id: web::Path<i64>,
    config: web::Data<AppConfig>,
    req: HttpRequest,
) -> HttpResponse {
    let row = match lookup(*id, &config) {
        Ok(Some(row)) => row,
        Ok(None) => return HttpResponse::NotFound().body("Upload not found."),
        Err(e) => {
            error!("download lookup failed for id {}: {}", id, e);
            return HttpResponse::ServiceUnavailable()
                .body(format!("Error retrieving result file: {}", e));
        }
    };

    let path = std::path::Path::new(&row.result_path);
    let download_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("result-{}.csv", row.id));

    match NamedFile::open(path) {
        Ok(file) => file
            .set_content_disposition(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(download_name)],
            })
            .into_response(&req),
        Err(_) => HttpResponse::NotFound().body("Result file missing."),
    }
}

fn lookup(id: i64, config: &AppConfig) -> Result<Option<db::StoredUpload>, String> {
    let conn = db::open(&config.db_path).map_err(|e| e.to_string())?;
    db::get_upload(&conn, id).map_err(|e| e.to_string())
}
