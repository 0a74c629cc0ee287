//! Handler for `POST /upload`.
//!
//! Accepts a multipart form with a single `file` field holding a zipped
//! script. The archive is stored under a fresh UUID directory, extracted,
//! run through the analysis, and the resulting table is persisted (as JSON in
//! the database, as CSV on disk for later download).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::upload::{is_zip_filename, UploadResult};
use futures_util::StreamExt;
use log::{info, warn};
use uuid::Uuid;
use zip::ZipArchive;

use crate::config::AppConfig;
use crate::{analysis, db};

pub async fn process(payload: Multipart, config: web::Data<AppConfig>) -> impl Responder {
    match handle_upload(payload, &config).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            warn!("upload rejected: {}", e);
            HttpResponse::BadRequest().body(format!("Error: {}", e))
        }
    }
}

async fn handle_upload(
    mut payload: Multipart,
    config: &AppConfig,
) -> Result<UploadResult, Box<dyn std::error::Error>> {
    let mut saved: Option<(String, PathBuf)> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_else(|| "uploaded.zip".to_string());
        // Strip any client-provided path components.
        let filename = filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or("uploaded.zip")
            .to_string();

        if !is_zip_filename(&filename) {
            return Err("Only ZIP archives are supported.".into());
        }

        let uid = Uuid::new_v4().to_string();
        let upload_dir = config.upload_root.join(&uid);
        fs::create_dir_all(&upload_dir)?;

        let archive_path = upload_dir.join(&filename);
        let mut writer = BufWriter::new(File::create(&archive_path)?);
        while let Some(chunk) = field.next().await {
            writer.write_all(&chunk?)?;
        }
        writer.flush()?;

        saved = Some((filename, upload_dir));
    }

    let (filename, upload_dir) = saved.ok_or("Missing file")?;
    let archive_path = upload_dir.join(&filename);

    let extract_dir = upload_dir.join("extracted");
    fs::create_dir_all(&extract_dir)?;
    if let Err(e) = extract_archive(&archive_path, &extract_dir) {
        info!("discarding unreadable archive {:?}: {}", archive_path, e);
        let _ = fs::remove_dir_all(&upload_dir);
        return Err("Invalid ZIP archive.".into());
    }

    let records = analysis::process_script(&extract_dir);

    fs::create_dir_all(&config.result_root)?;
    let uid = upload_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("result");
    let result_path = config.result_root.join(format!("{}.csv", uid));
    analysis::write_csv(&records, &result_path)?;

    let data_json = serde_json::to_string(&records)?;
    let conn = db::open(&config.db_path)?;
    let id = db::insert_upload(
        &conn,
        &filename,
        &result_path.to_string_lossy(),
        &data_json,
    )?;
    info!("stored upload {} ({}, {} scenes)", id, filename, records.len());

    Ok(UploadResult { id, data: records })
}

fn extract_archive(
    archive_path: &std::path::Path,
    extract_dir: &std::path::Path,
) -> Result<(), zip::result::ZipError> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    archive.extract(extract_dir)
}
