//! Upload service: the HTTP surface for submitting script archives and
//! browsing past analyses.
//!
//! Registered routes:
//! - `POST /upload` — multipart upload of one zipped script; responds with
//!   the new upload id and the generated scene table.
//! - `GET /history` — metadata of all past uploads, newest first.
//! - `GET /result/{id}` — the stored table plus a download link for one
//!   upload; 404 when the id is unknown.
//! - `GET /download/{id}` — the generated CSV as a file attachment.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod download;
mod history;
mod result;
mod upload;

/// Configures and returns the Actix scope for the upload routes.
///
/// The paths are served from the root (no `/api` prefix) to stay compatible
/// with the links the frontend builds, `"/download/{id}"` in particular.
pub fn configure_routes() -> Scope {
    scope("")
        .route("/upload", post().to(upload::process))
        .route("/history", get().to(history::process))
        .route("/result/{id}", get().to(result::process))
        .route("/download/{id}", get().to(download::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::upload::{HistoryDetail, HistoryEntry, UploadResult};

    use crate::config::AppConfig;

    const BOUNDARY: &str = "----breakdown-test-boundary";

    fn test_config(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            db_path: dir.path().join("test.sqlite"),
            upload_root: dir.path().join("uploads"),
            result_root: dir.path().join("results"),
        }
    }

    fn multipart_file(filename: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn sample_zip() -> Vec<u8> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            writer.start_file("script.txt", options).unwrap();
            writer.write_all(b"INT. HOUSE - DAY\n").unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    macro_rules! test_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config.clone()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn rejects_non_zip_filename_and_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let app = test_app!(config);

        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_file("notes.txt", b"not an archive"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let entries: Vec<HistoryEntry> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/history").to_request())
                .await;
        assert!(entries.is_empty());
    }

    #[actix_web::test]
    async fn rejects_corrupt_archive() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let app = test_app!(config);

        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_file("script.zip", b"this is not zip data"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("Invalid ZIP archive."), "body: {}", text);
    }

    #[actix_web::test]
    async fn upload_result_and_download_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let app = test_app!(config);

        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_file("script.zip", &sample_zip()))
            .to_request();
        let result: UploadResult = test::call_and_read_body_json(&app, req).await;
        assert!(result.id >= 1);
        assert!(!result.data.is_empty());
        assert!(result.data[0].get("scene_number").is_some());
        assert!(result.data[0].get("location").is_some());

        let detail: HistoryDetail = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri(&format!("/result/{}", result.id))
                .to_request(),
        )
        .await;
        assert_eq!(detail.id, result.id);
        assert_eq!(detail.filename, "script.zip");
        assert_eq!(detail.data, result.data);
        assert_eq!(detail.download_url, format!("/download/{}", result.id));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/download/{}", result.id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(body.starts_with(b"scene_number"));
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let app = test_app!(config);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/result/999").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/download/999").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn history_lists_newest_upload_first() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let app = test_app!(config);

        let mut last_id = 0;
        for name in ["first.zip", "second.zip"] {
            let req = test::TestRequest::post()
                .uri("/upload")
                .insert_header((
                    "content-type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                ))
                .set_payload(multipart_file(name, &sample_zip()))
                .to_request();
            let result: UploadResult = test::call_and_read_body_json(&app, req).await;
            last_id = result.id;
        }

        let entries: Vec<HistoryEntry> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/history").to_request())
                .await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, last_id);
        assert_eq!(entries[0].filename, "second.zip");
    }
}
