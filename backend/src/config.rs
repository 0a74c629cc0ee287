//! Runtime configuration resolved from environment variables.
//!
//! Every value has a development-friendly default so `cargo run` works with
//! no setup; deployments override via `BREAKDOWN_*` variables.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database file holding the uploads table.
    pub db_path: PathBuf,
    /// Directory where uploaded archives are stored and extracted.
    pub upload_root: PathBuf,
    /// Directory where generated result tables are written.
    pub result_root: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("BREAKDOWN_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        AppConfig {
            host: env::var("BREAKDOWN_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            db_path: env::var("BREAKDOWN_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("breakdown.sqlite")),
            upload_root: env::var("BREAKDOWN_UPLOAD_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            result_root: env::var("BREAKDOWN_RESULT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("results")),
        }
    }
}
