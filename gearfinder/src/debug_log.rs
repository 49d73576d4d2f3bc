//! Per-request debug record: one timestamped JSON file with the query and the raw
//! model text. Append-only, never read back by the system.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// What gets persisted: the user query and the raw (unparsed) model text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DebugRecord {
    pub query: String,
    pub response: String,
}

/// Filename-safe timestamp: RFC 3339 with `:` and `.` stripped.
pub fn timestamp_slug(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "")
}

/// Writes the record to `<dir>/results_<timestamp>.json`.
///
/// The directory is created if absent; an "already exists" failure is tolerated,
/// any other filesystem error aborts the request.
pub async fn write_record(dir: &Path, record: &DebugRecord) -> Result<PathBuf, RelayError> {
    match tokio::fs::create_dir(dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
        Err(e) => return Err(RelayError::DebugLog(e)),
    }

    let path = dir.join(format!("results_{}.json", timestamp_slug(Utc::now())));
    let json = serde_json::to_vec_pretty(record).map_err(std::io::Error::other)?;
    tokio::fs::write(&path, json).await?;
    Ok(path)
}
