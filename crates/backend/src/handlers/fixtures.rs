use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::datasets::DatasetKind;
use std::path::PathBuf;
use std::sync::Arc;

/// Where fixture files are read from
#[derive(Debug, Clone)]
pub struct FixtureState {
    pub dir: Arc<PathBuf>,
}

impl FixtureState {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir: Arc::new(dir) }
    }
}

/// GET /data/:file
///
/// `file` is `<kind>.json`; unknown kinds and missing files are 404,
/// unreadable or malformed files 500.
pub async fn get_dataset(
    State(state): State<FixtureState>,
    Path(file): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let kind: DatasetKind = file.parse().map_err(|e| {
        tracing::warn!("unknown fixture requested: {}", e);
        StatusCode::NOT_FOUND
    })?;

    let path = state.dir.join(kind.file_name());
    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("fixture {} missing at {}", kind, path.display());
            return Err(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            tracing::error!("failed to read fixture {}: {}", path.display(), e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
        tracing::error!("fixture {} is not valid JSON: {}", path.display(), e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!("served fixture {} ({} bytes)", kind, contents.len());
    Ok(Json(value))
}
