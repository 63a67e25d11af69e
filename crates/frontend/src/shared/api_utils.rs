//! URL helpers for the fixture datasets.

use contracts::shared::datasets::DatasetKind;

/// Path prefix under which the backend serves fixtures
pub const DATA_PREFIX: &str = "/data";

/// Origin the frontend was served from, e.g. "http://localhost:3000".
///
/// Empty when no window exists, which keeps URLs relative.
pub fn data_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build the URL of a dataset's JSON fixture against `base`
///
/// # Example
/// ```rust
/// use contracts::shared::datasets::DatasetKind;
/// use frontend::shared::api_utils::dataset_url;
/// assert_eq!(dataset_url("", DatasetKind::Pages), "/data/pages.json");
/// ```
pub fn dataset_url(base: &str, kind: DatasetKind) -> String {
    format!(
        "{}{}/{}",
        base.trim_end_matches('/'),
        DATA_PREFIX,
        kind.file_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_url() {
        assert_eq!(
            dataset_url("http://localhost:3000/", DatasetKind::Dashboard),
            "http://localhost:3000/data/dashboard.json"
        );
        assert_eq!(
            dataset_url("", DatasetKind::FormReference),
            "/data/form-reference.json"
        );
    }
}
