//! Dataset retrieval with fallback.
//!
//! Each public read performs exactly one fetch. Any failure is logged and
//! replaced by the built-in dataset of the same shape, so callers always get
//! data and never see an error.

use std::sync::Arc;

use contracts::dashboards::d100_overview::DashboardSnapshot;
use contracts::domain::a001_page::{FormReferenceData, PageRecord, PagesResponse};
use contracts::shared::datasets::DatasetKind;
use contracts::shared::fixtures;
use serde::de::DeserializeOwned;

use super::source::{DatasetSource, FetchError, HttpDatasetSource};

const DAYS_PER_WEEK: usize = 7;

#[derive(Clone)]
pub struct DataGateway {
    source: Arc<dyn DatasetSource>,
}

impl DataGateway {
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Gateway over the fixtures served next to the app
    pub fn http() -> Self {
        Self::new(HttpDatasetSource::from_location())
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: DatasetKind) -> Result<T, FetchError> {
        let value = self.source.fetch(kind).await?;
        serde_json::from_value(value).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    /// A snapshot without exactly one weekly point per day is malformed.
    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, FetchError> {
        let snapshot: DashboardSnapshot = self.fetch(DatasetKind::Dashboard).await?;
        let days = snapshot.sales_history.weekly.len();
        if days != DAYS_PER_WEEK {
            return Err(FetchError::Malformed(format!(
                "expected {} weekly points, got {}",
                DAYS_PER_WEEK, days
            )));
        }
        Ok(snapshot)
    }

    pub async fn fetch_pages(&self) -> Result<Vec<PageRecord>, FetchError> {
        self.fetch::<PagesResponse>(DatasetKind::Pages)
            .await
            .map(|response| response.pages)
    }

    pub async fn fetch_form_reference(&self) -> Result<FormReferenceData, FetchError> {
        self.fetch(DatasetKind::FormReference).await
    }

    pub async fn dashboard(&self) -> DashboardSnapshot {
        or_fallback(
            DatasetKind::Dashboard,
            self.fetch_dashboard().await,
            fixtures::fallback_dashboard,
        )
    }

    pub async fn pages(&self) -> Vec<PageRecord> {
        or_fallback(DatasetKind::Pages, self.fetch_pages().await, || {
            fixtures::fallback_pages().pages
        })
    }

    pub async fn form_reference(&self) -> FormReferenceData {
        or_fallback(
            DatasetKind::FormReference,
            self.fetch_form_reference().await,
            fixtures::fallback_form_reference,
        )
    }
}

fn or_fallback<T>(kind: DatasetKind, result: Result<T, FetchError>, fallback: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|err| {
        log::warn!("{} unavailable, using built-in data: {}", kind, err);
        fallback()
    })
}
