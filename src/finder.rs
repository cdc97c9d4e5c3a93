// File: src/finder.rs
//! Query orchestration: the single entry point used by front-ends.
//!
//! With a credential the request goes builder -> relay -> envelope parser ->
//! normalizer. Without one it is answered from the sample set. A failed live
//! call is returned as-is and never replaced by sample data.
use crate::client::RelayClient;
use crate::config::Config;
use crate::error::FinderError;
use crate::model::envelope::parse_envelope;
use crate::model::normalize::normalize_all;
use crate::model::{SearchFilters, UnifiedRecord};
use crate::query::{Endpoints, build_query};
use crate::sample;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Sample,
}

/// One page of normalized records plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub records: Vec<UnifiedRecord>,
    pub source: DataSource,
}

#[derive(Clone, Debug)]
pub struct Finder {
    client: RelayClient,
    endpoints: Endpoints,
    origin: String,
    // Fixed evaluation date; `None` means the local date at call time.
    today: Option<NaiveDate>,
}

impl Finder {
    pub fn new(
        client: RelayClient,
        endpoints: Endpoints,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoints,
            origin: origin.into(),
            today: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FinderError> {
        let client = RelayClient::new(&config.relay_url, &config.user_agent)?;
        Ok(Self::new(
            client,
            config.endpoints(),
            config.upstream_origin.clone(),
        ))
    }

    /// Pins the date used for deadline evaluation.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Fetches page `page_index` (1-based) for `filters`.
    ///
    /// An empty `credential` selects the sample dataset.
    pub async fn fetch_page(
        &self,
        filters: &SearchFilters,
        page_index: u32,
        credential: &str,
    ) -> Result<Fetched, FinderError> {
        filters.validate()?;
        if page_index == 0 {
            return Err(FinderError::Configuration(
                "page index starts at 1".to_string(),
            ));
        }

        if credential.trim().is_empty() {
            log::info!("No API key configured; serving sample {} data", filters.kind);
            return Ok(Fetched {
                records: sample::sample_page(filters, page_index, &self.origin, self.today()),
                source: DataSource::Sample,
            });
        }

        let query = build_query(filters, page_index, credential)?;
        let target = query.to_url(&self.endpoints)?;
        log::debug!("Fetching {}", query.redacted(&self.endpoints));

        let body = self.client.fetch_text(target.as_str()).await?;
        let raws = parse_envelope(&body, filters.kind)?;
        log::debug!("Page {} returned {} {} records", page_index, raws.len(), filters.kind);

        Ok(Fetched {
            records: normalize_all(&raws, &self.origin, self.today()),
            source: DataSource::Live,
        })
    }
}
