use crate::categories::Category;
use crate::config::Config;
use crate::errors::FetchError;
use crate::models::{DailyRecord, LatestEntry, UpstreamRecord};
use crate::normalizer::normalize;
use futures::future::try_join_all;

/// The time-series view shows at most the trailing 14 days.
const SERIES_WINDOW: usize = 14;

/// Issues requests against the per-category endpoints of the open-data API.
/// One shared client; no retries, no timeouts beyond the client defaults.
#[derive(Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl Fetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Trailing 14-day series for one category (all records if fewer exist).
    pub async fn fetch_category(&self, category: Category) -> Result<Vec<DailyRecord>, FetchError> {
        let records = self.get_records(category).await?;
        let start = records.len().saturating_sub(SERIES_WINDOW);
        Ok(normalize(&records[start..]))
    }

    /// Latest count for every category, requested concurrently and joined
    /// all-or-nothing: the first rejection fails the whole batch and any
    /// remaining results are discarded. Success yields exactly six entries
    /// in display order.
    pub async fn fetch_latest(&self) -> Result<Vec<LatestEntry>, FetchError> {
        try_join_all(
            Category::ALL
                .into_iter()
                .map(|category| self.latest_entry(category)),
        )
        .await
    }

    async fn latest_entry(&self, category: Category) -> Result<LatestEntry, FetchError> {
        let records = self.get_records(category).await?;
        let tail = records.len().saturating_sub(1);
        let count = normalize(&records[tail..])
            .into_iter()
            .next()
            .map(|record| record.count)
            .ok_or_else(|| FetchError::Transport {
                detail: format!("empty payload for {category}"),
            })?;
        Ok(LatestEntry { category, count })
    }

    async fn get_records(&self, category: Category) -> Result<Vec<UpstreamRecord>, FetchError> {
        let url = format!("{}/{}", self.api_base, category.slug());
        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        Ok(response.json::<Vec<UpstreamRecord>>().await?)
    }
}
