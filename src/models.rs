use crate::categories::Category;
use serde::{Deserialize, Serialize};

/// One upstream record as delivered by the open-data API: Japanese field
/// names, values kept as raw JSON until the normalizer renames them.
pub type UpstreamRecord = serde_json::Map<String, serde_json::Value>;

/// One normalized data point. Counts stay strings: upstream values may carry
/// leading zeros or placeholder text that is not safe to parse as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub count: String,
}

/// Latest count for one category, shown in the summary header and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestEntry {
    pub category: Category,
    pub count: String,
}

impl LatestEntry {
    pub fn zero(category: Category) -> Self {
        Self {
            category,
            count: "0".to_string(),
        }
    }
}

/// Payload of `GET /api/series`. On fetch failure the fields hold the
/// default category and dataset and `error_message` is non-empty.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub category: Category,
    pub data: Vec<DailyRecord>,
    pub error_message: String,
}

/// Payload of `GET /api/latest`. Always exactly six entries in display
/// order; zero-valued when the batch fetch failed.
#[derive(Debug, Serialize, Deserialize)]
pub struct LatestResponse {
    pub data: Vec<LatestEntry>,
    pub error_message: String,
}
