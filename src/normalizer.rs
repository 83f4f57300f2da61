use crate::categories::Category;
use crate::models::{DailyRecord, UpstreamRecord};
use serde_json::Value;

/// The upstream field name holding the record's calendar date.
const DATE_KEY: &str = "日付";

/// Reshape upstream records into `{date, count}` pairs.
///
/// Field mapping, not text substitution: the date key and whichever of the
/// six known count keys is present are looked up by name, so a field whose
/// *value* happens to match one of the Japanese literals is left alone.
/// Only one count key appears per record, determined by which category
/// endpoint supplied the response. Order and length are preserved; a record
/// missing a mapped key yields an empty string for that field, best effort.
pub fn normalize(raw: &[UpstreamRecord]) -> Vec<DailyRecord> {
    raw.iter()
        .map(|record| DailyRecord {
            date: field_text(record, DATE_KEY),
            count: count_text(record),
        })
        .collect()
}

fn count_text(record: &UpstreamRecord) -> String {
    Category::ALL
        .into_iter()
        .map(Category::count_key)
        .find(|key| record.contains_key(*key))
        .map(|key| field_text(record, key))
        .unwrap_or_default()
}

fn field_text(record: &UpstreamRecord, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<UpstreamRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn renames_date_and_positive_count_keys() {
        let raw = records(json!([
            {"日付": "2021-01-01", "PCR 検査陽性者数(単日)": "100"}
        ]));
        assert_eq!(
            normalize(&raw),
            vec![DailyRecord {
                date: "2021-01-01".to_string(),
                count: "100".to_string(),
            }]
        );
    }

    #[test]
    fn maps_each_category_count_key() {
        for category in Category::ALL {
            let raw = records(json!([
                {"日付": "2021-02-03", (category.count_key()): "42"}
            ]));
            let normalized = normalize(&raw);
            assert_eq!(normalized[0].count, "42", "key {}", category.count_key());
        }
    }

    #[test]
    fn preserves_order_and_length() {
        let raw = records(json!([
            {"日付": "2021-01-01", "重症者数": "1"},
            {"日付": "2021-01-02", "重症者数": "2"},
            {"日付": "2021-01-03", "重症者数": "3"}
        ]));
        let normalized = normalize(&raw);
        assert_eq!(normalized.len(), 3);
        let dates: Vec<&str> = normalized.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2021-01-01", "2021-01-02", "2021-01-03"]);
    }

    #[test]
    fn keeps_count_strings_verbatim() {
        let raw = records(json!([
            {"日付": "2021-01-01", "死亡者数": "007"}
        ]));
        assert_eq!(normalize(&raw)[0].count, "007");
    }

    #[test]
    fn stringifies_numeric_counts() {
        let raw = records(json!([
            {"日付": "2021-01-01", "入院治療を要する者": 3158}
        ]));
        assert_eq!(normalize(&raw)[0].count, "3158");
    }

    #[test]
    fn missing_keys_yield_empty_strings() {
        let raw = records(json!([{"備考": "調整中"}]));
        assert_eq!(
            normalize(&raw),
            vec![DailyRecord {
                date: String::new(),
                count: String::new(),
            }]
        );
    }

    #[test]
    fn ignores_literals_appearing_as_values() {
        // A value that textually matches a count key must not be renamed.
        let raw = records(json!([
            {"日付": "2021-01-01", "退院、療養解除となった者": "55", "備考": "重症者数"}
        ]));
        assert_eq!(normalize(&raw)[0].count, "55");
    }
}
