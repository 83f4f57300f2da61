use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of category identifiers understood by the open-data API.
/// `ALL` fixes the display order used for the summary header and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PositiveCases,
    SevereCases,
    DeathCases,
    RecoveryCases,
    HospitalizationCases,
    TestCases,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::PositiveCases,
        Category::SevereCases,
        Category::DeathCases,
        Category::RecoveryCases,
        Category::HospitalizationCases,
        Category::TestCases,
    ];

    /// Endpoint path segment, also the value used in query strings and JSON.
    pub fn slug(self) -> &'static str {
        match self {
            Category::PositiveCases => "positive-cases",
            Category::SevereCases => "severe-cases",
            Category::DeathCases => "death-cases",
            Category::RecoveryCases => "recovery-cases",
            Category::HospitalizationCases => "hospitalization-cases",
            Category::TestCases => "test-cases",
        }
    }

    /// Display label for the switcher buttons and summary cards.
    pub fn label(self) -> &'static str {
        match self {
            Category::PositiveCases => "陽性者数",
            Category::SevereCases => "重症者数",
            Category::DeathCases => "死亡者数",
            Category::RecoveryCases => "退院・療養解除",
            Category::HospitalizationCases => "入院治療を要する者",
            Category::TestCases => "PCR検査実施件数",
        }
    }

    /// The field name the upstream API uses for this category's count.
    /// Only one of these appears per record, determined by which endpoint
    /// supplied the response.
    pub fn count_key(self) -> &'static str {
        match self {
            Category::PositiveCases => "PCR 検査陽性者数(単日)",
            Category::SevereCases => "重症者数",
            Category::DeathCases => "死亡者数",
            Category::RecoveryCases => "退院、療養解除となった者",
            Category::HospitalizationCases => "入院治療を要する者",
            Category::TestCases => "PCR 検査実施件数(単日)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert!("vaccinations".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn display_order_starts_with_positive_cases() {
        assert_eq!(Category::ALL[0], Category::PositiveCases);
        assert_eq!(Category::ALL.len(), 6);
    }

    #[test]
    fn serde_uses_kebab_case_slugs() {
        let json = serde_json::to_string(&Category::DeathCases).unwrap();
        assert_eq!(json, "\"death-cases\"");
        let back: Category = serde_json::from_str("\"test-cases\"").unwrap();
        assert_eq!(back, Category::TestCases);
    }
}
