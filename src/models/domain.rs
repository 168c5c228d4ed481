use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::error::SearchError;
use crate::models::requests::MultiValue;

/// Set of free-text tokens (hobbies, qualities)
pub type TokenSet = BTreeSet<String>;

/// Candidate profile held by the profile store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub job: String,
    #[serde(default, deserialize_with = "deserialize_tokens")]
    pub hobbies: TokenSet,
    pub age: u32,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_tokens")]
    pub qualities: TokenSet,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub gender: String,
}

/// Null text columns load as empty strings
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Token columns may be stored as "a, b" or ["a", "b"]
fn deserialize_tokens<'de, D>(deserializer: D) -> Result<TokenSet, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<MultiValue>::deserialize(deserializer)?
        .map(|value| value.tokens().map(str::to_string).collect())
        .unwrap_or_default())
}

/// Inclusive age range, always `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    min: i64,
    max: i64,
}

impl AgeRange {
    pub fn new(min: i64, max: i64) -> Result<Self, SearchError> {
        if min > max {
            return Err(SearchError::InvalidRange(format!(
                "min ({}) is greater than max ({})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        let age = i64::from(age);
        self.min <= age && age <= self.max
    }
}

/// Canonical, typed filter for one search request
///
/// Text and token values are stored trimmed and lowercased. A field is
/// unconstrained exactly when it is `None` or an empty set; blank input never
/// survives construction, so there is no other "match anything" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    job_query: Option<String>,
    hobby_query: TokenSet,
    age_range: Option<AgeRange>,
    location_query: Option<String>,
    qualities_query: TokenSet,
    gender_query: Option<String>,
}

impl SearchCriteria {
    /// Criteria with every field unconstrained (browse all)
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::default()
    }

    pub fn job_query(&self) -> Option<&str> {
        self.job_query.as_deref()
    }

    pub fn hobby_query(&self) -> &TokenSet {
        &self.hobby_query
    }

    pub fn age_range(&self) -> Option<AgeRange> {
        self.age_range
    }

    pub fn location_query(&self) -> Option<&str> {
        self.location_query.as_deref()
    }

    pub fn qualities_query(&self) -> &TokenSet {
        &self.qualities_query
    }

    pub fn gender_query(&self) -> Option<&str> {
        self.gender_query.as_deref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.constrained_fields().is_empty()
    }

    /// Names of the fields carrying a constraint, in payload order
    pub fn constrained_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.job_query.is_some() {
            fields.push("job_query");
        }
        if !self.hobby_query.is_empty() {
            fields.push("hobby_query");
        }
        if self.age_range.is_some() {
            fields.push("age_range");
        }
        if self.location_query.is_some() {
            fields.push("location_query");
        }
        if !self.qualities_query.is_empty() {
            fields.push("qualities_query");
        }
        if self.gender_query.is_some() {
            fields.push("gender_query");
        }
        fields
    }
}

/// Builder for [`SearchCriteria`]; blank values leave the field unconstrained
#[derive(Debug, Default)]
pub struct SearchCriteriaBuilder {
    criteria: SearchCriteria,
}

impl SearchCriteriaBuilder {
    pub fn job(mut self, query: impl AsRef<str>) -> Self {
        self.criteria.job_query = fold_text(query.as_ref());
        self
    }

    pub fn hobbies<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.criteria.hobby_query = fold_tokens(tokens);
        self
    }

    pub fn age_range(mut self, range: AgeRange) -> Self {
        self.criteria.age_range = Some(range);
        self
    }

    pub fn location(mut self, query: impl AsRef<str>) -> Self {
        self.criteria.location_query = fold_text(query.as_ref());
        self
    }

    pub fn qualities<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.criteria.qualities_query = fold_tokens(tokens);
        self
    }

    pub fn gender(mut self, query: impl AsRef<str>) -> Self {
        self.criteria.gender_query = fold_text(query.as_ref());
        self
    }

    pub fn build(self) -> SearchCriteria {
        self.criteria
    }
}

/// Trim and lowercase; `None` when nothing is left
#[inline]
pub fn fold_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(fold_case(trimmed))
    }
}

/// Lowercase one char at a time, so a folded substring stays a substring
/// of the folded whole (`str::to_lowercase` special-cases final sigma)
pub fn fold_case(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

fn fold_tokens<I, S>(tokens: I) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| fold_text(token.as_ref()))
        .collect()
}

/// Ordered matches of one search, in store order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub results: Vec<Profile>,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_range_rejects_inverted_bounds() {
        let err = AgeRange::new(30, 20).unwrap_err();
        assert!(matches!(err, SearchError::InvalidRange(_)));
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let range = AgeRange::new(25, 35).unwrap();
        assert!(range.contains(25));
        assert!(range.contains(35));
        assert!(!range.contains(24));
        assert!(!range.contains(36));
    }

    #[test]
    fn test_builder_folds_and_drops_blanks() {
        let criteria = SearchCriteria::builder()
            .job("  Engineer ")
            .hobbies(["Chess", " ", "chess", "Reading "])
            .location("   ")
            .gender("F")
            .build();

        assert_eq!(criteria.job_query(), Some("engineer"));
        assert_eq!(criteria.location_query(), None);
        assert_eq!(criteria.gender_query(), Some("f"));
        assert_eq!(
            criteria.hobby_query().iter().collect::<Vec<_>>(),
            vec!["chess", "reading"]
        );
        assert_eq!(
            criteria.constrained_fields(),
            vec!["job_query", "hobby_query", "gender_query"]
        );
    }

    #[test]
    fn test_profile_loads_delimited_tokens_and_null_text() {
        let profile: Profile = serde_json::from_str(
            r#"{"job": null, "hobbies": "chess, reading,", "age": 29,
                "location": "Berlin", "qualities": ["kind"], "gender": "F",
                "salary": 50000}"#,
        )
        .unwrap();

        assert_eq!(profile.job, "");
        assert_eq!(profile.hobbies.len(), 2);
        assert!(profile.hobbies.contains("reading"));
        assert!(profile.qualities.contains("kind"));
        assert_eq!(profile.name, None);
    }

    #[test]
    fn test_search_result_serializes_as_results_list() {
        let json = serde_json::to_value(SearchResult::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "results": [] }));
    }
}
