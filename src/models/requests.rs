use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw search payload as posted by the search form
///
/// Every key may be omitted or null. Unknown keys are rejected so a typo in a
/// filter name cannot silently widen the search.
///
/// ```json
/// {
///   "job_query": "engineer",
///   "hobby_query": "chess, reading",
///   "age_range": { "min": 25, "max": 35 },
///   "location_query": "berlin",
///   "qualities_query": ["kind", "honest"],
///   "gender_query": "f"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    #[validate(length(max = 256))]
    #[serde(default)]
    pub job_query: Option<String>,
    #[serde(default)]
    pub hobby_query: Option<MultiValue>,
    #[serde(default)]
    pub age_range: Option<AgeRangePayload>,
    #[validate(length(max = 256))]
    #[serde(default)]
    pub location_query: Option<String>,
    #[serde(default)]
    pub qualities_query: Option<MultiValue>,
    #[validate(length(max = 256))]
    #[serde(default)]
    pub gender_query: Option<String>,
}

/// Multi-valued filter: either `"a, b"` or `["a", "b"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultiValue {
    Delimited(String),
    List(Vec<String>),
}

impl MultiValue {
    /// Trimmed, non-empty tokens. List items are comma-split as well.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        let items: &[String] = match self {
            MultiValue::Delimited(value) => std::slice::from_ref(value),
            MultiValue::List(items) => items,
        };

        items
            .iter()
            .flat_map(|item| item.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Age filter as sent on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeRangePayload {
    /// Canonical `{ "min": .., "max": .. }` form
    Bounds(AgeBounds),
    /// Legacy client form: every age in the range, enumerated
    Expanded(Vec<i64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeBounds {
    #[serde(default)]
    pub min: Option<AgeBound>,
    #[serde(default)]
    pub max: Option<AgeBound>,
}

/// A single bound; form inputs may deliver numbers as strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeBound {
    Number(serde_json::Number),
    Text(String),
    /// Any other JSON value; never a usable bound
    Other(serde_json::Value),
}

/// Query string of the single-term search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSearchQuery {
    #[serde(default)]
    pub query: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_value_accepts_both_shapes() {
        let request: SearchRequest = serde_json::from_str(
            r#"{"hobby_query": "chess, reading", "qualities_query": ["kind", " honest "]}"#,
        )
        .unwrap();

        let hobbies: Vec<&str> = request.hobby_query.as_ref().unwrap().tokens().collect();
        let qualities: Vec<&str> = request.qualities_query.as_ref().unwrap().tokens().collect();
        assert_eq!(hobbies, vec!["chess", "reading"]);
        assert_eq!(qualities, vec!["kind", "honest"]);
    }

    #[test]
    fn test_list_items_are_comma_split() {
        let value = MultiValue::List(vec!["chess,reading".into(), "".into(), " ,".into()]);
        assert_eq!(value.tokens().collect::<Vec<_>>(), vec!["chess", "reading"]);
    }

    #[test]
    fn test_age_range_shapes() {
        let bounds: SearchRequest =
            serde_json::from_str(r#"{"age_range": {"min": 25, "max": "35"}}"#).unwrap();
        assert!(matches!(bounds.age_range, Some(AgeRangePayload::Bounds(_))));

        let expanded: SearchRequest =
            serde_json::from_str(r#"{"age_range": [25, 26, 27]}"#).unwrap();
        assert_eq!(expanded.age_range, Some(AgeRangePayload::Expanded(vec![25, 26, 27])));

        let null: SearchRequest = serde_json::from_str(r#"{"age_range": null}"#).unwrap();
        assert_eq!(null.age_range, None);

        let boolean: SearchRequest =
            serde_json::from_str(r#"{"age_range": {"min": true, "max": 30}}"#).unwrap();
        match boolean.age_range {
            Some(AgeRangePayload::Bounds(bounds)) => {
                assert_eq!(bounds.min, Some(AgeBound::Other(serde_json::Value::Bool(true))));
            }
            other => panic!("unexpected age range {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = serde_json::from_str::<SearchRequest>(r#"{"jobs_query": "engineer"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_text_fails_validation() {
        let request = SearchRequest {
            job_query: Some("x".repeat(257)),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
