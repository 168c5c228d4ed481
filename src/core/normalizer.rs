use validator::Validate;

use crate::error::SearchError;
use crate::models::{AgeBound, AgeBounds, AgeRange, AgeRangePayload, SearchCriteria, SearchRequest};

/// Turn a raw search payload into canonical [`SearchCriteria`]
///
/// Never touches the profile store. On error no criteria exist, so a search
/// cannot start with a half-normalized filter.
pub fn normalize(request: &SearchRequest) -> Result<SearchCriteria, SearchError> {
    request
        .validate()
        .map_err(|errors| SearchError::MalformedPayload(errors.to_string()))?;

    let mut builder = SearchCriteria::builder();

    if let Some(job) = &request.job_query {
        builder = builder.job(job);
    }
    if let Some(hobbies) = &request.hobby_query {
        builder = builder.hobbies(hobbies.tokens());
    }
    if let Some(range) = normalize_age_range(request.age_range.as_ref())? {
        builder = builder.age_range(range);
    }
    if let Some(location) = &request.location_query {
        builder = builder.location(location);
    }
    if let Some(qualities) = &request.qualities_query {
        builder = builder.qualities(qualities.tokens());
    }
    if let Some(gender) = &request.gender_query {
        builder = builder.gender(gender);
    }

    let criteria = builder.build();
    tracing::debug!("Normalized search criteria: {:?}", criteria);
    Ok(criteria)
}

/// Resolve the age filter; `Ok(None)` means unconstrained
pub fn normalize_age_range(payload: Option<&AgeRangePayload>) -> Result<Option<AgeRange>, SearchError> {
    match payload {
        None => Ok(None),
        Some(AgeRangePayload::Bounds(bounds)) => range_from_bounds(bounds),
        Some(AgeRangePayload::Expanded(ages)) => range_from_expanded(ages),
    }
}

#[derive(Debug, PartialEq)]
enum BoundValue {
    Absent,
    Value(i64),
    NotNumeric(String),
}

fn read_bound(bound: Option<&AgeBound>) -> BoundValue {
    match bound {
        None => BoundValue::Absent,
        Some(AgeBound::Number(number)) => match number.as_i64() {
            Some(value) => BoundValue::Value(value),
            None => match number.as_f64() {
                Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
                    BoundValue::Value(value as i64)
                }
                _ => BoundValue::NotNumeric(number.to_string()),
            },
        },
        Some(AgeBound::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                BoundValue::Absent
            } else {
                trimmed
                    .parse::<i64>()
                    .map(BoundValue::Value)
                    .unwrap_or_else(|_| BoundValue::NotNumeric(trimmed.to_string()))
            }
        }
        Some(AgeBound::Other(value)) => BoundValue::NotNumeric(value.to_string()),
    }
}

fn range_from_bounds(bounds: &AgeBounds) -> Result<Option<AgeRange>, SearchError> {
    let min = read_bound(bounds.min.as_ref());
    let max = read_bound(bounds.max.as_ref());

    match (min, max) {
        (BoundValue::Value(min), BoundValue::Value(max)) => AgeRange::new(min, max).map(Some),
        (BoundValue::NotNumeric(value), BoundValue::Value(_) | BoundValue::NotNumeric(_))
        | (BoundValue::Value(_), BoundValue::NotNumeric(value)) => Err(SearchError::InvalidRange(format!(
            "bound {:?} is not a whole number",
            value
        ))),
        // A lone bound must not turn into a point filter
        (min, max) => {
            if min != BoundValue::Absent || max != BoundValue::Absent {
                tracing::debug!("Ignoring age range with a single bound");
            }
            Ok(None)
        }
    }
}

fn range_from_expanded(ages: &[i64]) -> Result<Option<AgeRange>, SearchError> {
    let (first, last) = match (ages.first(), ages.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(None),
    };

    let consecutive = ages
        .windows(2)
        .all(|pair| pair[0].checked_add(1) == Some(pair[1]));

    if !consecutive {
        return Err(SearchError::MalformedPayload(
            "age_range list must hold consecutive ascending ages; send {min, max} instead".to_string(),
        ));
    }

    AgeRange::new(first, last).map(Some)
}
