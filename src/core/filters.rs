use crate::models::{fold_case, AgeRange, Profile, SearchCriteria, TokenSet};

/// Check if a profile satisfies every constrained field of the criteria
///
/// Per-field rules are combined with AND; an unconstrained field always
/// passes, so fully unconstrained criteria match every profile.
#[inline]
pub fn matches(criteria: &SearchCriteria, profile: &Profile) -> bool {
    matches_job(criteria.job_query(), profile)
        && matches_hobbies(criteria.hobby_query(), profile)
        && matches_age(criteria.age_range(), profile)
        && matches_location(criteria.location_query(), profile)
        && matches_qualities(criteria.qualities_query(), profile)
        && matches_gender(criteria.gender_query(), profile)
}

/// Case-insensitive substring of the job title
#[inline]
pub fn matches_job(query: Option<&str>, profile: &Profile) -> bool {
    query.map_or(true, |query| contains_folded(&profile.job, query))
}

/// Any requested hobby is one of the profile's hobbies
#[inline]
pub fn matches_hobbies(query: &TokenSet, profile: &Profile) -> bool {
    intersects_folded(query, &profile.hobbies)
}

#[inline]
pub fn matches_age(range: Option<AgeRange>, profile: &Profile) -> bool {
    range.map_or(true, |range| range.contains(profile.age))
}

/// Case-insensitive substring of the location
#[inline]
pub fn matches_location(query: Option<&str>, profile: &Profile) -> bool {
    query.map_or(true, |query| contains_folded(&profile.location, query))
}

/// Any requested quality is one of the profile's qualities
#[inline]
pub fn matches_qualities(query: &TokenSet, profile: &Profile) -> bool {
    intersects_folded(query, &profile.qualities)
}

/// Gender is categorical: exact match, ignoring case and padding
#[inline]
pub fn matches_gender(query: Option<&str>, profile: &Profile) -> bool {
    query.map_or(true, |query| fold_case(profile.gender.trim()) == query)
}

/// Single-term search over every field of the profile
///
/// `term` must already be trimmed and lowercased.
pub fn matches_any_field(term: &str, profile: &Profile) -> bool {
    profile.name.as_deref().is_some_and(|name| contains_folded(name, term))
        || contains_folded(&profile.job, term)
        || contains_folded(&profile.location, term)
        || contains_folded(&profile.gender, term)
        || profile.age.to_string().contains(term)
        || profile.hobbies.iter().any(|hobby| contains_folded(hobby, term))
        || profile.qualities.iter().any(|quality| contains_folded(quality, term))
}

#[inline]
fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_case(haystack).contains(folded_needle)
}

/// Empty query passes; otherwise at least one shared token, ignoring case
#[inline]
fn intersects_folded(query: &TokenSet, values: &TokenSet) -> bool {
    query.is_empty()
        || values
            .iter()
            .any(|value| query.contains(&fold_case(value.trim())))
}
