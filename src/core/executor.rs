use crate::core::filters::{matches, matches_any_field};
use crate::core::normalizer::normalize;
use crate::error::SearchError;
use crate::models::{fold_text, Profile, SearchCriteria, SearchRequest, SearchResult};

/// Lazy filter over a profile sequence, yielding matches in input order
///
/// Holds nothing but the borrowed criteria and the underlying iterator, so
/// dropping it early has no side effects.
#[derive(Debug, Clone)]
pub struct Matches<'c, I> {
    criteria: &'c SearchCriteria,
    profiles: I,
}

impl<'c, 'p, I> Iterator for Matches<'c, I>
where
    I: Iterator<Item = &'p Profile>,
{
    type Item = &'p Profile;

    fn next(&mut self) -> Option<Self::Item> {
        let criteria = self.criteria;
        self.profiles.find(|profile| matches(criteria, profile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.profiles.size_hint().1)
    }
}

/// Apply the criteria to a profile sequence without collecting
pub fn execute<'c, 'p, I>(criteria: &'c SearchCriteria, profiles: I) -> Matches<'c, I::IntoIter>
where
    I: IntoIterator<Item = &'p Profile>,
{
    Matches {
        criteria,
        profiles: profiles.into_iter(),
    }
}

/// Run the criteria over the profiles and collect an owned result
pub fn collect_results<'p, I>(criteria: &SearchCriteria, profiles: I) -> SearchResult
where
    I: IntoIterator<Item = &'p Profile>,
{
    SearchResult {
        results: execute(criteria, profiles).cloned().collect(),
    }
}

/// Normalize a raw request, then search
///
/// Normalization errors are returned before any profile is inspected.
pub fn search<'p, I>(request: &SearchRequest, profiles: I) -> Result<SearchResult, SearchError>
where
    I: IntoIterator<Item = &'p Profile>,
{
    let criteria = normalize(request)?;
    Ok(collect_results(&criteria, profiles))
}

/// Single-term search across all profile fields
pub fn quick_search<'p, I>(term: &str, profiles: I) -> Result<SearchResult, SearchError>
where
    I: IntoIterator<Item = &'p Profile>,
{
    let term = fold_text(term)
        .ok_or_else(|| SearchError::MalformedPayload("No query parameter provided".to_string()))?;

    Ok(SearchResult {
        results: profiles
            .into_iter()
            .filter(|profile| matches_any_field(&term, profile))
            .cloned()
            .collect(),
    })
}
