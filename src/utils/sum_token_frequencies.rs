use crate::types::TokenFrequencyMap;

/// Merges several frequency maps by summing the counts of shared tokens.
///
/// Tokens keep the order in which they are first encountered while walking
/// the maps in the given order.
///
/// # Example
/// ```
/// use corpus_lens::utils::{count_token_frequencies, sum_token_frequencies};
///
/// let a = count_token_frequencies(&["cat".to_string(), "sat".to_string()]);
/// let b = count_token_frequencies(&["ran".to_string(), "cat".to_string()]);
///
/// let totals = sum_token_frequencies([&a, &b]);
/// assert_eq!(totals.get("cat"), Some(&2));
/// assert_eq!(totals.keys().collect::<Vec<_>>(), vec!["cat", "sat", "ran"]);
/// ```
pub fn sum_token_frequencies<'a, I>(maps: I) -> TokenFrequencyMap
where
    I: IntoIterator<Item = &'a TokenFrequencyMap>,
{
    let mut totals = TokenFrequencyMap::new();

    for map in maps {
        for (token, frequency) in map {
            *totals.entry(token.clone()).or_insert(0) += frequency;
        }
    }

    totals
}
