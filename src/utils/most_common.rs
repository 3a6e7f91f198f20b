use crate::types::{RankedTokens, TokenFrequencyMap};

/// Returns the `k` most frequent tokens of a frequency map.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Tokens with the same frequency keep the order in which they
///   were first encountered (the map's insertion order). The sort is stable,
///   so no further tie-breaking is applied.
///
/// If `k` exceeds the number of distinct tokens, every token is returned.
///
/// ### Example:
/// ```rust
/// use corpus_lens::utils::{count_token_frequencies, most_common};
///
/// let tokens: Vec<String> = ["sat", "cat", "mat", "cat", "mat"]
///     .iter()
///     .map(|token| token.to_string())
///     .collect();
///
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(
///     most_common(&frequencies, 2),
///     vec![("cat".to_string(), 2), ("mat".to_string(), 2)]
/// );
/// assert_eq!(most_common(&frequencies, 10).len(), 3);
/// ```
pub fn most_common(frequencies: &TokenFrequencyMap, k: usize) -> RankedTokens {
    let mut ranked: RankedTokens = frequencies
        .iter()
        .map(|(token, frequency)| (token.to_owned(), *frequency))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(k);

    ranked
}
