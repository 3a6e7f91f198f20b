use indexmap::IndexMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lowercase, punctuation-free,
/// purely alphabetic words extracted from a document.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the number of occurrences of a token within a document (or across a corpus).
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts.
///
/// Entries are kept in first-occurrence order, which is what breaks ties when
/// ranking the most frequent tokens.
pub type TokenFrequencyMap = IndexMap<Token, TokenFrequency>;

/// The unique display/lookup identifier of a registered document.
pub type Label = String;

/// A ranked `(token, frequency)` list, most frequent first.
pub type RankedTokens = Vec<(Token, TokenFrequency)>;
