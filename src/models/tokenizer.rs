use crate::constants::PUNCTUATION_CHARS;
use crate::types::Token;
use crate::StopWords;

#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Lowercases the text and removes every ASCII punctuation character.
    ///
    /// Whitespace (including line breaks) is left in place so that the result
    /// still carries the document's word boundaries.
    pub fn normalize(text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|c| !PUNCTUATION_CHARS.contains(*c))
            .collect()
    }

    /// Normalizes the text, then splits it into tokens.
    ///
    /// A token survives only if every character is alphabetic and it is not a
    /// stop word. Appearance order and duplicates are preserved.
    ///
    /// Note: Because punctuation is removed before splitting, hyphenated words
    /// are merged (`co-star` becomes `costar`), whereas numeric or alphanumeric
    /// words (`123`, `mp3`) are dropped.
    pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<Token> {
        Self::tokenize_normalized(&Self::normalize(text), stop_words)
    }

    /// Splits already-normalized text into tokens; see [`Tokenizer::tokenize`].
    pub fn tokenize_normalized(normalized_text: &str, stop_words: &StopWords) -> Vec<Token> {
        normalized_text
            .split_whitespace()
            .filter(|word| word.chars().all(char::is_alphabetic))
            .filter(|word| !stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }
}
