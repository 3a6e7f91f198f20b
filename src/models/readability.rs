use crate::constants::PUNCTUATION_CHARS;
use regex::Regex;
use std::sync::LazyLock;

static VOWEL_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]+").unwrap());

static SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Scores the reading difficulty of a block of text.
pub trait ReadabilityScorer {
    /// U.S. school grade level needed to understand the text.
    fn grade_level(&self, text: &str) -> f64;

    /// Number of words with three or more syllables.
    fn polysyllable_count(&self, text: &str) -> usize;
}

/// Flesch-Kincaid grade level with vowel-group syllable estimation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschKincaid;

impl FleschKincaid {
    fn words(text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| !PUNCTUATION_CHARS.contains(*c))
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect()
    }

    fn sentence_count(text: &str) -> usize {
        SENTENCE_RE
            .find_iter(text)
            .filter(|sentence| sentence.as_str().chars().any(char::is_alphanumeric))
            .count()
    }

    /// Estimates the syllables of a single word by counting vowel groups.
    ///
    /// A trailing silent `e` is not counted unless it forms a consonant + `le`
    /// ending (`table`). Every word has at least one syllable.
    pub fn syllable_count(word: &str) -> usize {
        let word: String = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();

        if word.is_empty() {
            return 0;
        }

        let mut count = VOWEL_GROUP_RE.find_iter(&word).count();

        if count > 1 && word.ends_with('e') && !Self::has_consonant_le_ending(&word) {
            count -= 1;
        }

        count.max(1)
    }

    fn has_consonant_le_ending(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();

        chars.len() > 2
            && chars.ends_with(&['l', 'e'])
            && !"aeiouy".contains(chars[chars.len() - 3])
    }
}

impl ReadabilityScorer for FleschKincaid {
    fn grade_level(&self, text: &str) -> f64 {
        let words = Self::words(text);
        if words.is_empty() {
            return 0.0;
        }

        let word_count = words.len() as f64;
        let sentence_count = Self::sentence_count(text).max(1) as f64;
        let syllable_count = words
            .iter()
            .map(|word| Self::syllable_count(word))
            .sum::<usize>() as f64;

        let grade = 0.39 * (word_count / sentence_count) + 11.8 * (syllable_count / word_count)
            - 15.59;

        (grade * 100.0).round() / 100.0
    }

    fn polysyllable_count(&self, text: &str) -> usize {
        Self::words(text)
            .iter()
            .filter(|word| Self::syllable_count(word) >= 3)
            .count()
    }
}
