use crate::types::TokenFrequencyMap;
use crate::utils::count_token_frequencies;
use crate::Tokenizer;
use crate::StopWords;
use std::fmt;

/// The name under which a per-document value is stored in a `Corpus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statistic {
    WordCount,
    NumWords,
    NumPages,
    RawText,
}

impl Statistic {
    pub const ALL: [Statistic; 4] = [
        Statistic::WordCount,
        Statistic::NumWords,
        Statistic::NumPages,
        Statistic::RawText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::WordCount => "wordcount",
            Statistic::NumWords => "num_words",
            Statistic::NumPages => "num_pages",
            Statistic::RawText => "raw_text",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stored value; the variant matches the `Statistic` it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticValue {
    WordCount(TokenFrequencyMap),
    Count(usize),
    Text(String),
}

/// The parse result for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRecord {
    pub wordcount: TokenFrequencyMap,
    pub num_words: usize,
    /// Only set for paginated sources.
    pub num_pages: Option<usize>,
    /// Lowercased, punctuation-stripped text prior to stop-word filtering.
    pub raw_text: Option<String>,
}

impl DocumentRecord {
    /// Tokenizes `text` and counts the surviving tokens.
    pub fn from_text(text: &str, stop_words: &StopWords) -> Self {
        let tokens = Tokenizer::tokenize(text, stop_words);

        Self {
            wordcount: count_token_frequencies(&tokens),
            num_words: tokens.len(),
            num_pages: None,
            raw_text: None,
        }
    }

    /// Builds a record from text that has already gone through
    /// [`Tokenizer::normalize`], keeping that text as `raw_text`.
    pub fn from_normalized_text(
        normalized_text: String,
        num_pages: usize,
        stop_words: &StopWords,
    ) -> Self {
        let tokens = Tokenizer::tokenize_normalized(&normalized_text, stop_words);

        Self {
            wordcount: count_token_frequencies(&tokens),
            num_words: tokens.len(),
            num_pages: Some(num_pages),
            raw_text: Some(normalized_text),
        }
    }

    /// Number of distinct tokens.
    pub fn distinct_words(&self) -> usize {
        self.wordcount.len()
    }

    /// Splits the record into the statistics it populates.
    pub fn into_statistics(self) -> Vec<(Statistic, StatisticValue)> {
        let mut statistics = vec![
            (Statistic::WordCount, StatisticValue::WordCount(self.wordcount)),
            (Statistic::NumWords, StatisticValue::Count(self.num_words)),
        ];

        if let Some(num_pages) = self.num_pages {
            statistics.push((Statistic::NumPages, StatisticValue::Count(num_pages)));
        }

        if let Some(raw_text) = self.raw_text {
            statistics.push((Statistic::RawText, StatisticValue::Text(raw_text)));
        }

        statistics
    }
}
