use crate::models::document_record::Statistic;
use crate::models::readability::{FleschKincaid, ReadabilityScorer};
use crate::types::{Label, TokenFrequencyMap};
use crate::{Corpus, Error};
use log::debug;

/// Which text the readability scorer sees for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeatureTextSource {
    /// The document's distinct tokens joined by single spaces, in
    /// first-occurrence order.
    DistinctWords,
    /// The stored normalized full text (paginated documents only).
    RawText,
    /// `RawText` when the document has it, `DistinctWords` otherwise.
    #[default]
    Preferred,
}

/// Readability features of a single document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFeatures {
    pub word_count_map: TokenFrequencyMap,
    pub grade_level: f64,
    pub polysyllable_count: usize,
}

/// A document's comparable features; see [`FeatureVector::to_array`] for the
/// column order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureVector {
    pub word_count: f64,
    pub polysyllable_count: f64,
    pub grade_level: f64,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; 3] {
        [self.word_count, self.polysyllable_count, self.grade_level]
    }

    pub fn from_array([word_count, polysyllable_count, grade_level]: [f64; 3]) -> Self {
        Self {
            word_count,
            polysyllable_count,
            grade_level,
        }
    }
}

/// Raw and normalized features of a batch of documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityBatch {
    pub labels: Vec<Label>,
    pub raw: Vec<FeatureVector>,
    /// Every column divided by its maximum within this batch.
    pub normalized: Vec<FeatureVector>,
}

/// Derives readability features from a corpus.
///
/// Nothing is cached: every call re-scores the stored text, so results always
/// reflect the latest registration of a label.
pub struct FeatureDeriver<R: ReadabilityScorer = FleschKincaid> {
    scorer: R,
}

impl Default for FeatureDeriver<FleschKincaid> {
    fn default() -> Self {
        Self::new(FleschKincaid)
    }
}

impl<R: ReadabilityScorer> FeatureDeriver<R> {
    pub fn new(scorer: R) -> Self {
        Self { scorer }
    }

    /// Computes the features of one document.
    ///
    /// # Errors
    /// Returns `Error::UnknownDocument` if `label` was never registered.
    pub fn get_features(
        &self,
        corpus: &Corpus,
        label: &str,
        source: FeatureTextSource,
    ) -> Result<DocumentFeatures, Error> {
        let word_count_map = corpus.word_count(label)?;
        let text = Self::scoring_text(corpus, label, source)?;

        Ok(DocumentFeatures {
            word_count_map: word_count_map.clone(),
            grade_level: self.scorer.grade_level(&text),
            polysyllable_count: self.scorer.polysyllable_count(&text),
        })
    }

    /// Builds the raw `(num_words, polysyllable_count, grade_level)` vector of
    /// one document, scored on its distinct words.
    ///
    /// Negative grade levels are floored to `0.0`.
    pub fn feature_vector(&self, corpus: &Corpus, label: &str) -> Result<FeatureVector, Error> {
        let num_words = corpus.num_words(label)?;
        let features = self.get_features(corpus, label, FeatureTextSource::DistinctWords)?;

        Ok(FeatureVector {
            word_count: num_words as f64,
            polysyllable_count: features.polysyllable_count as f64,
            grade_level: features.grade_level.max(0.0),
        })
    }

    /// Collects and normalizes the features of the first `k` documents in
    /// registration order.
    ///
    /// # Errors
    /// Returns `Error::EmptyCorpus` if no document is registered.
    pub fn complexity_batch(&self, corpus: &Corpus, k: usize) -> Result<ComplexityBatch, Error> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let labels: Vec<Label> = corpus
            .labels()
            .into_iter()
            .take(k)
            .map(str::to_string)
            .collect();

        let raw = labels
            .iter()
            .map(|label| self.feature_vector(corpus, label))
            .collect::<Result<Vec<_>, _>>()?;

        let normalized = normalize_features(&raw);

        debug!("Derived complexity features for {} documents", labels.len());

        Ok(ComplexityBatch {
            labels,
            raw,
            normalized,
        })
    }

    fn scoring_text(
        corpus: &Corpus,
        label: &str,
        source: FeatureTextSource,
    ) -> Result<String, Error> {
        let distinct_words = || -> Result<String, Error> {
            let words: Vec<&str> = corpus
                .word_count(label)?
                .keys()
                .map(String::as_str)
                .collect();
            Ok(words.join(" "))
        };

        match source {
            FeatureTextSource::DistinctWords => distinct_words(),
            FeatureTextSource::RawText => corpus
                .raw_text(label)?
                .map(str::to_string)
                .ok_or_else(|| Error::MissingStatistic {
                    statistic: Statistic::RawText.to_string(),
                    label: label.to_string(),
                }),
            FeatureTextSource::Preferred => match corpus.raw_text(label)? {
                Some(raw_text) => Ok(raw_text.to_string()),
                None => distinct_words(),
            },
        }
    }
}

/// Divides every column by its maximum across `features`.
///
/// A column whose maximum is not positive normalizes to `0.0` throughout,
/// so the result always lies in `[0, 1]` for non-negative input.
pub fn normalize_features(features: &[FeatureVector]) -> Vec<FeatureVector> {
    let mut maxima = [0.0_f64; 3];
    for vector in features {
        for (max, value) in maxima.iter_mut().zip(vector.to_array()) {
            *max = (*max).max(value);
        }
    }

    features
        .iter()
        .map(|vector| {
            let mut normalized = vector.to_array();
            for (value, max) in normalized.iter_mut().zip(maxima) {
                *value = if max > 0.0 { *value / max } else { 0.0 };
            }
            FeatureVector::from_array(normalized)
        })
        .collect()
}
