use crate::constants::DEFAULT_STOP_WORDS_FILE_PATH;
use crate::models::document_parser::{DocumentParser, ParserKind};
use crate::models::document_record::{Statistic, StatisticValue};
use crate::types::{Label, TokenFrequencyMap};
use crate::{DocumentRecord, Error, StopWords};
use indexmap::IndexMap;
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Registration parameters for `Corpus::load_text`.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Display/lookup label; defaults to the document path.
    pub label: Option<Label>,
    /// Stop words; when unset they are loaded from `stop_words_path`.
    pub stop_words: Option<StopWords>,
    /// Stop-word file used when `stop_words` is unset; defaults to
    /// `DEFAULT_STOP_WORDS_FILE_PATH`.
    pub stop_words_path: Option<PathBuf>,
    pub parser: ParserKind,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    pub fn with_parser(mut self, parser: ParserKind) -> Self {
        self.parser = parser;
        self
    }
}

/// Per-document statistics for every registered document, keyed by statistic
/// and then by label.
///
/// Labels keep their registration order, which is the order used for chart
/// layouts and for picking comparison batches.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    data: IndexMap<Statistic, IndexMap<Label, StatisticValue>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document using one of the built-in parsers.
    ///
    /// # Errors
    /// Fails if the stop-word file or the document cannot be read. The corpus is
    /// left untouched on failure.
    pub fn load_text(&mut self, path: impl AsRef<Path>, options: LoadOptions) -> Result<(), Error> {
        let parser = options.parser;
        self.load(path.as_ref(), options, &parser)
    }

    /// Registers a document using a caller-supplied parser.
    pub fn load_text_with_parser(
        &mut self,
        path: impl AsRef<Path>,
        options: LoadOptions,
        parser: &dyn DocumentParser,
    ) -> Result<(), Error> {
        self.load(path.as_ref(), options, parser)
    }

    fn load(
        &mut self,
        path: &Path,
        options: LoadOptions,
        parser: &dyn DocumentParser,
    ) -> Result<(), Error> {
        let stop_words = match (options.stop_words, &options.stop_words_path) {
            (Some(stop_words), _) => stop_words,
            (None, Some(stop_words_path)) => StopWords::from_file(stop_words_path)?,
            (None, None) => StopWords::from_file(DEFAULT_STOP_WORDS_FILE_PATH)?,
        };

        let record = parser.parse(path, &stop_words)?;
        let label = options
            .label
            .unwrap_or_else(|| path.display().to_string());

        info!("Registering {} ({} words)", label, record.num_words);

        self.insert_record(label, record);

        Ok(())
    }

    /// Stores a parsed record under `label`, replacing every statistic a
    /// previous registration of the same label left behind.
    pub fn insert_record(&mut self, label: impl Into<Label>, record: DocumentRecord) {
        let label = label.into();
        let statistics = record.into_statistics();

        for statistic in Statistic::ALL {
            if statistics.iter().any(|(produced, _)| *produced == statistic) {
                continue;
            }

            if let Some(values) = self.data.get_mut(&statistic) {
                if values.shift_remove(&label).is_some() {
                    warn!("Dropping stale `{}` for {}", statistic, label);
                }
            }
        }

        for (statistic, value) in statistics {
            self.data
                .entry(statistic)
                .or_default()
                .insert(label.clone(), value);
        }
    }

    /// Labels in registration order.
    pub fn labels(&self) -> Vec<&str> {
        self.data
            .get(&Statistic::WordCount)
            .map(|values| values.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data
            .get(&Statistic::WordCount)
            .map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, label: &str) -> bool {
        self.data
            .get(&Statistic::WordCount)
            .is_some_and(|values| values.contains_key(label))
    }

    /// Raw access to a stored value.
    pub fn get(&self, statistic: Statistic, label: &str) -> Option<&StatisticValue> {
        self.data.get(&statistic)?.get(label)
    }

    /// All values stored under one statistic, in registration order.
    pub fn statistic(&self, statistic: Statistic) -> Option<&IndexMap<Label, StatisticValue>> {
        self.data.get(&statistic)
    }

    pub fn word_count(&self, label: &str) -> Result<&TokenFrequencyMap, Error> {
        match self.get(Statistic::WordCount, label) {
            Some(StatisticValue::WordCount(wordcount)) => Ok(wordcount),
            _ => Err(Error::UnknownDocument(label.to_string())),
        }
    }

    pub fn num_words(&self, label: &str) -> Result<usize, Error> {
        match self.get(Statistic::NumWords, label) {
            Some(StatisticValue::Count(num_words)) => Ok(*num_words),
            _ => Err(self.missing(Statistic::NumWords, label)),
        }
    }

    /// Page count; `Ok(None)` for documents that are not paginated.
    pub fn num_pages(&self, label: &str) -> Result<Option<usize>, Error> {
        self.ensure_registered(label)?;

        match self.get(Statistic::NumPages, label) {
            Some(StatisticValue::Count(num_pages)) => Ok(Some(*num_pages)),
            _ => Ok(None),
        }
    }

    /// Normalized full text; `Ok(None)` for documents parsed without it.
    pub fn raw_text(&self, label: &str) -> Result<Option<&str>, Error> {
        self.ensure_registered(label)?;

        match self.get(Statistic::RawText, label) {
            Some(StatisticValue::Text(raw_text)) => Ok(Some(raw_text.as_str())),
            _ => Ok(None),
        }
    }

    /// Word counts of every document, in registration order.
    pub fn word_counts(&self) -> impl Iterator<Item = (&str, &TokenFrequencyMap)> {
        self.data
            .get(&Statistic::WordCount)
            .into_iter()
            .flat_map(|values| values.iter())
            .filter_map(|(label, value)| match value {
                StatisticValue::WordCount(wordcount) => Some((label.as_str(), wordcount)),
                _ => None,
            })
    }

    /// Writes one CSV row per document: `label,num_words,distinct_words,num_pages`.
    pub fn write_summary_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["label", "num_words", "distinct_words", "num_pages"])?;

        for (label, wordcount) in self.word_counts() {
            let num_words = self.num_words(label)?;
            let num_pages = self
                .num_pages(label)?
                .map(|num_pages| num_pages.to_string())
                .unwrap_or_default();

            csv_writer.write_record([
                label.to_string(),
                num_words.to_string(),
                wordcount.len().to_string(),
                num_pages,
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|err| Error::io("<summary csv>", err))?;

        Ok(())
    }

    fn ensure_registered(&self, label: &str) -> Result<(), Error> {
        if self.contains(label) {
            Ok(())
        } else {
            Err(Error::UnknownDocument(label.to_string()))
        }
    }

    fn missing(&self, statistic: Statistic, label: &str) -> Error {
        if self.contains(label) {
            Error::MissingStatistic {
                statistic: statistic.to_string(),
                label: label.to_string(),
            }
        } else {
            Error::UnknownDocument(label.to_string())
        }
    }
}
