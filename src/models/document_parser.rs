use crate::models::page_source::PageSource;
use crate::{DocumentRecord, Error, StopWords, Tokenizer};
use log::debug;
use std::fs;
use std::path::Path;

/// Turns a document on disk into a `DocumentRecord`.
pub trait DocumentParser {
    fn parse(&self, path: &Path, stop_words: &StopWords) -> Result<DocumentRecord, Error>;
}

/// Selects one of the built-in parsers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParserKind {
    #[default]
    PlainText,
    /// PDF documents; requires the `pdf` feature.
    #[cfg(feature = "pdf")]
    Paginated,
}

impl ParserKind {
    /// Picks `Paginated` for `.pdf` files (when available) and `PlainText` otherwise.
    pub fn for_path(path: &Path) -> Self {
        #[cfg(feature = "pdf")]
        {
            let is_pdf = path
                .extension()
                .and_then(|extension| extension.to_str())
                .is_some_and(|extension| extension.eq_ignore_ascii_case("pdf"));

            if is_pdf {
                return ParserKind::Paginated;
            }
        }

        #[cfg(not(feature = "pdf"))]
        let _ = path;

        ParserKind::PlainText
    }
}

impl DocumentParser for ParserKind {
    fn parse(&self, path: &Path, stop_words: &StopWords) -> Result<DocumentRecord, Error> {
        match self {
            ParserKind::PlainText => PlainTextParser.parse(path, stop_words),
            #[cfg(feature = "pdf")]
            ParserKind::Paginated => {
                PaginatedParser::new(crate::models::PdfPageSource).parse(path, stop_words)
            }
        }
    }
}

/// Parses simple, unformatted UTF-8 text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl DocumentParser for PlainTextParser {
    fn parse(&self, path: &Path, stop_words: &StopWords) -> Result<DocumentRecord, Error> {
        let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let record = DocumentRecord::from_text(&text, stop_words);

        debug!(
            "Parsed {}: {} words, {} distinct",
            path.display(),
            record.num_words,
            record.distinct_words()
        );

        Ok(record)
    }
}

/// Parses paginated documents whose pages are supplied by a `PageSource`.
#[derive(Debug, Clone, Default)]
pub struct PaginatedParser<S: PageSource> {
    page_source: S,
}

impl<S: PageSource> PaginatedParser<S> {
    pub fn new(page_source: S) -> Self {
        Self { page_source }
    }
}

impl<S: PageSource> DocumentParser for PaginatedParser<S> {
    fn parse(&self, path: &Path, stop_words: &StopWords) -> Result<DocumentRecord, Error> {
        let pages = self.page_source.pages(path)?;
        let num_pages = pages.len();

        // Pages without text are counted but contribute nothing
        let mut raw_text = String::new();
        for page_text in pages.iter().flatten() {
            raw_text.push_str(page_text);
            raw_text.push('\n');
        }

        let normalized_text = Tokenizer::normalize(&raw_text);
        let record = DocumentRecord::from_normalized_text(normalized_text, num_pages, stop_words);

        debug!(
            "Parsed {}: {} pages, {} words, {} distinct",
            path.display(),
            num_pages,
            record.num_words,
            record.distinct_words()
        );

        Ok(record)
    }
}
