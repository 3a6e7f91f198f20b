#![allow(dead_code)] // Not every helper is used by every test target

#[path = "constants.rs"]
pub mod constants;

use constants::{TEST_DOCUMENTS, TEST_FILES_DIRECTORY, TEST_STOP_WORDS_FILE_PATH};
use corpus_lens::{
    ChartRenderer, Corpus, DocumentRecord, Error, Figure, LoadOptions, PageSource, PageText,
    StopWords,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves a file inside the test fixtures directory.
pub fn fixture_path(file_name: &str) -> PathBuf {
    TEST_FILES_DIRECTORY.join(file_name)
}

/// Loads the lowercase stop-word list shared by the fixture documents.
pub fn load_test_stop_words() -> StopWords {
    StopWords::from_file(&*TEST_STOP_WORDS_FILE_PATH).expect("Failed to load test stop words")
}

/// Registers every fixture document, in `TEST_DOCUMENTS` order.
pub fn load_fixture_corpus() -> Corpus {
    let stop_words = load_test_stop_words();
    let mut corpus = Corpus::new();

    for (file_name, label) in TEST_DOCUMENTS {
        corpus
            .load_text(
                fixture_path(file_name),
                LoadOptions::new()
                    .with_label(*label)
                    .with_stop_words(stop_words.clone()),
            )
            .expect("Failed to load fixture document");
    }

    corpus
}

/// Writes `contents` to `dir/file_name` and returns the path.
pub fn write_document(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("Failed to write test document");
    path
}

/// Builds a corpus from in-memory `(label, text)` pairs.
pub fn corpus_from_texts(documents: &[(&str, &str)], stop_words: &StopWords) -> Corpus {
    let mut corpus = Corpus::new();

    for (label, text) in documents {
        corpus.insert_record(*label, DocumentRecord::from_text(text, stop_words));
    }

    corpus
}

/// Keeps every rendered figure in memory.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub figures: Vec<Figure>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, figure: &Figure) -> Result<(), Error> {
        self.figures.push(figure.clone());
        Ok(())
    }
}

/// Serves fixed page texts regardless of the requested path.
#[derive(Debug, Clone)]
pub struct StaticPageSource {
    pub pages: Vec<PageText>,
}

impl StaticPageSource {
    pub fn new(pages: &[Option<&str>]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|page| page.map(str::to_string))
                .collect(),
        }
    }
}

impl PageSource for StaticPageSource {
    fn pages(&self, _path: &Path) -> Result<Vec<PageText>, Error> {
        Ok(self.pages.clone())
    }
}
