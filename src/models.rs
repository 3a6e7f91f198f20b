pub mod error;
pub use error::{Error, Result};

pub mod stop_words;
pub use stop_words::StopWords;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod document_record;
pub use document_record::{DocumentRecord, Statistic, StatisticValue};

pub mod page_source;
#[cfg(feature = "pdf")]
pub use page_source::PdfPageSource;
pub use page_source::{PageSource, PageText};

pub mod document_parser;
pub use document_parser::{DocumentParser, PaginatedParser, ParserKind, PlainTextParser};

pub mod corpus;
pub use corpus::{Corpus, LoadOptions};

pub mod readability;
pub use readability::{FleschKincaid, ReadabilityScorer};

pub mod feature_deriver;
pub use feature_deriver::{
    normalize_features, ComplexityBatch, DocumentFeatures, FeatureDeriver, FeatureTextSource,
    FeatureVector,
};

pub mod figure;
pub use figure::{ChartLayout, Figure, Trace};

pub mod chart_renderer;
pub use chart_renderer::{ChartRenderer, HtmlRenderer, JsonRenderer};

pub mod corpus_visualizer;
pub use corpus_visualizer::{CorpusVisualizer, FrequencyMatrix, SankeyFlow, SankeyLink};
