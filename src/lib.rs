pub mod config;
pub mod constants;
pub use config::{DEFAULT_COMPLEXITY_BATCH_SIZE, DEFAULT_FREQUENCY_TOP_K, DEFAULT_SANKEY_TOP_K};
pub use constants::DEFAULT_STOP_WORDS_FILE_PATH;
pub mod models;
#[cfg(feature = "pdf")]
pub use models::PdfPageSource;
pub use models::{
    normalize_features, ChartRenderer, ComplexityBatch, Corpus, CorpusVisualizer, DocumentFeatures,
    DocumentParser, DocumentRecord, Error, FeatureDeriver, FeatureTextSource, FeatureVector,
    Figure, FleschKincaid, FrequencyMatrix, HtmlRenderer, JsonRenderer, LoadOptions, PageSource,
    PageText, PaginatedParser, ParserKind, PlainTextParser, ReadabilityScorer, Result, SankeyFlow,
    SankeyLink, Statistic, StatisticValue, StopWords, Tokenizer,
};
pub mod types;
pub mod utils;
pub use types::{Label, RankedTokens, Token, TokenFrequency, TokenFrequencyMap, TokenRef};
pub use utils::{count_token_frequencies, most_common, sum_token_frequencies};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
