use clap::Parser;
use corpus_lens::{
    ChartRenderer, Corpus, CorpusVisualizer, Error, HtmlRenderer, JsonRenderer, LoadOptions,
    ParserKind, StopWords, DEFAULT_COMPLEXITY_BATCH_SIZE, DEFAULT_FREQUENCY_TOP_K,
    DEFAULT_SANKEY_TOP_K, DEFAULT_STOP_WORDS_FILE_PATH,
};
use log::{error, info};
use std::path::{Path, PathBuf};

/// A document to register, given as `PATH` or `PATH=LABEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DocumentArg {
    path: PathBuf,
    label: Option<String>,
}

fn parse_document_arg(value: &str) -> Result<DocumentArg, String> {
    let (path, label) = match value.split_once('=') {
        Some((path, label)) => (path, Some(label)),
        None => (value, None),
    };

    if path.is_empty() {
        return Err(format!("Missing document path in `{}`", value));
    }

    if label.is_some_and(str::is_empty) {
        return Err(format!("Empty label in `{}`", value));
    }

    Ok(DocumentArg {
        path: PathBuf::from(path),
        label: label.map(str::to_string),
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "corpus-lens-cli",
    version,
    about = "Compares the vocabulary and complexity of related documents"
)]
struct Cli {
    /// Newline-delimited stop-word list.
    #[arg(long, default_value = DEFAULT_STOP_WORDS_FILE_PATH)]
    stop_words: PathBuf,

    /// Directory the figures are written to.
    #[arg(long = "out", default_value = ".")]
    output_dir: PathBuf,

    /// Write Plotly JSON instead of HTML pages.
    #[arg(long)]
    json: bool,

    /// Number of top words per chart (defaults differ per chart).
    #[arg(short = 'k')]
    top_k: Option<usize>,

    /// Documents as `PATH` or `PATH=LABEL`; `.pdf` files are parsed page by page.
    #[arg(required = true, value_name = "PATH[=LABEL]", value_parser = parse_document_arg)]
    documents: Vec<DocumentArg>,
}

fn run(cli: Cli) -> Result<(), Error> {
    let stop_words = StopWords::from_file(&cli.stop_words)?;
    let mut corpus = Corpus::new();

    for document in &cli.documents {
        let mut options = LoadOptions::new()
            .with_stop_words(stop_words.clone())
            .with_parser(ParserKind::for_path(&document.path));

        if let Some(label) = &document.label {
            options = options.with_label(label.clone());
        }

        corpus.load_text(&document.path, options)?;
    }

    print_summary(&corpus)?;

    let mut renderer: Box<dyn ChartRenderer> = if cli.json {
        Box::new(JsonRenderer::new(&cli.output_dir))
    } else {
        Box::new(HtmlRenderer::new(&cli.output_dir))
    };

    let visualizer = CorpusVisualizer::new(&corpus);
    let sankey_k = cli.top_k.unwrap_or(DEFAULT_SANKEY_TOP_K);
    let frequency_k = cli.top_k.unwrap_or(DEFAULT_FREQUENCY_TOP_K);

    visualizer.wordcount_sankey(renderer.as_mut(), None, sankey_k)?;
    visualizer.frequency_heatmap(renderer.as_mut(), frequency_k)?;
    visualizer.frequency_barchart(renderer.as_mut(), frequency_k)?;
    visualizer.complexity_heatmap(renderer.as_mut(), DEFAULT_COMPLEXITY_BATCH_SIZE)?;

    info!("Figures written to {}", display_dir(&cli.output_dir));

    Ok(())
}

fn print_summary(corpus: &Corpus) -> Result<(), Error> {
    let stdout = std::io::stdout();
    corpus.write_summary_csv(stdout.lock())
}

fn display_dir(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Failed to analyze corpus: {}", e);
        std::process::exit(1);
    }
}
