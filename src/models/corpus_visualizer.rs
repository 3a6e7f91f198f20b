use crate::config::{
    DEFAULT_COMPLEXITY_HEATMAP_LAYOUT, DEFAULT_FREQUENCY_BARCHART_LAYOUT,
    DEFAULT_FREQUENCY_HEATMAP_LAYOUT, DEFAULT_SANKEY_LAYOUT,
};
use crate::constants::{BARCHART_GRID_COLUMNS, BARCHART_ROW_HEIGHT, FEATURE_NAMES, SANKEY_PALETTE};
use crate::models::chart_renderer::ChartRenderer;
use crate::models::feature_deriver::{ComplexityBatch, FeatureDeriver};
use crate::models::figure::{
    Annotation, Axis, BarTrace, ColorBar, Figure, HeatmapTrace, Layout, Line, SankeyLinks,
    SankeyNodes, SankeyTrace, Title, Trace,
};
use crate::models::readability::{FleschKincaid, ReadabilityScorer};
use crate::types::{Label, RankedTokens, Token, TokenFrequency};
use crate::utils::{most_common, sum_token_frequencies};
use crate::{Corpus, Error};
use indexmap::IndexSet;

/// One weighted edge from a document node to a word node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: TokenFrequency,
}

/// Document-to-word flows.
///
/// Nodes are the union of document labels and words; a word that equals a
/// label shares that label's node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SankeyFlow {
    pub nodes: Vec<String>,
    pub links: Vec<SankeyLink>,
}

/// Per-document counts of a fixed word selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMatrix {
    pub documents: Vec<Label>,
    pub words: Vec<Token>,
    /// `counts[document][word]`, zero where a document lacks the word.
    pub counts: Vec<Vec<TokenFrequency>>,
}

/// Read-only chart views over a fully loaded corpus.
///
/// Every view fails with `Error::EmptyCorpus` when nothing is registered.
/// A `k` larger than the available words or documents selects all of them.
pub struct CorpusVisualizer<'a, R: ReadabilityScorer = FleschKincaid> {
    corpus: &'a Corpus,
    feature_deriver: FeatureDeriver<R>,
}

impl<'a> CorpusVisualizer<'a, FleschKincaid> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self::with_scorer(corpus, FleschKincaid)
    }
}

impl<'a, R: ReadabilityScorer> CorpusVisualizer<'a, R> {
    pub fn with_scorer(corpus: &'a Corpus, scorer: R) -> Self {
        Self {
            corpus,
            feature_deriver: FeatureDeriver::new(scorer),
        }
    }

    fn ensure_not_empty(&self) -> Result<(), Error> {
        if self.corpus.is_empty() {
            Err(Error::EmptyCorpus)
        } else {
            Ok(())
        }
    }

    /// Maps each document to either `word_list` or its own `k` most frequent words.
    pub fn sankey_flow(&self, word_list: Option<&[&str]>, k: usize) -> Result<SankeyFlow, Error> {
        self.ensure_not_empty()?;

        let mut edges: Vec<(&str, String, TokenFrequency)> = vec![];

        for (label, wordcount) in self.corpus.word_counts() {
            let selected_words: Vec<String> = match word_list {
                Some(word_list) => word_list.iter().map(|word| word.to_string()).collect(),
                None => most_common(wordcount, k)
                    .into_iter()
                    .map(|(word, _)| word)
                    .collect(),
            };

            for word in selected_words {
                if let Some(&count) = wordcount.get(&word) {
                    edges.push((label, word, count));
                }
            }
        }

        // Sources first, then targets, each in order of appearance
        let mut nodes: IndexSet<String> = IndexSet::new();
        for (label, _, _) in &edges {
            nodes.insert(label.to_string());
        }
        for (_, word, _) in &edges {
            nodes.insert(word.clone());
        }

        let links = edges
            .iter()
            .filter_map(|(label, word, value)| {
                Some(SankeyLink {
                    source: nodes.get_index_of(*label)?,
                    target: nodes.get_index_of(word.as_str())?,
                    value: *value,
                })
            })
            .collect();

        Ok(SankeyFlow {
            nodes: nodes.into_iter().collect(),
            links,
        })
    }

    pub fn sankey_figure(&self, word_list: Option<&[&str]>, k: usize) -> Result<Figure, Error> {
        let flow = self.sankey_flow(word_list, k)?;

        let node_colors: Vec<String> = (0..flow.nodes.len())
            .map(|index| SANKEY_PALETTE[index % SANKEY_PALETTE.len()].to_string())
            .collect();

        let links = SankeyLinks {
            source: flow.links.iter().map(|link| link.source).collect(),
            target: flow.links.iter().map(|link| link.target).collect(),
            value: flow.links.iter().map(|link| link.value).collect(),
            color: flow
                .links
                .iter()
                .map(|link| node_colors[link.source].clone())
                .collect(),
        };

        let trace = Trace::Sankey(SankeyTrace {
            node: SankeyNodes {
                pad: 15,
                thickness: 20,
                line: Line {
                    color: "black".to_string(),
                    width: 0.5,
                },
                label: flow.nodes,
                color: node_colors,
            },
            link: links,
        });

        let layout = Layout::from(&DEFAULT_SANKEY_LAYOUT);

        Ok(Figure::new("wordcount_sankey", layout).with_trace(trace))
    }

    /// Renders the document-to-word Sankey diagram.
    pub fn wordcount_sankey(
        &self,
        renderer: &mut dyn ChartRenderer,
        word_list: Option<&[&str]>,
        k: usize,
    ) -> Result<(), Error> {
        renderer.render(&self.sankey_figure(word_list, k)?)
    }

    /// Counts of the corpus-wide `k` most frequent words in every document.
    pub fn frequency_matrix(&self, k: usize) -> Result<FrequencyMatrix, Error> {
        self.ensure_not_empty()?;

        let totals =
            sum_token_frequencies(self.corpus.word_counts().map(|(_, wordcount)| wordcount));
        let words: Vec<Token> = most_common(&totals, k)
            .into_iter()
            .map(|(word, _)| word)
            .collect();

        let mut documents = vec![];
        let mut counts = vec![];

        for (label, wordcount) in self.corpus.word_counts() {
            documents.push(label.to_string());
            counts.push(
                words
                    .iter()
                    .map(|word| wordcount.get(word).copied().unwrap_or(0))
                    .collect(),
            );
        }

        Ok(FrequencyMatrix {
            documents,
            words,
            counts,
        })
    }

    pub fn frequency_heatmap_figure(&self, k: usize) -> Result<Figure, Error> {
        let matrix = self.frequency_matrix(k)?;

        // Words on the y axis, documents on the x axis
        let z = (0..matrix.words.len())
            .map(|word_index| {
                matrix
                    .counts
                    .iter()
                    .map(|document_counts| document_counts[word_index] as f64)
                    .collect()
            })
            .collect();

        let trace = Trace::Heatmap(HeatmapTrace {
            z,
            x: matrix.documents,
            y: matrix.words,
            colorscale: DEFAULT_FREQUENCY_HEATMAP_LAYOUT
                .color_scale
                .unwrap_or_default()
                .to_string(),
            colorbar: None,
            showscale: true,
        });

        Ok(Figure::new(
            "frequency_heatmap",
            Layout::from(&DEFAULT_FREQUENCY_HEATMAP_LAYOUT),
        )
        .with_trace(trace))
    }

    /// Renders the documents x top words frequency heatmap.
    pub fn frequency_heatmap(
        &self,
        renderer: &mut dyn ChartRenderer,
        k: usize,
    ) -> Result<(), Error> {
        renderer.render(&self.frequency_heatmap_figure(k)?)
    }

    /// Each document's own `k` most frequent words, in registration order.
    pub fn top_words_per_document(&self, k: usize) -> Result<Vec<(Label, RankedTokens)>, Error> {
        self.ensure_not_empty()?;

        Ok(self
            .corpus
            .word_counts()
            .map(|(label, wordcount)| (label.to_string(), most_common(wordcount, k)))
            .collect())
    }

    pub fn frequency_barchart_figure(&self, k: usize) -> Result<Figure, Error> {
        let top_words = self.top_words_per_document(k)?;

        let columns = BARCHART_GRID_COLUMNS;
        let rows = top_words.len().div_ceil(columns);

        let mut layout = Layout::from(&DEFAULT_FREQUENCY_BARCHART_LAYOUT);
        layout.height = BARCHART_ROW_HEIGHT * rows as u32;
        layout.showlegend = Some(false);

        let mut figure = Figure::new("frequency_barchart", layout);

        for (index, (label, ranked)) in top_words.into_iter().enumerate() {
            let (x_domain, y_domain) =
                grid_cell_domain(index / columns, index % columns, rows, columns);
            let axis_suffix = if index == 0 {
                String::new()
            } else {
                (index + 1).to_string()
            };

            figure.layout.axes.insert(
                format!("xaxis{}", axis_suffix),
                Axis {
                    domain: Some(x_domain),
                    anchor: Some(format!("y{}", axis_suffix)),
                    ..Axis::default()
                },
            );
            figure.layout.axes.insert(
                format!("yaxis{}", axis_suffix),
                Axis {
                    domain: Some(y_domain),
                    anchor: Some(format!("x{}", axis_suffix)),
                    ..Axis::default()
                },
            );
            figure.layout.annotations.push(Annotation::subplot_title(
                label.clone(),
                (x_domain[0] + x_domain[1]) / 2.0,
                y_domain[1],
            ));

            let (words, frequencies): (Vec<Token>, Vec<TokenFrequency>) =
                ranked.into_iter().unzip();

            figure.data.push(Trace::Bar(BarTrace {
                x: words,
                y: frequencies,
                name: label,
                xaxis: format!("x{}", axis_suffix),
                yaxis: format!("y{}", axis_suffix),
            }));
        }

        Ok(figure)
    }

    /// Renders one bar chart of top words per document in a two-column grid.
    pub fn frequency_barchart(
        &self,
        renderer: &mut dyn ChartRenderer,
        k: usize,
    ) -> Result<(), Error> {
        renderer.render(&self.frequency_barchart_figure(k)?)
    }

    /// Normalized features of the first `k` documents.
    pub fn complexity_batch(&self, k: usize) -> Result<ComplexityBatch, Error> {
        self.feature_deriver.complexity_batch(self.corpus, k)
    }

    pub fn complexity_heatmap_figure(&self, k: usize) -> Result<Figure, Error> {
        let batch = self.complexity_batch(k)?;

        // Features on the y axis, documents on the x axis
        let z = (0..FEATURE_NAMES.len())
            .map(|feature_index| {
                batch
                    .normalized
                    .iter()
                    .map(|vector| vector.to_array()[feature_index])
                    .collect()
            })
            .collect();

        let trace = Trace::Heatmap(HeatmapTrace {
            z,
            x: batch.labels,
            y: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
            colorscale: DEFAULT_COMPLEXITY_HEATMAP_LAYOUT
                .color_scale
                .unwrap_or_default()
                .to_string(),
            colorbar: Some(ColorBar {
                title: Title::new("Normalized Text Feature Values"),
            }),
            showscale: true,
        });

        Ok(Figure::new(
            "complexity_heatmap",
            Layout::from(&DEFAULT_COMPLEXITY_HEATMAP_LAYOUT),
        )
        .with_trace(trace))
    }

    /// Renders the normalized complexity features as a heatmap.
    pub fn complexity_heatmap(
        &self,
        renderer: &mut dyn ChartRenderer,
        k: usize,
    ) -> Result<(), Error> {
        renderer.render(&self.complexity_heatmap_figure(k)?)
    }
}

/// Paper-coordinate `(x, y)` domains of a grid cell, row 0 at the top.
fn grid_cell_domain(
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
) -> ([f64; 2], [f64; 2]) {
    const HORIZONTAL_GAP: f64 = 0.1;
    const VERTICAL_GAP: f64 = 0.1;

    let cell_width = (1.0 - HORIZONTAL_GAP * (columns - 1) as f64) / columns as f64;
    let cell_height = (1.0 - VERTICAL_GAP * (rows - 1) as f64) / rows as f64;

    let x_start = column as f64 * (cell_width + HORIZONTAL_GAP);
    let y_end = 1.0 - row as f64 * (cell_height + VERTICAL_GAP);

    ([x_start, x_start + cell_width], [y_end - cell_height, y_end])
}
