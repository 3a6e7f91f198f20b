/// Stop-word file loaded when a document is registered without an explicit stop-word set.
pub const DEFAULT_STOP_WORDS_FILE_PATH: &str = "stop_words.txt";

/// Characters stripped from text before tokenization.
pub const PUNCTUATION_CHARS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Node colors for the Sankey diagram, cycled by node index.
pub const SANKEY_PALETTE: &[&str] = &[
    "#636EFA", "#EF553B", "#00CC96", "#AB63A1", "#FF77AC", "#119DFF", "#F7B801", "#00FF00",
    "#FF4500",
];

/// Row names of the complexity heatmap, in feature-vector order.
pub const FEATURE_NAMES: [&str; 3] = ["Word Count", "Polysyllable Count", "Grade Level"];

/// Number of subplot columns in the per-document bar chart grid.
pub const BARCHART_GRID_COLUMNS: usize = 2;

/// Height, in pixels, of each row of the per-document bar chart grid.
pub const BARCHART_ROW_HEIGHT: u32 = 300;

/// Script tag used by the HTML renderer.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
