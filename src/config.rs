use crate::models::ChartLayout;

pub const DEFAULT_SANKEY_TOP_K: usize = 5;
pub const DEFAULT_FREQUENCY_TOP_K: usize = 10;
pub const DEFAULT_COMPLEXITY_BATCH_SIZE: usize = 10;

pub const DEFAULT_SANKEY_LAYOUT: ChartLayout = ChartLayout {
    title: "Wordcount Sankey",
    width: 900,
    height: 600,
    x_axis_title: None,
    y_axis_title: None,
    color_scale: None,
    font_size: Some(10),
};

pub const DEFAULT_FREQUENCY_HEATMAP_LAYOUT: ChartLayout = ChartLayout {
    title: "Word Frequency Heatmap",
    width: 1000,
    height: 500,
    x_axis_title: Some("Text Files"),
    y_axis_title: Some("Words"),
    color_scale: Some("Blues"),
    font_size: None,
};

// Height is recomputed from the number of grid rows.
pub const DEFAULT_FREQUENCY_BARCHART_LAYOUT: ChartLayout = ChartLayout {
    title: "Top-k words per document",
    width: 900,
    height: 300,
    x_axis_title: None,
    y_axis_title: None,
    color_scale: None,
    font_size: None,
};

pub const DEFAULT_COMPLEXITY_HEATMAP_LAYOUT: ChartLayout = ChartLayout {
    title: "Document Complexity Heatmap",
    width: 800,
    height: 600,
    x_axis_title: Some("Documents"),
    y_axis_title: Some("Complexity"),
    color_scale: Some("Greens"),
    font_size: None,
};
