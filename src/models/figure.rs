use indexmap::IndexMap;
use serde::Serialize;

/// Static title, size and color settings of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub x_axis_title: Option<&'static str>,
    pub y_axis_title: Option<&'static str>,
    pub color_scale: Option<&'static str>,
    pub font_size: Option<u32>,
}

/// A renderable chart, serialized in Plotly's `{ data, layout }` figure format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// File-name friendly identifier of the chart.
    #[serde(skip)]
    pub slug: String,
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(slug: impl Into<String>, layout: Layout) -> Self {
        Self {
            slug: slug.into(),
            data: vec![],
            layout,
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Sankey(SankeyTrace),
    Heatmap(HeatmapTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyTrace {
    pub node: SankeyNodes,
    pub link: SankeyLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyNodes {
    pub pad: u32,
    pub thickness: u32,
    pub line: Line,
    pub label: Vec<String>,
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyLinks {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<usize>,
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    /// One row per `y` entry, one column per `x` entry.
    pub z: Vec<Vec<f64>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub colorscale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
    pub showscale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<usize>,
    pub name: String,
    pub xaxis: String,
    pub yaxis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

/// Text placed in paper coordinates, used for subplot titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub showarrow: bool,
}

impl Annotation {
    pub fn subplot_title(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            xref: "paper",
            yref: "paper",
            xanchor: "center",
            yanchor: "bottom",
            showarrow: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Axis definitions keyed by Plotly axis name (`xaxis`, `yaxis2`, ...).
    #[serde(flatten)]
    pub axes: IndexMap<String, Axis>,
}

impl From<&ChartLayout> for Layout {
    fn from(chart_layout: &ChartLayout) -> Self {
        let mut axes = IndexMap::new();

        if let Some(x_axis_title) = chart_layout.x_axis_title {
            axes.insert(
                "xaxis".to_string(),
                Axis {
                    title: Some(Title::new(x_axis_title)),
                    ..Axis::default()
                },
            );
        }

        if let Some(y_axis_title) = chart_layout.y_axis_title {
            axes.insert(
                "yaxis".to_string(),
                Axis {
                    title: Some(Title::new(y_axis_title)),
                    ..Axis::default()
                },
            );
        }

        Self {
            title: Title::new(chart_layout.title),
            width: chart_layout.width,
            height: chart_layout.height,
            font: chart_layout.font_size.map(|size| Font { size }),
            showlegend: None,
            annotations: vec![],
            axes,
        }
    }
}
