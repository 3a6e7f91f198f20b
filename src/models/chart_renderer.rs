use crate::constants::PLOTLY_CDN_URL;
use crate::models::figure::Figure;
use crate::Error;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Displays or persists a figure built by `CorpusVisualizer`.
pub trait ChartRenderer {
    fn render(&mut self, figure: &Figure) -> Result<(), Error>;
}

/// Writes every figure as a standalone HTML page (`<slug>.html`) that draws
/// it with plotly.js.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl HtmlRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: vec![],
        }
    }

    /// Paths of the pages written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn to_html(figure: &Figure) -> Result<String, Error> {
        // Keep the embedded JSON from closing the surrounding script element
        let figure_json = figure.to_json()?.replace("</", "<\\/");

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="figure"></div>
<script>
const figure = {figure_json};
Plotly.newPlot("figure", figure.data, figure.layout);
</script>
</body>
</html>
"#,
            title = escape_html(&figure.layout.title.text),
            cdn = PLOTLY_CDN_URL,
        ))
    }
}

impl ChartRenderer for HtmlRenderer {
    fn render(&mut self, figure: &Figure) -> Result<(), Error> {
        let path = self.output_dir.join(format!("{}.html", figure.slug));
        write_output(&path, Self::to_html(figure)?)?;

        info!("Rendered {} to {}", figure.slug, path.display());
        self.written.push(path);

        Ok(())
    }
}

/// Writes every figure's Plotly JSON to `<slug>.json`.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: vec![],
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartRenderer for JsonRenderer {
    fn render(&mut self, figure: &Figure) -> Result<(), Error> {
        let path = self.output_dir.join(format!("{}.json", figure.slug));
        write_output(&path, serde_json::to_vec_pretty(figure)?)?;

        info!("Rendered {} to {}", figure.slug, path.display());
        self.written.push(path);

        Ok(())
    }
}

fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            Error::RenderError(format!("Failed to create {}: {}", parent.display(), err))
        })?;
    }

    fs::write(path, contents)
        .map_err(|err| Error::RenderError(format!("Failed to write {}: {}", path.display(), err)))
}

/// Escapes text for HTML element content and quoted attribute values.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
