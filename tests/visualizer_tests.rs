#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::{corpus_from_texts, load_fixture_corpus, RecordingRenderer};

use corpus_lens::models::Trace;
use corpus_lens::{
    ChartRenderer, Corpus, CorpusVisualizer, Error, FleschKincaid, HtmlRenderer, JsonRenderer,
    SankeyLink, StopWords,
};
use std::fs;

fn two_document_corpus() -> Corpus {
    corpus_from_texts(
        &[("A", "the cat sat on the mat"), ("B", "a cat ran")],
        &StopWords::from_words(["the"]),
    )
}

fn link(source: usize, target: usize, value: usize) -> SankeyLink {
    SankeyLink {
        source,
        target,
        value,
    }
}

#[cfg(test)]
mod sankey_tests {
    use super::*;

    #[test]
    fn test_sankey_top_k_per_document() {
        let corpus = two_document_corpus();
        let flow = CorpusVisualizer::new(&corpus).sankey_flow(None, 2).unwrap();

        assert_eq!(flow.nodes, vec!["A", "B", "cat", "sat", "a"]);
        assert_eq!(
            flow.links,
            vec![link(0, 2, 1), link(0, 3, 1), link(1, 4, 1), link(1, 2, 1)]
        );
    }

    #[test]
    fn test_sankey_word_list_skips_absent_words() {
        let corpus = two_document_corpus();
        let flow = CorpusVisualizer::new(&corpus)
            .sankey_flow(Some(&["cat", "dog"][..]), 5)
            .unwrap();

        assert_eq!(flow.nodes, vec!["A", "B", "cat"]);
        assert_eq!(flow.links, vec![link(0, 2, 1), link(1, 2, 1)]);
    }

    #[test]
    fn test_sankey_word_matching_label_shares_node() {
        let corpus = corpus_from_texts(
            &[("cat", "cat cat dog"), ("B", "cat")],
            &StopWords::empty(),
        );
        let flow = CorpusVisualizer::new(&corpus).sankey_flow(None, 1).unwrap();

        assert_eq!(flow.nodes, vec!["cat", "B"]);
        assert_eq!(flow.links, vec![link(0, 0, 2), link(1, 0, 1)]);
    }

    #[test]
    fn test_sankey_k_larger_than_vocabulary() {
        let corpus = two_document_corpus();
        let flow = CorpusVisualizer::new(&corpus)
            .sankey_flow(None, 100)
            .unwrap();

        assert_eq!(flow.links.len(), 7);
        assert_eq!(flow.nodes, vec!["A", "B", "cat", "sat", "on", "mat", "a", "ran"]);
    }

    #[test]
    fn test_sankey_figure_serializes_as_plotly_sankey() {
        let corpus = two_document_corpus();
        let figure = CorpusVisualizer::new(&corpus)
            .sankey_figure(None, 2)
            .unwrap();

        assert_eq!(figure.slug, "wordcount_sankey");
        match &figure.data[..] {
            [Trace::Sankey(trace)] => {
                assert_eq!(trace.node.label.len(), 5);
                assert_eq!(trace.node.color.len(), 5);
                assert_eq!(trace.link.source, vec![0, 0, 1, 1]);
                assert_eq!(trace.link.target, vec![2, 3, 4, 2]);
                assert_eq!(trace.link.color[0], trace.node.color[0]);
            }
            other => panic!("Expected a single sankey trace, got {:?}", other),
        }

        let json = figure.to_json().unwrap();
        assert!(json.contains(r#""type":"sankey""#));
        assert!(!json.contains("wordcount_sankey"));
    }
}

#[cfg(test)]
mod frequency_tests {
    use super::*;

    #[test]
    fn test_frequency_matrix_top_word() {
        let corpus = two_document_corpus();
        let matrix = CorpusVisualizer::new(&corpus).frequency_matrix(1).unwrap();

        assert_eq!(matrix.documents, vec!["A", "B"]);
        assert_eq!(matrix.words, vec!["cat"]);
        assert_eq!(matrix.counts, vec![vec![1], vec![1]]);
    }

    #[test]
    fn test_frequency_matrix_ties_keep_first_occurrence() {
        let corpus = load_fixture_corpus();
        let matrix = CorpusVisualizer::new(&corpus).frequency_matrix(3).unwrap();

        assert_eq!(matrix.documents, vec!["Harbor", "Orchard", "Observatory"]);
        assert_eq!(matrix.words, vec!["harbor", "boats", "orchard"]);
        assert_eq!(matrix.counts[0], vec![4, 3, 0]);
        assert_eq!(matrix.counts[1], vec![0, 0, 3]);
        assert_eq!(matrix.counts[2], vec![0, 0, 0]);
    }

    #[test]
    fn test_frequency_heatmap_has_words_as_rows() {
        let corpus = two_document_corpus();
        let figure = CorpusVisualizer::new(&corpus)
            .frequency_heatmap_figure(3)
            .unwrap();

        match &figure.data[..] {
            [Trace::Heatmap(trace)] => {
                assert_eq!(trace.x, vec!["A", "B"]);
                assert_eq!(trace.y, vec!["cat", "sat", "on"]);
                assert_eq!(
                    trace.z,
                    vec![vec![1.0, 1.0], vec![1.0, 0.0], vec![1.0, 0.0]]
                );
                assert_eq!(trace.colorscale, "Blues");
            }
            other => panic!("Expected a single heatmap trace, got {:?}", other),
        }
    }

    #[test]
    fn test_barchart_grid_layout() {
        let corpus = load_fixture_corpus();
        let figure = CorpusVisualizer::new(&corpus)
            .frequency_barchart_figure(2)
            .unwrap();

        assert_eq!(figure.layout.height, 600);
        assert_eq!(figure.layout.showlegend, Some(false));
        assert_eq!(
            figure.layout.axes.keys().collect::<Vec<_>>(),
            vec!["xaxis", "yaxis", "xaxis2", "yaxis2", "xaxis3", "yaxis3"]
        );
        assert_eq!(
            figure
                .layout
                .annotations
                .iter()
                .map(|annotation| annotation.text.as_str())
                .collect::<Vec<_>>(),
            vec!["Harbor", "Orchard", "Observatory"]
        );

        let bars: Vec<_> = figure
            .data
            .iter()
            .map(|trace| match trace {
                Trace::Bar(bar) => bar,
                other => panic!("Expected bar traces, got {:?}", other),
            })
            .collect();

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].x, vec!["harbor", "boats"]);
        assert_eq!(bars[0].y, vec![4, 3]);
        assert_eq!((bars[0].xaxis.as_str(), bars[0].yaxis.as_str()), ("x", "y"));
        assert_eq!((bars[2].xaxis.as_str(), bars[2].yaxis.as_str()), ("x3", "y3"));

        // Second cell sits to the right of the first, third starts a new row
        let first = figure.layout.axes["xaxis"].domain.unwrap();
        let second = figure.layout.axes["xaxis2"].domain.unwrap();
        let third_y = figure.layout.axes["yaxis3"].domain.unwrap();
        assert!(second[0] > first[1]);
        assert!(third_y[1] < figure.layout.axes["yaxis"].domain.unwrap()[0]);
    }

    #[test]
    fn test_single_document_barchart() {
        let corpus = two_document_corpus();
        let top_words = CorpusVisualizer::new(&corpus)
            .top_words_per_document(10)
            .unwrap();

        assert_eq!(top_words.len(), 2);
        assert_eq!(top_words[1].0, "B");
        assert_eq!(top_words[1].1.len(), 3);

        let corpus = corpus_from_texts(&[("only", "one two")], &StopWords::empty());
        let figure = CorpusVisualizer::new(&corpus)
            .frequency_barchart_figure(5)
            .unwrap();
        assert_eq!(figure.layout.height, 300);
    }
}

#[cfg(test)]
mod complexity_tests {
    use super::*;

    #[test]
    fn test_complexity_heatmap_shape() {
        let corpus = load_fixture_corpus();
        let figure = CorpusVisualizer::new(&corpus)
            .complexity_heatmap_figure(2)
            .unwrap();

        match &figure.data[..] {
            [Trace::Heatmap(trace)] => {
                assert_eq!(trace.x, vec!["Harbor", "Orchard"]);
                assert_eq!(
                    trace.y,
                    vec!["Word Count", "Polysyllable Count", "Grade Level"]
                );
                assert_eq!(trace.z.len(), 3);
                assert!(trace.z.iter().all(|row| row.len() == 2));
                assert_eq!(trace.colorscale, "Greens");
                assert!(trace.colorbar.is_some());
            }
            other => panic!("Expected a single heatmap trace, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_scorer() {
        struct ConstantScorer;

        impl corpus_lens::ReadabilityScorer for ConstantScorer {
            fn grade_level(&self, _text: &str) -> f64 {
                4.0
            }

            fn polysyllable_count(&self, _text: &str) -> usize {
                2
            }
        }

        let corpus = two_document_corpus();
        let batch = CorpusVisualizer::with_scorer(&corpus, ConstantScorer)
            .complexity_batch(10)
            .unwrap();

        assert_eq!(batch.normalized[0].to_array(), [1.0, 1.0, 1.0]);
        assert_eq!(batch.normalized[1].to_array(), [0.75, 1.0, 1.0]);
    }
}

#[cfg(test)]
mod empty_corpus_tests {
    use super::*;

    #[test]
    fn test_every_view_rejects_empty_corpus() {
        let corpus = Corpus::new();
        let visualizer = CorpusVisualizer::new(&corpus);
        let mut renderer = RecordingRenderer::default();

        assert!(matches!(
            visualizer.wordcount_sankey(&mut renderer, None, 5),
            Err(Error::EmptyCorpus)
        ));
        assert!(matches!(
            visualizer.frequency_heatmap(&mut renderer, 5),
            Err(Error::EmptyCorpus)
        ));
        assert!(matches!(
            visualizer.frequency_barchart(&mut renderer, 5),
            Err(Error::EmptyCorpus)
        ));
        assert!(matches!(
            visualizer.complexity_heatmap(&mut renderer, 5),
            Err(Error::EmptyCorpus)
        ));
        assert!(renderer.figures.is_empty());
    }
}

#[cfg(test)]
mod renderer_tests {
    use super::*;

    fn render_all(visualizer: &CorpusVisualizer<FleschKincaid>, renderer: &mut dyn ChartRenderer) {
        visualizer.wordcount_sankey(renderer, None, 3).unwrap();
        visualizer.frequency_heatmap(renderer, 3).unwrap();
        visualizer.frequency_barchart(renderer, 3).unwrap();
        visualizer.complexity_heatmap(renderer, 3).unwrap();
    }

    #[test]
    fn test_recording_renderer_receives_every_figure() {
        let corpus = two_document_corpus();
        let visualizer = CorpusVisualizer::new(&corpus);
        let mut renderer = RecordingRenderer::default();

        render_all(&visualizer, &mut renderer);

        assert_eq!(
            renderer
                .figures
                .iter()
                .map(|figure| figure.slug.as_str())
                .collect::<Vec<_>>(),
            vec![
                "wordcount_sankey",
                "frequency_heatmap",
                "frequency_barchart",
                "complexity_heatmap"
            ]
        );
    }

    #[test]
    fn test_html_renderer_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("figures");

        let corpus = two_document_corpus();
        let visualizer = CorpusVisualizer::new(&corpus);
        let mut renderer = HtmlRenderer::new(&output_dir);

        render_all(&visualizer, &mut renderer);

        assert_eq!(renderer.written().len(), 4);

        let page = fs::read_to_string(output_dir.join("wordcount_sankey.html")).unwrap();
        assert!(page.contains("Plotly.newPlot"));
        assert!(page.contains(r#""type":"sankey""#));
        assert!(page.contains("<title>Wordcount Sankey</title>"));
    }

    #[test]
    fn test_html_escapes_script_terminators() {
        let corpus = corpus_from_texts(&[("</script>", "word")], &StopWords::empty());
        let figure = CorpusVisualizer::new(&corpus)
            .frequency_heatmap_figure(1)
            .unwrap();

        let page = HtmlRenderer::to_html(&figure).unwrap();

        assert_eq!(page.matches("</script>").count(), 2);
    }

    #[test]
    fn test_json_renderer_writes_plotly_json() {
        let dir = tempfile::tempdir().unwrap();

        let corpus = two_document_corpus();
        let visualizer = CorpusVisualizer::new(&corpus);
        let mut renderer = JsonRenderer::new(dir.path());

        visualizer.frequency_heatmap(&mut renderer, 2).unwrap();

        let path = dir.path().join("frequency_heatmap.json");
        assert_eq!(renderer.written(), &[path.clone()]);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["data"][0]["type"], "heatmap");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Text Files");
        assert_eq!(value["layout"]["width"], 1000);
    }
}
