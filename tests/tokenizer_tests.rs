use corpus_lens::{StopWords, Tokenizer};

#[cfg(test)]
mod text_doc_tokenizer_tests {
    use super::*;

    #[test]
    fn test_lowercases_tokens() {
        let tokens = Tokenizer::tokenize("These Are MIXED case Tokens", &StopWords::empty());
        assert_eq!(tokens, vec!["these", "are", "mixed", "case", "tokens"]);
    }

    #[test]
    fn test_strips_punctuation_and_drops_numbers() {
        let tokens = Tokenizer::tokenize("Hello, World! 123", &StopWords::empty());
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_drops_alphanumeric_tokens() {
        let tokens = Tokenizer::tokenize("play the mp3 on track 2b", &StopWords::empty());
        assert_eq!(tokens, vec!["play", "the", "on", "track"]);
    }

    #[test]
    fn test_merges_ascii_hyphenated_words() {
        let tokens = Tokenizer::tokenize("my co-star's well-known line", &StopWords::empty());
        assert_eq!(tokens, vec!["my", "costars", "wellknown", "line"]);
    }

    #[test]
    fn test_drops_words_joined_by_non_ascii_dashes() {
        let tokens = Tokenizer::tokenize("a co\u{2013}star appears", &StopWords::empty());
        assert_eq!(tokens, vec!["a", "appears"]);
    }

    #[test]
    fn test_tokenize_ignores_stop_words() {
        let stop_words = StopWords::from_words(["the"]);

        let tokens = Tokenizer::tokenize("the cat sat on the mat", &stop_words);
        assert_eq!(tokens, vec!["cat", "sat", "on", "mat"]);
    }

    #[test]
    fn test_mixed_case_stop_words_do_not_match() {
        // Documents are lowercased before filtering; the stop-word list is not
        let stop_words = StopWords::from_words(["The"]);

        let tokens = Tokenizer::tokenize("The cat", &stop_words);
        assert_eq!(tokens, vec!["the", "cat"]);
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        let text = "Netflix    and     Nvidia";
        let tokens = Tokenizer::tokenize(text, &StopWords::empty());
        assert_eq!(tokens, vec!["netflix", "and", "nvidia"]);
    }

    #[test]
    fn test_tokenize_with_tabs() {
        let text = "Ford\tand\tDisney";
        let tokens = Tokenizer::tokenize(text, &StopWords::empty());
        assert_eq!(tokens, vec!["ford", "and", "disney"]);
    }

    #[test]
    fn test_tokenize_with_line_breaks() {
        let text = "Apple\r\nand\nMicrosoft";
        let tokens = Tokenizer::tokenize(text, &StopWords::empty());
        assert_eq!(tokens, vec!["apple", "and", "microsoft"]);
    }

    #[test]
    fn test_keeps_non_ascii_letters() {
        let tokens = Tokenizer::tokenize("Café Über naïve", &StopWords::empty());
        assert_eq!(tokens, vec!["café", "über", "naïve"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let tokens = Tokenizer::tokenize("b a b c a", &StopWords::empty());
        assert_eq!(tokens, vec!["b", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(Tokenizer::tokenize("", &StopWords::empty()).is_empty());
        assert!(Tokenizer::tokenize(" ... 42 !!", &StopWords::empty()).is_empty());
    }

    #[test]
    fn test_normalize_keeps_word_boundaries() {
        assert_eq!(
            Tokenizer::normalize("Page ONE.\nPage two!"),
            "page one\npage two"
        );
    }
}
