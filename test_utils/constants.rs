use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_STOP_WORDS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "stop_words.txt"));

pub static TEST_MIXED_CASE_STOP_WORDS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "mixed_case_stop_words.txt"));

pub const TEST_DOCUMENTS: &[(&str, &str)] = &[
    ("harbor.txt", "Harbor"),
    ("orchard.txt", "Orchard"),
    ("observatory.txt", "Observatory"),
];
