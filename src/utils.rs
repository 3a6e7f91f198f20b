pub mod count_token_frequencies;
pub use count_token_frequencies::count_token_frequencies;

pub mod most_common;
pub use most_common::most_common;

pub mod sum_token_frequencies;
pub use sum_token_frequencies::sum_token_frequencies;
