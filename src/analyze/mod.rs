pub mod google;
pub mod interface;

pub use google::GoogleAnalyzer;
pub use interface::{Category, Sentiment, TextAnalyzer};
