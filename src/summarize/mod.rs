pub mod client;
pub mod interface;

pub use client::SummarizerClient;
pub use interface::Summarizer;
