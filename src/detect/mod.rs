pub mod interface;
pub mod whatlang_detector;

pub use interface::LanguageIdentifier;
pub use whatlang_detector::WhatlangIdentifier;
