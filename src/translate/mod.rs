pub mod google;
pub mod interface;

pub use google::GoogleTranslator;
pub use interface::{Language, Translator};
