pub mod google;
pub mod interface;

pub use google::GoogleSynthesizer;
pub use interface::SpeechSynthesizer;
