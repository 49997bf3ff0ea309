pub mod http;
pub mod musixmatch;
pub mod translator;

// Re-export for convenience
pub use musixmatch::MusixmatchClient;
pub use translator::RapidApiTranslator;
