use crate::domain::error::{SearchError, TranslationError};
use crate::domain::model::SongRecord;
use async_trait::async_trait;

/// Trait for translation services
///
/// Turns the user's word into the target-language word used as the search key.
#[async_trait]
pub trait Translator {
    async fn translate(&self, word: &str) -> Result<String, TranslationError>;
}

/// Trait for lyrics search services
///
/// `original` is the untranslated word; it is only used to build the
/// "not found" record when the track list comes back empty.
#[async_trait]
pub trait LyricsSearch {
    async fn search(&self, query: &str, original: &str) -> Result<Vec<SongRecord>, SearchError>;
}
