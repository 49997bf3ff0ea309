use crate::application::postprocess::postprocess;
use crate::domain::error::SearchError;
use crate::domain::model::SongRecord;
use crate::domain::traits::{LyricsSearch, Translator};
use crate::state::AppState;

/// Translate `word`, then search lyrics for the translated word
pub async fn search_songs<T, S>(
    translator: &T,
    lyrics: &S,
    word: &str,
) -> Result<Vec<SongRecord>, SearchError>
where
    T: Translator + ?Sized,
    S: LyricsSearch + ?Sized,
{
    let translated = translator.translate(word).await?;
    lyrics.search(&translated, word).await
}

/// Search and post-process; both the command line and the form go through here
pub async fn query_songs(state: &AppState, word: &str) -> Result<Vec<SongRecord>, SearchError> {
    let records = search_songs(&state.translator, &state.lyrics, word).await?;
    Ok(postprocess(records, &state.config.filter.exclude_marker))
}
