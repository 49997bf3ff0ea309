use serde::{Deserialize, Serialize};

// 一首歌: 歌名 + 专辑 (专辑可能为空)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    #[serde(rename = "Song")]
    pub song: String,
    #[serde(rename = "Album")]
    pub album: Option<String>,
}

impl SongRecord {
    pub fn new(song: impl Into<String>, album: Option<String>) -> Self {
        Self {
            song: song.into(),
            album,
        }
    }

    /// The single record substituted when a search comes back empty.
    pub fn not_found(word: &str) -> Self {
        Self {
            song: format!("Couldn't find any songs with word {}", word),
            album: None,
        }
    }
}
