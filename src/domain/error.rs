use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config file {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file already exists at: {}", .0.display())]
    AlreadyExists(PathBuf),
}

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Failed to get translation: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translator API error: {0}")]
    Api(String),

    #[error("Translator returned no translation for {0:?}")]
    MissingTranslation(String),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to get tracks: {0}")]
    Translation(#[from] TranslationError),

    #[error("Failed to get tracks: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Musixmatch API error: status code {status_code}")]
    Api { status_code: u16 },

    #[error("Musixmatch response has no track_list")]
    MissingTrackList,

    #[error("Malformed track #{index} in Musixmatch response: {source}")]
    MalformedTrack {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
