use crate::domain::error::SearchError;
use crate::domain::model::SongRecord;
use crate::domain::traits::LyricsSearch;
use crate::infrastructure::config::MusixmatchConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

// Musixmatch track.search response structures
#[derive(Deserialize, Debug)]
struct SearchResponse {
    message: Message,
}

#[derive(Deserialize, Debug)]
struct Message {
    header: Option<Header>,
    // On failure Musixmatch sends `"body": []` instead of an object
    #[serde(default)]
    body: Value,
}

#[derive(Deserialize, Debug)]
struct Header {
    status_code: u16,
}

#[derive(Deserialize, Debug)]
struct TrackEntry {
    track: Track,
}

#[derive(Deserialize, Debug)]
struct Track {
    track_name: String,
    #[serde(default)]
    album_name: Option<String>,
}

/// Lyrics search backed by the Musixmatch `track.search` endpoint
pub struct MusixmatchClient {
    client: Client,
    config: MusixmatchConfig,
}

impl MusixmatchClient {
    pub fn new(client: Client, config: MusixmatchConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl LyricsSearch for MusixmatchClient {
    async fn search(&self, query: &str, original: &str) -> Result<Vec<SongRecord>, SearchError> {
        search_tracks(&self.client, &self.config, query, original)
            .await
            .inspect_err(|e| tracing::error!("Failed to get tracks: {}", e))
    }
}

pub async fn search_tracks(
    client: &Client,
    config: &MusixmatchConfig,
    query: &str,
    original: &str,
) -> Result<Vec<SongRecord>, SearchError> {
    let params = [
        ("apikey", config.key.as_str()),
        ("q", query),
        ("f_lyrics_language", config.lyrics_language.as_str()),
    ];

    let response = client
        .get(&config.search_url)
        .query(&params)
        .send()
        .await?
        .json::<SearchResponse>()
        .await?;

    if let Some(header) = &response.message.header {
        if header.status_code != 200 {
            return Err(SearchError::Api {
                status_code: header.status_code,
            });
        }
    }

    let entries = match response.message.body {
        Value::Object(mut body) => match body.remove("track_list") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(SearchError::MissingTrackList),
        },
        _ => return Err(SearchError::MissingTrackList),
    };

    let track_list = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<TrackEntry>(entry)
                .map_err(|source| SearchError::MalformedTrack { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if track_list.is_empty() {
        tracing::info!("No songs found for {:?} ({:?})", original, query);
        return Ok(vec![SongRecord::not_found(original)]);
    }

    let tracks: Vec<SongRecord> = track_list
        .into_iter()
        .map(|TrackEntry { track }| SongRecord::new(track.track_name, track.album_name))
        .collect();

    tracing::info!("Tracks : {:?}", tracks);
    Ok(tracks)
}
