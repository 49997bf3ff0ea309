use crate::domain::error::TranslationError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::TranslatorConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// Microsoft Translator (RapidAPI) request/response structures
#[derive(Serialize, Debug)]
struct TranslateItem<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum TranslateResponse {
    Batch(Vec<TranslateResult>),
    Failure(ApiFailure),
}

#[derive(Deserialize, Debug)]
struct TranslateResult {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize, Debug)]
struct Translation {
    text: String,
}

// Translator answers `{"error": {...}}`, RapidAPI itself answers `{"message": "..."}`
#[derive(Deserialize, Debug)]
struct ApiFailure {
    error: Option<ApiErrorBody>,
    message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    code: Option<i64>,
    message: String,
}

impl ApiFailure {
    fn describe(self) -> String {
        match (self.error, self.message) {
            (Some(ApiErrorBody { code: Some(code), message }), _) => {
                format!("{} ({})", message, code)
            }
            (Some(ApiErrorBody { message, .. }), _) => message,
            (None, Some(message)) => message,
            (None, None) => "unrecognized response".to_string(),
        }
    }
}

/// Translator backed by the Microsoft Translator API on RapidAPI
pub struct RapidApiTranslator {
    client: Client,
    config: TranslatorConfig,
}

impl RapidApiTranslator {
    pub fn new(client: Client, config: TranslatorConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Translator for RapidApiTranslator {
    async fn translate(&self, word: &str) -> Result<String, TranslationError> {
        translate(&self.client, &self.config, word)
            .await
            .inspect_err(|e| tracing::error!("Failed to get translation: {}", e))
    }
}

pub async fn translate(
    client: &Client,
    config: &TranslatorConfig,
    word: &str,
) -> Result<String, TranslationError> {
    let params = [
        ("to", config.to.as_str()),
        ("api-version", "3.0"),
        ("profanityAction", "NoAction"),
        ("textType", "plain"),
    ];
    let payload = [TranslateItem { text: word }];

    let response = client
        .post(&config.url)
        .query(&params)
        .header("X-RapidAPI-Host", &config.host)
        .header("X-RapidAPI-Key", &config.key)
        .json(&payload)
        .send()
        .await?
        .json::<TranslateResponse>()
        .await?;

    match response {
        TranslateResponse::Batch(batch) => {
            let text = batch
                .into_iter()
                .next()
                .and_then(|r| r.translations.into_iter().next())
                .map(|t| t.text)
                .ok_or_else(|| TranslationError::MissingTranslation(word.to_string()))?;
            tracing::debug!("Translated {:?} -> {:?}", word, text);
            Ok(text)
        }
        TranslateResponse::Failure(failure) => Err(TranslationError::Api(failure.describe())),
    }
}
