use crate::domain::error::Error;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::{MusixmatchClient, RapidApiTranslator};

/// Everything one query needs, built from a freshly loaded config
pub struct AppState {
    pub config: Config,
    pub translator: RapidApiTranslator,
    pub lyrics: MusixmatchClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, Error> {
        // The translator gets its own client so certificate settings stay scoped to it
        let translator_client = create_client(&config.http, config.translator.accept_invalid_certs)
            .map_err(Error::Client)?;
        let search_client = create_client(&config.http, false).map_err(Error::Client)?;

        Ok(Self {
            translator: RapidApiTranslator::new(translator_client, config.translator.clone()),
            lyrics: MusixmatchClient::new(search_client, config.musixmatch.clone()),
            config,
        })
    }
}
