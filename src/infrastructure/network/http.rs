// HTTP client utilities
use crate::infrastructure::config::HttpConfig;
use reqwest::Client;
use std::time::Duration;

/// Create an HTTP client with explicit timeouts
///
/// `accept_invalid_certs` turns off TLS certificate verification for this
/// client only. Callers build one client per upstream service so the flag
/// never leaks onto the other one.
pub fn create_client(http: &HttpConfig, accept_invalid_certs: bool) -> reqwest::Result<Client> {
    if accept_invalid_certs {
        tracing::warn!("TLS certificate verification is disabled for the translator");
    }

    Client::builder()
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .danger_accept_invalid_certs(accept_invalid_certs)
        .user_agent(concat!("telugu-songs/", env!("CARGO_PKG_VERSION")))
        .build()
}
