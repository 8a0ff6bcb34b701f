use std::time::Duration;

use reqwest::Client;

/// HTTP client shared by the backend adapters.
pub fn default_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("budget/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Extends `base` with `segments`, percent-encoding each one.
pub(crate) fn join_segments(base: &reqwest::Url, segments: &[&str]) -> Result<reqwest::Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{base} cannot be used as a base url"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
