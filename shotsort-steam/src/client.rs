use std::time::Duration;

use crate::error::SteamError;
use crate::types::{AppEntry, AppListResponse};

const BASE_URL: &str = "https://api.steampowered.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Steam Web API.
pub struct SteamClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SteamClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, SteamError> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a client against a different API host.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SteamError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full Steam app listing.
    pub async fn fetch_app_list(&self) -> Result<Vec<AppEntry>, SteamError> {
        let url = format!("{}/ISteamApps/GetAppList/v2/", self.base_url);
        log::debug!("Requesting {url}");

        let resp = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("format", "json")])
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(SteamError::InvalidKey);
        }
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(SteamError::Server {
                status: status.as_u16(),
                message: snippet(&text).to_string(),
            });
        }

        let apps = parse_app_list(&text)?;
        log::debug!("Steam returned {} apps", apps.len());
        Ok(apps)
    }
}

/// Parse a GetAppList response body.
pub fn parse_app_list(body: &str) -> Result<Vec<AppEntry>, SteamError> {
    let response: AppListResponse = serde_json::from_str(body).map_err(|e| {
        SteamError::Api(format!(
            "Failed to parse app list: {e}. Response: {}",
            snippet(body)
        ))
    })?;
    Ok(response.applist.apps)
}

/// First 200 bytes of a body, cut on a char boundary.
fn snippet(text: &str) -> &str {
    let mut end = text.len().min(200);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
