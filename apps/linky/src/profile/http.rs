use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::models::Profile;
use crate::profile::{ProfileSource, ProfileSourceError};

/// Fetches profiles from `GET <base>/<profile_name>` on an external service.
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    client: Client,
    base: Url,
}

impl HttpProfileSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProfileSourceError> {
        let base = Url::parse(base_url)
            .map_err(|e| ProfileSourceError::InvalidBase(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ProfileSourceError::InvalidBase(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    /// URL for one profile. The name is appended as a single, percent-encoded segment.
    pub fn profile_url(&self, profile_name: &str) -> Result<Url, ProfileSourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ProfileSourceError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .push(profile_name);
        Ok(url)
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    fn kind(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, profile_name: &str) -> Result<Profile, ProfileSourceError> {
        let url = self.profile_url(profile_name)?;
        debug!("Fetching profile from {url}");

        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ProfileSourceError::NotFound(profile_name.to_string())),
            status if !status.is_success() => Err(ProfileSourceError::Status(status.as_u16())),
            _ => {
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
        }
    }
}
