use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::models::Profile;
use crate::profile::{ProfileSource, ProfileSourceError};

/// Profiles loaded once from a JSON object keyed by profile name.
#[derive(Debug, Clone, Default)]
pub struct JsonFileProfileSource {
    profiles: HashMap<String, Profile>,
}

impl JsonFileProfileSource {
    pub fn from_json(json: &str) -> Result<Self, ProfileSourceError> {
        let profiles: HashMap<String, Profile> = serde_json::from_str(json)?;
        Ok(Self { profiles })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ProfileSourceError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let source = Self::from_json(&json)?;
        info!(
            "Loaded {} profiles from {}",
            source.profile_count(),
            path.display()
        );
        Ok(source)
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

#[async_trait]
impl ProfileSource for JsonFileProfileSource {
    fn kind(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, profile_name: &str) -> Result<Profile, ProfileSourceError> {
        self.profiles
            .get(profile_name)
            .cloned()
            .ok_or_else(|| ProfileSourceError::NotFound(profile_name.to_string()))
    }
}
