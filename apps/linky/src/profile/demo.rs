use async_trait::async_trait;

use crate::models::{Link, Profile};
use crate::profile::{ProfileSource, ProfileSourceError};

/// Serves the same built-in profile for every name.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProfileSource;

pub fn demo_profile() -> Profile {
    let link = |id: &str, title: &str, url: &str| Link {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
    };

    Profile {
        links: Some(vec![
            link(
                "c490f22a-477c-4504-8db2-f3a9a9bf4eb0",
                "🎹 Latest Tunes 🎹",
                "https://soundcloud.com/user-92404752",
            ),
            link(
                "dd1c1afb-a952-4ad9-afab-9d4577e44ec7",
                "🎹 Slightly Older Tunes 🎹",
                "https://soundcloud.com/glidepro",
            ),
            link(
                "291ea290-9723-4a77-9390-6b10059eaaa4",
                "🚧 Disperse - Site Builder Site Project 🚧",
                "https://brooklyn.dsprs.me/",
            ),
        ]),
    }
}

#[async_trait]
impl ProfileSource for StaticProfileSource {
    fn kind(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self, _profile_name: &str) -> Result<Profile, ProfileSourceError> {
        Ok(demo_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_name_gets_the_demo_links() {
        let a = StaticProfileSource.fetch("alice").await.unwrap();
        let b = StaticProfileSource.fetch("bob").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.links()[0].title, "🎹 Latest Tunes 🎹");
        assert_eq!(a.links()[2].url, "https://brooklyn.dsprs.me/");
    }
}
