use serde::{Deserialize, Serialize};

/// A single outbound link shown as a tile on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Opaque identifier. Expected to be unique within a profile but never checked.
    pub id: String,
    /// Display text. May contain emoji; long titles are not truncated.
    pub title: String,
    /// Absolute URL the tile opens in a new browsing context.
    pub url: String,
}

/// The record behind a public profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl Profile {
    /// Links in display order. Absent links read as an empty slice.
    pub fn links(&self) -> &[Link] {
        self.links.as_deref().unwrap_or_default()
    }
}

/// A failed profile lookup as presented to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderError {
    pub status_code: u16,
    pub title: String,
}

/// Everything one page render needs: either a profile or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageProps {
    Profile {
        profile_name: String,
        profile: Profile,
    },
    Error(RenderError),
}
