//! Image references synthesized from pixel dimensions.
//!
//! All references point at an external image service keyed by `<w>x<h>` and a
//! search term. Nothing here checks that the images exist.

use crate::layout::rows::{AVATAR_SIZE_PX, LINK_HEIGHT_PX};
use crate::render::viewport::Viewport;

/// Blur radius applied to the page background.
pub const BLUR_PX: u32 = 12;

/// Background pixels are fetched at `1 / (BLUR_PX / 4)` of the viewport size;
/// the blur hides the missing detail.
pub const BACKGROUND_DOWNSCALE: u32 = BLUR_PX / 4;

/// Inset of the decorative image inside a link tile.
pub const LINK_IMAGE_INSET_PX: u32 = 8;

/// 1×1 transparent GIF shown until the viewport size is known.
pub const TRANSPARENT_GIF: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAP///wAAACH5BAEAAAAALAAAAAABAAEAAAICRAEAOw==";

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://source.unsplash.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    base_url: String,
}

impl Default for ImageSource {
    fn default() -> Self {
        ImageSource::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ImageSource { base_url }
    }

    fn sized(&self, width: u32, height: u32, term: &str) -> String {
        format!("{}/{width}x{height}/?{term}", self.base_url)
    }

    /// Night-sky background scaled down from the viewport.
    ///
    /// Falls back to the transparent placeholder when either scaled dimension
    /// is zero, which covers the not-yet-probed `0×0` viewport.
    pub fn background(&self, viewport: Viewport) -> String {
        let width = viewport.width / BACKGROUND_DOWNSCALE;
        let height = viewport.height / BACKGROUND_DOWNSCALE;
        if width == 0 || height == 0 {
            return TRANSPARENT_GIF.to_string();
        }
        self.sized(width, height, "night")
    }

    /// Avatar at twice its display size for high-density screens.
    pub fn avatar(&self) -> String {
        let side = AVATAR_SIZE_PX * 2;
        self.sized(side, side, "face")
    }

    pub fn link_decoration(&self) -> String {
        let side = LINK_HEIGHT_PX * 2 - LINK_IMAGE_INSET_PX;
        self.sized(side, side, "water")
    }
}

/// Displayed side of a link tile's decorative image.
pub fn link_image_display_px() -> u32 {
    LINK_HEIGHT_PX - LINK_IMAGE_INSET_PX
}
