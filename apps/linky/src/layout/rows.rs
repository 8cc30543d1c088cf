//! Row Planner: turns a profile into the ordered bands of the content column.
//!
//! The first five rows are fixed (spacer, avatar, spacer, handle, spacer) and
//! never omitted. Every link then contributes one tile row, in the order the
//! profile lists them, which is also the order they stack on the page.

use crate::models::{Link, Profile};

// ────────────────────────────────────────────────────────────────────────────
// Dimensions (CSS px)
// ────────────────────────────────────────────────────────────────────────────

pub const TOP_GAP_PX: u32 = 35;
pub const AVATAR_SIZE_PX: u32 = 96;
pub const AVATAR_GAP_PX: u32 = 10;
pub const HANDLE_HEIGHT_PX: u32 = 30;
pub const HANDLE_GAP_PX: u32 = 15;

/// Height of the visible link tile.
pub const LINK_HEIGHT_PX: u32 = 65;
/// Padding above and below each tile inside its row.
pub const LINK_PADDING_PX: u32 = 10;
/// Full row height for a link tile.
pub const LINK_ROW_HEIGHT_PX: u32 = LINK_HEIGHT_PX + 2 * LINK_PADDING_PX;

/// Number of rows emitted regardless of the profile's links.
pub const FIXED_ROW_COUNT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Row types
// ────────────────────────────────────────────────────────────────────────────

/// What a row renders. Evaluated by the page renderer, not by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    /// Empty band; renders nothing.
    Spacer,
    /// Circular profile picture for the named profile.
    Avatar { profile_name: String },
    /// The `@name` label.
    Handle { text: String },
    /// One clickable link tile.
    LinkTile(Link),
}

/// One horizontal band of the content grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub height_px: u32,
    pub content: RowContent,
}

impl Row {
    pub fn spacer(height_px: u32) -> Self {
        Row {
            height_px,
            content: RowContent::Spacer,
        }
    }

    /// The row's `grid-template-rows` track, e.g. `35px`.
    pub fn track(&self) -> String {
        format!("{}px", self.height_px)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Planning
// ────────────────────────────────────────────────────────────────────────────

/// Builds the rows for a profile page.
///
/// Never fails. A missing or odd `profile_name` only shows up as odd text
/// (`@` followed by whatever was given).
pub fn plan_rows(profile_name: &str, profile: &Profile) -> Vec<Row> {
    let links = profile.links();
    let mut rows = Vec::with_capacity(FIXED_ROW_COUNT + links.len());

    rows.push(Row::spacer(TOP_GAP_PX));
    rows.push(Row {
        height_px: AVATAR_SIZE_PX,
        content: RowContent::Avatar {
            profile_name: profile_name.to_string(),
        },
    });
    rows.push(Row::spacer(AVATAR_GAP_PX));
    rows.push(Row {
        height_px: HANDLE_HEIGHT_PX,
        content: RowContent::Handle {
            text: handle_text(profile_name),
        },
    });
    rows.push(Row::spacer(HANDLE_GAP_PX));

    rows.extend(links.iter().map(|link| Row {
        height_px: LINK_ROW_HEIGHT_PX,
        content: RowContent::LinkTile(link.clone()),
    }));

    rows
}

pub fn handle_text(profile_name: &str) -> String {
    format!("@{profile_name}")
}
