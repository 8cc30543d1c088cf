//! Page grid geometry.
//!
//! The page is a three-column grid: two flexible gutters around a content
//! column capped at 640px. Every row sits in the middle column at the grid
//! row matching its planning order, so the side columns are always empty.

use crate::layout::rows::Row;

/// Maximum width of the content column.
pub const CONTENT_MAX_WIDTH_PX: u32 = 640;

/// 1-based grid line of the content column's left edge.
pub const CONTENT_COLUMN: usize = 2;

/// `grid-template-columns` for the outer page grid.
pub fn column_template() -> String {
    format!("1fr minmax(auto, {CONTENT_MAX_WIDTH_PX}px) 1fr")
}

/// Where one row lands in the page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column_start: usize,
    pub column_end: usize,
    pub row_start: usize,
    pub row_end: usize,
    /// Distance from the top of the grid to this row's top edge.
    pub top_px: u32,
    pub height_px: u32,
}

impl Placement {
    /// Inline `grid-*` declarations for the row's cell.
    pub fn style(&self) -> String {
        format!(
            "grid-column-start: {}; grid-column-end: {}; grid-row-start: {}; grid-row-end: {}; display: grid;",
            self.column_start, self.column_end, self.row_start, self.row_end
        )
    }
}

/// Resolved geometry for a row sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: String,
    pub rows: String,
    pub placements: Vec<Placement>,
}

impl GridLayout {
    /// Lays rows out top to bottom. Row `i`'s top is the sum of all earlier heights.
    pub fn for_rows(rows: &[Row]) -> Self {
        let mut top_px = 0;
        let placements = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let placement = Placement {
                    column_start: CONTENT_COLUMN,
                    column_end: CONTENT_COLUMN + 1,
                    row_start: i + 1,
                    row_end: i + 2,
                    top_px,
                    height_px: row.height_px,
                };
                top_px += row.height_px;
                placement
            })
            .collect();

        GridLayout {
            columns: column_template(),
            rows: rows.iter().map(Row::track).collect::<Vec<_>>().join(" "),
            placements,
        }
    }

    /// Bottom edge of the last row.
    pub fn total_height_px(&self) -> u32 {
        self.placements
            .last()
            .map_or(0, |last| last.top_px + last.height_px)
    }

    /// Inline style for the outer grid container.
    pub fn container_style(&self) -> String {
        format!(
            "display: grid; grid-template-columns: {}; grid-template-rows: {};",
            self.columns, self.rows
        )
    }
}
