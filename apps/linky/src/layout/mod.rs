// Page layout: row planning and grid geometry.
// Both halves are pure; the renderer turns their output into markup.

pub mod grid;
pub mod rows;
