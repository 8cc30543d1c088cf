// HTML rendering: profile page, error page and the image references they embed.
// Markup is built with maud, which escapes all interpolated profile data.

pub mod error_view;
pub mod images;
pub mod page;
pub mod viewport;

pub use error_view::render_error_page;
pub use images::ImageSource;
pub use page::{render_profile_page, PageSettings};
pub use viewport::{ViewportProbe, ViewportQuery};
