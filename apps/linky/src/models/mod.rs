pub mod profile;

pub use profile::{Link, PageProps, Profile, RenderError};
