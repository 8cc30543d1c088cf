use axum::extract::{Path, Query, State};
use maud::Markup;

use crate::errors::AppError;
use crate::models::PageProps;
use crate::profile::load_page_props;
use crate::render::{render_profile_page, ViewportProbe, ViewportQuery};
use crate::state::AppState;

/// GET /:profile
///
/// Renders the public page for `profile`. `?w=&h=` carry the browser size
/// reported by the viewport probe; without them the page is rendered at
/// `0×0` and asks for them.
pub async fn handle_profile_page(
    State(state): State<AppState>,
    Path(profile_name): Path<String>,
    Query(viewport): Query<ViewportQuery>,
) -> Result<Markup, AppError> {
    let probe = ViewportProbe::from(viewport);

    match load_page_props(state.profiles.as_ref(), &profile_name).await {
        PageProps::Profile {
            profile_name,
            profile,
        } => Ok(render_profile_page(
            &state.page_settings,
            &profile_name,
            &profile,
            &probe,
        )),
        PageProps::Error(e) => Err(AppError::Render(e)),
    }
}

/// Anything that is not a profile page.
pub async fn handle_not_found() -> AppError {
    AppError::NotFound("This page could not be found".to_string())
}
