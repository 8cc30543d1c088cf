//! Generic error page shown instead of a profile.

use maud::{html, Markup};

use crate::models::RenderError;
use crate::render::page::document;

const CONTAINER_STYLE: &str = "font-family: -apple-system, BlinkMacSystemFont, Roboto, 'Segoe UI', 'Fira Sans', Avenir, 'Helvetica Neue', 'Lucida Grande', sans-serif; \
     height: 100vh; text-align: center; display: flex; flex-direction: column; align-items: center; justify-content: center;";
const CODE_STYLE: &str = "display: inline-block; border-right: 1px solid rgba(0, 0, 0, 0.3); margin: 0 20px 0 0; \
     padding: 10px 23px 10px 0; font-size: 24px; font-weight: 500; vertical-align: top;";
const TITLE_STYLE: &str = "font-size: 14px; font-weight: normal; line-height: inherit; margin: 0; padding: 0;";

/// `<status> | <title>` on an otherwise empty page. No profile content.
pub fn render_error_page(app_name: &str, error: &RenderError) -> Markup {
    let body = html! {
        div style=(CONTAINER_STYLE) {
            div {
                h1 style=(CODE_STYLE) { (error.status_code) }
                div style="display: inline-block; text-align: left; line-height: 49px; height: 49px; vertical-align: middle;" {
                    h2 style=(TITLE_STYLE) { (error.title) }
                }
            }
        }
    };

    document(
        &format!("{}: {}", error.status_code, error.title),
        app_name,
        body,
        None,
    )
}
