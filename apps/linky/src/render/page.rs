//! Grid Renderer: turns planned rows into the profile page markup.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use tracing::debug;

use crate::layout::grid::GridLayout;
use crate::layout::rows::{
    plan_rows, Row, RowContent, AVATAR_SIZE_PX, LINK_HEIGHT_PX, LINK_PADDING_PX,
};
use crate::models::{Link, Profile};
use crate::render::images::{link_image_display_px, ImageSource, BLUR_PX};
use crate::render::viewport::ViewportProbe;

/// Per-deployment values the renderer needs besides the profile itself.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub app_name: String,
    pub images: ImageSource,
}

/// Styles applied once per page, independent of the rows.
pub fn global_styles() -> String {
    format!(
        "body {{ margin: 0; padding: 0; font-family: 'Open Sans', sans-serif; background-color: black; }}\n\
         *:not(input, textarea) {{ user-select: none; }}\n\
         .link-tile {{ display: grid; grid-column-start: 2; grid-column-end: 3; grid-row-start: 2; grid-row-end: 3; \
         grid-template-columns: auto 1fr auto; grid-template-rows: auto; outline: 2px solid white; cursor: pointer; \
         background-color: transparent; color: white; transform: translate3d(0, 0, 0); transition: all 0.25s; }}\n\
         .link-tile:hover {{ background-color: white; color: black; }}\n\
         .link-tile-frame {{ display: grid; grid-template-columns: {pad}px auto {pad}px; grid-template-rows: {pad}px {link}px {pad}px; }}",
        pad = LINK_PADDING_PX,
        link = LINK_HEIGHT_PX,
    )
}

/// Fixed, blurred, viewport-covering background image.
///
/// Oversized and pulled out by twice the blur radius on every side so the
/// blurred edges fall outside the window.
pub fn background_image(src: &str, alt: &str) -> Markup {
    let overscan = BLUR_PX * 2;
    let style = format!(
        "position: fixed; width: calc(100% + {grow}px); height: calc(100vh + {grow}px); \
         top: -{overscan}px; left: -{overscan}px; z-index: -100; object-fit: cover; \
         object-position: center; filter: blur({BLUR_PX}px); pointer-events: none;",
        grow = BLUR_PX * 4,
    );

    html! {
        img src=(src) alt=(alt) style=(style);
    }
}

/// Lays `rows` out in the centred content column, with `background` behind them.
pub fn render_page(
    rows: &[Row],
    images: &ImageSource,
    background: impl FnOnce() -> Markup,
) -> Markup {
    let grid = GridLayout::for_rows(rows);
    debug!(
        rows = grid.placements.len(),
        height_px = grid.total_height_px(),
        "laid out content grid"
    );

    html! {
        (background())
        style { (PreEscaped(global_styles())) }
        div style=(grid.container_style()) {
            @for (row, placement) in rows.iter().zip(&grid.placements) {
                div style=(placement.style()) {
                    (render_row(row, images))
                }
            }
        }
    }
}

fn render_row(row: &Row, images: &ImageSource) -> Markup {
    match &row.content {
        RowContent::Spacer => html! {},
        RowContent::Avatar { profile_name } => {
            let style = format!(
                "width: {AVATAR_SIZE_PX}px; height: {AVATAR_SIZE_PX}px; border-radius: 999px;"
            );
            html! {
                div style="place-self: center;" {
                    img src=(images.avatar()) alt={ "Profile image for " (profile_name) } style=(style);
                }
            }
        }
        RowContent::Handle { text } => html! {
            div style="place-self: center;" {
                div style="text-align: center; color: white;" { (text) }
            }
        },
        RowContent::LinkTile(link) => render_link_tile(link, images),
    }
}

fn render_link_tile(link: &Link, images: &ImageSource) -> Markup {
    let image_px = link_image_display_px();
    let image_style = format!("width: {image_px}px; height: {image_px}px; border-radius: 999px;");
    let balance_style =
        format!("width: {LINK_HEIGHT_PX}px; height: {LINK_HEIGHT_PX}px; visibility: hidden;");

    html! {
        a style="text-decoration: none;" href=(link.url) rel="noopener" target="_blank" {
            div class="link-tile-frame" data-link-id=(link.id) {
                div class="link-tile" {
                    div style="display: grid; grid-column-start: 1; grid-column-end: 2; place-self: center; padding: 4px;" {
                        img src=(images.link_decoration()) alt="" style=(image_style);
                    }
                    div style="display: grid; grid-column-start: 2; grid-column-end: 3; place-self: center; text-align: center; padding: 5px;" {
                        (link.title)
                    }
                    div style="display: grid; grid-column-start: 3; grid-column-end: 4; place-self: center;" {
                        div style=(balance_style) {}
                    }
                }
            }
        }
    }
}

/// Wraps page content in a complete HTML document.
pub fn document(title: &str, description: &str, body: Markup, script: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
            }
            body {
                (body)
                @if let Some(script) = script {
                    script { (PreEscaped(script)) }
                }
            }
        }
    }
}

/// Plans and renders the full profile page document.
pub fn render_profile_page(
    settings: &PageSettings,
    profile_name: &str,
    profile: &Profile,
    probe: &ViewportProbe,
) -> Markup {
    let rows = plan_rows(profile_name, profile);
    debug!(
        profile = profile_name,
        viewport = ?probe.viewport(),
        "rendering profile page"
    );

    let background_src = settings.images.background(probe.viewport());
    let background_alt = format!("Background image for {profile_name}");
    let body = render_page(&rows, &settings.images, || {
        background_image(&background_src, &background_alt)
    });

    document(
        &format!("{} | {profile_name}", settings.app_name),
        &settings.app_name,
        body,
        probe.script(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::viewport::Viewport;

    fn settings() -> PageSettings {
        PageSettings {
            app_name: "Awesome Linky Thingy".to_string(),
            images: ImageSource::default(),
        }
    }

    fn site_link() -> Link {
        Link {
            id: "x".to_string(),
            title: "My Site".to_string(),
            url: "https://x.com".to_string(),
        }
    }

    fn ready(width: u32, height: u32) -> ViewportProbe {
        ViewportProbe::Ready(Viewport { width, height })
    }

    #[test]
    fn link_tile_is_a_new_context_anchor_with_title() {
        let html = render_link_tile(&site_link(), &ImageSource::default()).into_string();
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"href="https://x.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener""#));
        assert!(html.contains(">My Site</div>"));
        assert!(html.contains(r#"data-link-id="x""#));
        assert!(html.contains("visibility: hidden;"));
    }

    #[test]
    fn handle_row_renders_at_name() {
        let rows = plan_rows("alice", &Profile::default());
        let html = render_row(&rows[3], &ImageSource::default()).into_string();
        assert!(html.contains(">@alice</div>"));
    }

    #[test]
    fn spacer_renders_nothing() {
        let html = render_row(&Row::spacer(35), &ImageSource::default()).into_string();
        assert_eq!(html, "");
    }

    #[test]
    fn avatar_is_circular_and_labelled() {
        let rows = plan_rows("alice", &Profile::default());
        let html = render_row(&rows[1], &ImageSource::default()).into_string();
        assert!(html.contains(r#"src="https://source.unsplash.com/192x192/?face""#));
        assert!(html.contains(r#"alt="Profile image for alice""#));
        assert!(html.contains("width: 96px; height: 96px; border-radius: 999px;"));
    }

    #[test]
    fn page_has_one_cell_per_row_in_order() {
        let profile = Profile {
            links: Some(vec![
                site_link(),
                Link {
                    id: "y".to_string(),
                    title: "Other".to_string(),
                    url: "https://y.com".to_string(),
                },
            ]),
        };
        let rows = plan_rows("alice", &profile);
        let html = render_page(&rows, &ImageSource::default(), || html! {}).into_string();

        assert_eq!(
            html.matches(r#"style="grid-column-start: 2; grid-column-end: 3;"#)
                .count(),
            rows.len()
        );
        assert!(html.contains("grid-template-rows: 35px 96px 10px 30px 15px 85px 85px;"));
        assert!(html.contains("grid-template-columns: 1fr minmax(auto, 640px) 1fr;"));
        let first = html.find("https://x.com").unwrap();
        let second = html.find("https://y.com").unwrap();
        assert!(first < second);
    }

    #[test]
    fn background_is_rendered_before_content() {
        let rows = plan_rows("alice", &Profile::default());
        let html = render_page(&rows, &ImageSource::default(), || {
            background_image("bg.png", "bg")
        })
        .into_string();
        assert!(html.starts_with(r#"<img src="bg.png""#));
        assert!(html.contains("filter: blur(12px);"));
        assert!(html.contains("top: -24px; left: -24px; z-index: -100;"));
        assert!(html.contains("width: calc(100% + 48px); height: calc(100vh + 48px);"));
    }

    #[test]
    fn global_styles_reset_body_and_selection() {
        let css = global_styles();
        assert!(css.contains("font-family: 'Open Sans', sans-serif; background-color: black;"));
        assert!(css.contains("*:not(input, textarea) { user-select: none; }"));
        assert!(css.contains(".link-tile:hover { background-color: white; color: black; }"));
    }

    #[test]
    fn document_carries_title_and_description() {
        let html =
            render_profile_page(&settings(), "alice", &Profile::default(), &ready(1280, 720))
                .into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Awesome Linky Thingy | alice</title>"));
        assert!(html.contains(r#"<meta name="description" content="Awesome Linky Thingy">"#));
        assert!(html.contains("https://source.unsplash.com/426x240/?night"));
        assert!(html.contains(r#"alt="Background image for alice""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn pending_probe_renders_placeholder_and_script() {
        let html = render_profile_page(
            &settings(),
            "alice",
            &Profile::default(),
            &ViewportProbe::Pending,
        )
        .into_string();
        assert!(html.contains("data:image/gif;base64,"));
        assert!(html.contains("<script>"));
        assert!(html.contains("window.innerWidth"));
    }

    #[test]
    fn profile_text_is_escaped() {
        let profile = Profile {
            links: Some(vec![Link {
                id: "evil".to_string(),
                title: "<b>bold</b>".to_string(),
                url: "https://e.com/?a=1&b=\"2\"".to_string(),
            }]),
        };
        let html =
            render_profile_page(&settings(), "<alice>", &profile, &ready(900, 900)).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("@&lt;alice&gt;"));
        assert!(html.contains("href=\"https://e.com/?a=1&amp;b=&quot;2&quot;\""));
        assert!(!html.contains("<b>bold</b>"));
    }
}
