//! Viewport probing.
//!
//! The server cannot see the browser window, so the first response is rendered
//! at `0×0` and carries a one-shot script that reloads the page with `w`/`h`
//! query parameters. The second request has a size and no script, so each
//! visit costs at most one re-render and nothing polls.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// `?w=<px>&h=<px>` as sent back by the probe script.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ViewportQuery {
    pub w: Option<u32>,
    pub h: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportProbe {
    /// Size not reported yet; render with a zero viewport and ask for it.
    Pending,
    /// The browser reported its size.
    Ready(Viewport),
}

const PROBE_SCRIPT: &str = "(function(){var u=new URL(window.location.href);\
if(u.searchParams.has('w')&&u.searchParams.has('h')){return;}\
u.searchParams.set('w',String(window.innerWidth));\
u.searchParams.set('h',String(window.innerHeight));\
window.location.replace(u.toString());})();";

impl From<ViewportQuery> for ViewportProbe {
    fn from(query: ViewportQuery) -> Self {
        match (query.w, query.h) {
            (Some(width), Some(height)) => ViewportProbe::Ready(Viewport { width, height }),
            _ => ViewportProbe::Pending,
        }
    }
}

impl ViewportProbe {
    /// The size to render with. Zero until the probe has reported.
    pub fn viewport(&self) -> Viewport {
        match self {
            ViewportProbe::Pending => Viewport::default(),
            ViewportProbe::Ready(viewport) => *viewport,
        }
    }

    /// Script to embed in the page, present only while the size is unknown.
    pub fn script(&self) -> Option<&'static str> {
        match self {
            ViewportProbe::Pending => Some(PROBE_SCRIPT),
            ViewportProbe::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dimensions_leave_probe_pending() {
        for query in [
            ViewportQuery { w: None, h: None },
            ViewportQuery {
                w: Some(800),
                h: None,
            },
            ViewportQuery {
                w: None,
                h: Some(600),
            },
        ] {
            let probe = ViewportProbe::from(query);
            assert_eq!(probe, ViewportProbe::Pending);
            assert_eq!(probe.viewport(), Viewport::default());
            assert!(probe.script().is_some());
        }
    }

    #[test]
    fn reported_dimensions_stop_probing() {
        let probe = ViewportProbe::from(ViewportQuery {
            w: Some(1024),
            h: Some(768),
        });
        assert_eq!(
            probe.viewport(),
            Viewport {
                width: 1024,
                height: 768
            }
        );
        assert!(probe.script().is_none());
    }

    #[test]
    fn reported_zero_size_is_still_final() {
        let probe = ViewportProbe::from(ViewportQuery {
            w: Some(0),
            h: Some(0),
        });
        assert!(probe.script().is_none());
        assert_eq!(probe.viewport(), Viewport::default());
    }
}
