//! Scroll-position bookkeeping for the navigation bar.

use std::fmt;

/// Distance from the viewport top that decides which section is active.
pub const ACTIVE_OFFSET: f64 = 100.0;
/// Scroll depth past which the "back to top" button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Work,
    Services,
    Pricing,
    Blog,
    Contact,
}

impl Section {
    /// Sections checked by the tracker, in priority order.
    pub const TRACKED: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Work,
        Section::Services,
        Section::Pricing,
        Section::Contact,
    ];

    /// Nav bar order.
    pub const NAV: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Work,
        Section::Services,
        Section::Pricing,
        Section::Blog,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Work => "work",
            Self::Services => "services",
            Self::Pricing => "pricing",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Work => "Work",
            Self::Services => "Services",
            Self::Pricing => "Pricing",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn straddles(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Percent of the document scrolled, 0 when there is nothing to scroll.
pub fn progress(m: Metrics) -> f64 {
    let scrollable = m.scroll_height - m.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (m.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn show_scroll_top(scroll_top: f64) -> bool {
    scroll_top > SCROLL_TOP_THRESHOLD
}

/// First tracked section whose box crosses [`ACTIVE_OFFSET`].
///
/// `bounds` returns `None` for sections not present in the document.
pub fn active_section<F>(bounds: F) -> Option<Section>
where
    F: Fn(Section) -> Option<Bounds>,
{
    Section::TRACKED
        .into_iter()
        .find(|s| bounds(*s).is_some_and(|b| b.straddles(ACTIVE_OFFSET)))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub show_scroll_top: bool,
    pub active: Section,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            show_scroll_top: false,
            active: Section::Home,
        }
    }
}

impl ScrollState {
    /// Folds one scroll event into the state. The active section is kept
    /// when no tracked section crosses the offset.
    pub fn on_scroll<F>(self, m: Metrics, bounds: F) -> Self
    where
        F: Fn(Section) -> Option<Bounds>,
    {
        Self {
            progress: progress(m),
            show_scroll_top: show_scroll_top(m.scroll_top),
            active: active_section(bounds).unwrap_or(self.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(sections: &[(Section, f64, f64)]) -> impl Fn(Section) -> Option<Bounds> + '_ {
        move |s| {
            sections
                .iter()
                .find(|(id, _, _)| *id == s)
                .map(|(_, top, bottom)| Bounds {
                    top: *top,
                    bottom: *bottom,
                })
        }
    }

    #[test]
    fn test_progress() {
        let m = Metrics {
            scroll_top: 500.0,
            scroll_height: 2000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(progress(m), 50.0);
        assert_eq!(
            progress(Metrics {
                scroll_top: 0.0,
                ..m
            }),
            0.0
        );
        assert_eq!(
            progress(Metrics {
                scroll_top: 1000.0,
                ..m
            }),
            100.0
        );
    }

    #[test]
    fn test_progress_short_document() {
        let m = Metrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            viewport_height: 900.0,
        };
        assert_eq!(progress(m), 0.0);
    }

    #[test]
    fn test_progress_clamps_overscroll() {
        let m = Metrics {
            scroll_top: 1200.0,
            scroll_height: 2000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(progress(m), 100.0);
    }

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!show_scroll_top(0.0));
        assert!(!show_scroll_top(500.0));
        assert!(show_scroll_top(500.5));
    }

    #[test]
    fn test_active_section_straddles_offset() {
        let sections = [
            (Section::Home, -900.0, -100.0),
            (Section::About, -100.0, 400.0),
            (Section::Work, 400.0, 1200.0),
        ];
        assert_eq!(active_section(layout(&sections)), Some(Section::About));
    }

    #[test]
    fn test_active_section_edges_inclusive() {
        let top_edge = [(Section::Work, 100.0, 600.0)];
        assert_eq!(active_section(layout(&top_edge)), Some(Section::Work));
        let bottom_edge = [(Section::Work, -400.0, 100.0)];
        assert_eq!(active_section(layout(&bottom_edge)), Some(Section::Work));
    }

    #[test]
    fn test_active_section_tie_uses_list_order() {
        // overlapping boxes: pricing is listed before contact
        let sections = [
            (Section::Contact, 0.0, 800.0),
            (Section::Pricing, 50.0, 300.0),
        ];
        assert_eq!(active_section(layout(&sections)), Some(Section::Pricing));
    }

    #[test]
    fn test_blog_is_not_tracked() {
        let sections = [(Section::Blog, 0.0, 800.0)];
        assert_eq!(active_section(layout(&sections)), None);
    }

    #[test]
    fn test_on_scroll_keeps_previous_when_nothing_matches() {
        let m = Metrics {
            scroll_top: 600.0,
            scroll_height: 3000.0,
            viewport_height: 1000.0,
        };
        let state = ScrollState {
            active: Section::Services,
            ..Default::default()
        };
        let next = state.on_scroll(m, layout(&[]));
        assert_eq!(next.active, Section::Services);
        assert!(next.show_scroll_top);
        assert_eq!(next.progress, 30.0);

        let next = next.on_scroll(m, layout(&[(Section::Pricing, 90.0, 500.0)]));
        assert_eq!(next.active, Section::Pricing);
    }
}
