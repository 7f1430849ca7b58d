use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::use_theme;
use crate::{
    profile,
    scroll::{Bounds, Metrics, ScrollState, Section},
};

fn read_metrics() -> Option<Metrics> {
    let window = window();
    let root = document().document_element()?;
    Some(Metrics {
        scroll_top: window.scroll_y().ok()?,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

fn section_bounds(section: Section) -> Option<Bounds> {
    let rect = document()
        .get_element_by_id(section.id())?
        .get_bounding_client_rect();
    Some(Bounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Keeps a [`ScrollState`] in sync with window scrolling.
pub fn use_scroll_tracker() -> RwSignal<ScrollState> {
    let state = RwSignal::new(ScrollState::default());
    let refresh = move || {
        if let Some(m) = read_metrics() {
            state.update(|s| *s = s.on_scroll(m, section_bounds));
        }
    };
    // effects only run in the browser
    Effect::new(move |_| refresh());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| refresh());
    state
}

pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section {section}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
fn Logo() -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let theme = use_theme();
    view! {
        <Show
            when=move || !broken.get()
            fallback=move || {
                view! {
                    <span class=move || {
                        format!("text-xl font-bold tracking-tight {}", theme.get().classes().accent)
                    }>{profile::DOMAIN}</span>
                }
            }
        >
            <img
                src=profile::LOGO_PATH
                alt=profile::OWNER
                class="h-9 w-9 rounded-full object-cover"
                on:error=move |_| set_broken.set(true)
            />
        </Show>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            aria-label="Toggle dark mode"
            class=move || {
                format!(
                    "w-10 h-10 rounded-full border transition-transform duration-300 hover:rotate-12 {}",
                    theme.get().classes().button_ghost,
                )
            }
            on:click=move |_| {
                theme.update(|t| *t = t.toggled());
                log::debug!("theme switched to {}", theme.get_untracked().scheme());
            }
        >
            {move || theme.get().toggle_label()}
        </button>
    }
}

#[component]
pub fn Nav(scroll: RwSignal<ScrollState>, scroll_to: Callback<Section>) -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);

    let link = move |section: Section| {
        view! {
            <li>
                <button
                    type="button"
                    class=move || {
                        let c = theme.get().classes();
                        let state = if scroll.get().active == section {
                            c.nav_link_active
                        } else {
                            c.nav_link
                        };
                        format!("px-3 py-2 transition-colors duration-200 {state}")
                    }
                    aria-current=move || (scroll.get().active == section).then_some("true")
                    on:click=move |_| {
                        set_menu_open.set(false);
                        scroll_to.run(section);
                    }
                >
                    {section.label()}
                </button>
            </li>
        }
    };

    view! {
        <header class=move || {
            format!("fixed top-0 inset-x-0 z-40 border-b {} {}", theme.get().classes().nav, theme.get().classes().border)
        }>
            <div
                class=move || format!("h-1 transition-[width] duration-150 {}", theme.get().classes().progress)
                style=move || format!("width: {:.2}%;", scroll.get().progress)
            ></div>
            <nav class="max-w-6xl mx-auto flex items-center justify-between px-4 py-3">
                <button
                    type="button"
                    aria-label="Back to top"
                    on:click=move |_| scroll_to.run(Section::Home)
                >
                    <Logo />
                </button>
                <ul class="hidden md:flex items-center gap-1">
                    {Section::NAV.into_iter().map(link).collect_view()}
                </ul>
                <div class="flex items-center gap-3">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="md:hidden text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden flex flex-col items-center gap-2 pb-4">
                    {Section::NAV.into_iter().map(link).collect_view()}
                </ul>
            </Show>
        </header>
    }
}

#[component]
pub fn ScrollTopButton(visible: Signal<bool>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            aria-label="Scroll to top"
            class=move || {
                let shown = if visible.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-4 pointer-events-none"
                };
                format!(
                    "fixed bottom-6 right-6 z-40 w-12 h-12 rounded-full transition-all duration-300 {} {} {shown}",
                    theme.get().classes().button,
                    theme.get().classes().shadow,
                )
            }
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
