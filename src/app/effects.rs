use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{use_element_visibility, use_interval_fn};

use super::use_theme;
use crate::motion::{petals, Tilt, Typewriter, MAX_TILT_DEG, PETAL_COUNT, TYPEWRITER_TICK};

#[component]
pub fn Petals(#[prop(default = PETAL_COUNT)] count: usize) -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
            {petals(count)
                .into_iter()
                .map(|p| view! { <span class="petal" style=p.style()></span> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn TypewriterText(phrases: &'static [&'static str]) -> impl IntoView {
    let state = RwSignal::new(Typewriter::new(phrases));
    let _ = use_interval_fn(
        move || state.update(Typewriter::tick),
        TYPEWRITER_TICK.as_millis() as u64,
    );
    view! {
        <span>{move || state.with(Typewriter::text)}</span>
        <span class="typewriter-caret" aria-hidden="true">"|"</span>
    }
}

/// Card that leans toward the pointer.
#[component]
pub fn TiltCard(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let theme = use_theme();
    let card = NodeRef::<html::Div>::new();
    let tilt = RwSignal::new(Tilt::default());

    let on_move = move |ev: MouseEvent| {
        let Some(el) = card.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        tilt.set(Tilt::from_pointer(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
            rect.width(),
            rect.height(),
            MAX_TILT_DEG,
        ));
    };

    view! {
        <div
            node_ref=card
            class=move || {
                let c = theme.get().classes();
                format!(
                    "tilt-card rounded-2xl border p-6 transition-transform duration-200 ease-out {} {} {} {class}",
                    c.card,
                    c.border,
                    c.shadow,
                )
            }
            style=move || tilt.get().style()
            on:mousemove=on_move
            on:mouseleave=move |_| tilt.set(Tilt::default())
        >
            {children()}
        </div>
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let revealed = RwSignal::new(false);
    Effect::new(move |_| {
        if visible.get() {
            revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if revealed.get() { "reveal reveal-shown" } else { "reveal" }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="text-center mb-12">
            <p class=move || {
                format!("uppercase tracking-[0.3em] text-sm mb-2 {}", theme.get().classes().accent)
            }>{eyebrow}</p>
            <h2 class=move || {
                format!("text-3xl md:text-4xl font-bold {}", theme.get().classes().heading)
            }>{title}</h2>
            {subtitle
                .map(|s| {
                    view! {
                        <p class=move || {
                            format!("mt-4 max-w-2xl mx-auto {}", theme.get().classes().muted)
                        }>{s}</p>
                    }
                })}
        </div>
    }
}
