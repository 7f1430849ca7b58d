use leptos::{ev::MouseEvent, prelude::*};

use super::{
    effects::{Reveal, SectionHeading, TiltCard},
    use_theme,
};
use crate::{
    content::{Experience, EXPERIENCES, PROJECTS},
    scroll::Section,
};

#[component]
pub fn Work() -> impl IntoView {
    let theme = use_theme();
    // first card starts open
    let expanded = RwSignal::new(Some(0usize));

    view! {
        <section id=Section::Work.id() class="py-24 px-4 scroll-mt-20">
            <div class="max-w-5xl mx-auto">
                <Reveal>
                    <SectionHeading
                        eyebrow="Work"
                        title="Where I've been"
                        subtitle="Seven years of shipping products, from agency sprints to long-lived platforms."
                    />
                </Reveal>
                <ol class=move || {
                    format!("relative border-l-2 ml-3 space-y-8 {}", theme.get().classes().border)
                }>
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| view! { <ExperienceCard index exp expanded /> })
                        .collect_view()}
                </ol>
                <Reveal>
                    <h3 class=move || {
                        format!("text-2xl font-bold mt-20 mb-8 text-center {}", theme.get().classes().heading)
                    }>"Side projects"</h3>
                </Reveal>
                <div class="grid gap-6 md:grid-cols-3">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <Reveal>
                                    <TiltCard class="h-full">
                                        <a
                                            href=project.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="block h-full"
                                        >
                                            <h4 class=move || {
                                                format!("text-lg font-semibold {}", theme.get().classes().heading)
                                            }>{project.name}</h4>
                                            <p class=move || {
                                                format!("mt-2 text-sm {}", theme.get().classes().muted)
                                            }>{project.blurb}</p>
                                            <Tags tags=project.tags />
                                        </a>
                                    </TiltCard>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(
    index: usize,
    exp: &'static Experience,
    expanded: RwSignal<Option<usize>>,
) -> impl IntoView {
    let theme = use_theme();
    let is_open = move || expanded.get() == Some(index);
    let toggle = move |_: MouseEvent| {
        expanded.update(|e| *e = if *e == Some(index) { None } else { Some(index) });
    };

    view! {
        <li class="ml-6">
            <span class=move || {
                format!(
                    "absolute -left-[9px] mt-2 w-4 h-4 rounded-full {}",
                    theme.get().classes().progress,
                )
            }></span>
            <Reveal>
                <div class=move || {
                    let c = theme.get().classes();
                    format!("rounded-2xl border p-6 {} {} {}", c.card, c.border, c.shadow)
                }>
                    <button
                        type="button"
                        class="w-full text-left flex flex-wrap items-baseline justify-between gap-2"
                        aria-expanded=move || is_open().to_string()
                        on:click=toggle
                    >
                        <div>
                            <h3 class=move || {
                                format!("text-xl font-semibold {}", theme.get().classes().heading)
                            }>{exp.role}</h3>
                            <p class=move || theme.get().classes().accent>{exp.company}</p>
                        </div>
                        <span class=move || {
                            format!("text-sm {}", theme.get().classes().muted)
                        }>
                            {exp.period} {move || if is_open() { " ▴" } else { " ▾" }}
                        </span>
                    </button>
                    <p class="mt-3">{exp.summary}</p>
                    <div class=move || {
                        if is_open() { "expandable expandable-open" } else { "expandable" }
                    }>
                        <div>
                            <ul class="mt-4 space-y-2 list-disc list-inside">
                                {exp.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                            </ul>
                            <Tags tags=exp.stack />
                        </div>
                    </div>
                </div>
            </Reveal>
        </li>
    }
}

#[component]
fn Tags(tags: &'static [&'static str]) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="mt-4 flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|t| {
                    view! {
                        <span class=move || {
                            format!("px-3 py-1 rounded-full text-xs {}", theme.get().classes().chip)
                        }>{*t}</span>
                    }
                })
                .collect_view()}
        </div>
    }
}
