use leptos::prelude::*;

use super::{
    effects::{Reveal, SectionHeading, TiltCard},
    use_theme,
};
use crate::{
    content::{skills_in, SkillGroup, BIO},
    profile,
    scroll::Section,
};

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id=Section::About.id() class="py-24 px-4 scroll-mt-20">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <SectionHeading eyebrow="About" title="A little about me" />
                </Reveal>
                <div class="grid gap-12 lg:grid-cols-2 items-start">
                    <Reveal>
                        <div class="space-y-4 text-lg leading-relaxed">
                            {BIO.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                            <div class="flex gap-4 pt-4 text-2xl">
                                <a
                                    href=profile::GITHUB_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="GitHub Profile"
                                    class=move || theme.get().classes().nav_link
                                >
                                    <i class="devicon-github-plain"></i>
                                </a>
                                <a
                                    href=profile::LINKEDIN_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="LinkedIn Profile"
                                    class=move || theme.get().classes().nav_link
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                </a>
                            </div>
                        </div>
                    </Reveal>
                    <div class="grid gap-6 sm:grid-cols-3 lg:grid-cols-1 xl:grid-cols-3">
                        {[SkillGroup::Frontend, SkillGroup::Backend, SkillGroup::Tooling]
                            .into_iter()
                            .map(|group| view! { <SkillCard group /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    let theme = use_theme();
    view! {
        <Reveal>
            <TiltCard>
                <h3 class=move || {
                    format!("text-lg font-semibold mb-4 {}", theme.get().classes().heading)
                }>{group.label()}</h3>
                <ul class="space-y-3">
                    {skills_in(group)
                        .map(|skill| {
                            view! {
                                <li>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span>{skill.name}</span>
                                        <span class=move || {
                                            theme.get().classes().muted
                                        }>{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class="h-1.5 rounded-full bg-black/10 overflow-hidden">
                                        <div
                                            class=move || {
                                                format!("skill-meter h-full {}", theme.get().classes().progress)
                                            }
                                            style=format!("width: {}%;", skill.level)
                                        ></div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </TiltCard>
        </Reveal>
    }
}
