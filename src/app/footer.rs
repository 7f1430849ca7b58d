use leptos::prelude::*;

use super::use_theme;
use crate::{profile, scroll::Section};

#[component]
pub fn Footer(scroll_to: Callback<Section>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <footer class=move || format!("border-t py-12 px-4 {}", theme.get().classes().border)>
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="text-center md:text-left">
                    <p class=move || {
                        format!("font-semibold {}", theme.get().classes().heading)
                    }>{profile::OWNER}</p>
                    <p class=move || {
                        format!("text-sm {}", theme.get().classes().muted)
                    }>{format!("© {} · Built with Rust & Leptos", profile::build_year())}</p>
                </div>
                <ul class="flex flex-wrap justify-center gap-4 text-sm">
                    {Section::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class=move || theme.get().classes().nav_link
                                        on:click=move |_| scroll_to.run(section)
                                    >
                                        {section.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-4 text-2xl">
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
                    <a
                        href=profile::mailto()
                        aria-label="Email"
                        class=move || theme.get().classes().nav_link
                    >
                        "✉"
                    </a>
                </div>
            </div>
        </footer>
    }
}
