use leptos::prelude::*;

use super::{
    effects::{Petals, TypewriterText},
    use_theme,
};
use crate::{content::HERO_PHRASES, profile, scroll::Section};

#[component]
pub fn Hero(scroll_to: Callback<Section>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=Section::Home.id()
            class="relative flex items-center justify-center min-h-screen px-4 pt-24 overflow-hidden scroll-mt-20"
        >
            <Petals />
            <div class="hero-glow absolute -top-32 -right-32 w-96 h-96 rounded-full blur-3xl"></div>
            <div class="relative z-10 max-w-4xl text-center">
                <p class=move || {
                    format!("mb-4 text-lg fade-up {}", theme.get().classes().muted)
                }>"Hi there, I'm"</p>
                <h1 class=move || {
                    format!(
                        "text-5xl md:text-7xl font-extrabold tracking-tight fade-up {}",
                        theme.get().classes().heading,
                    )
                }>{profile::OWNER}</h1>
                <p class=move || {
                    format!("mt-4 text-xl md:text-2xl fade-up {}", theme.get().classes().accent)
                }>{profile::ROLE}</p>
                <p class="mt-6 h-8 text-xl md:text-2xl font-mono">
                    <TypewriterText phrases=HERO_PHRASES />
                </p>
                <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        type="button"
                        class=move || {
                            format!(
                                "px-8 py-3 rounded-full font-semibold transition-transform hover:-translate-y-1 {} {}",
                                theme.get().classes().button,
                                theme.get().classes().shadow,
                            )
                        }
                        on:click=move |_| scroll_to.run(Section::Work)
                    >
                        "See my work"
                    </button>
                    <button
                        type="button"
                        class=move || {
                            format!(
                                "px-8 py-3 rounded-full border font-semibold transition-transform hover:-translate-y-1 {}",
                                theme.get().classes().button_ghost,
                            )
                        }
                        on:click=move |_| scroll_to.run(Section::Contact)
                    >
                        "Get in touch"
                    </button>
                    <a
                        href=profile::RESUME_PATH
                        download="cv.pdf"
                        class=move || {
                            format!("underline underline-offset-4 {}", theme.get().classes().muted)
                        }
                    >
                        "Download CV"
                    </a>
                </div>
            </div>
            <button
                type="button"
                aria-label="Scroll to about"
                class="scroll-hint absolute bottom-8 left-1/2 -translate-x-1/2 text-2xl"
                on:click=move |_| scroll_to.run(Section::About)
            >
                "⌄"
            </button>
        </section>
    }
}
