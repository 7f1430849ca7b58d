mod about;
mod blog;
mod contact;
mod effects;
mod footer;
mod hero;
mod nav;
mod offerings;
mod work;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{profile, scroll::Section, theme::Theme};

use about::About;
use blog::{BlogExcerpts, BlogPage};
use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::{scroll_to_section, use_scroll_tracker, Nav, ScrollTopButton};
use offerings::{Pricing, Services};
use work::Work;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title=profile::BLOG_TITLE
                    href="/rss.xml"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Shared theme flag; every themed view reads its classes from this.
pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    view! {
        <Title formatter=|title| format!("{} - {title}", profile::OWNER) />
        <Meta name="description" content=profile::ROLE />
        <Meta name="color-scheme" content=move || theme.get().scheme() />
        <div class=move || {
            let c = theme.get().classes();
            format!("min-h-screen transition-colors duration-500 {} {}", c.page, c.text)
        }>
            <Router>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog/:post") view=BlogPage />
                </Routes>
            </Router>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let scroll = use_scroll_tracker();
    let scroll_to = Callback::new(scroll_to_section);

    view! {
        <Title text="Portfolio" />
        <Nav scroll scroll_to />
        <main class="flex flex-col">
            <Hero scroll_to />
            <About />
            <Work />
            <Services />
            <Pricing scroll_to />
            <BlogExcerpts />
            <Contact />
        </main>
        <Footer scroll_to />
        <ScrollTopButton visible=Signal::derive(move || scroll.get().show_scroll_top) />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    let theme = use_theme();

    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center min-h-screen gap-6 px-4 text-center">
            <h1 class=move || format!("text-6xl font-bold {}", theme.get().classes().accent)>
                "404"
            </h1>
            <p class=move || theme.get().classes().muted>
                "This page drifted away with the petals."
            </p>
            <A
                href=format!("/#{}", Section::Home.id())
                attr:class=move || {
                    format!("px-6 py-3 rounded-full {}", theme.get().classes().button)
                }
            >
                "Back home"
            </A>
        </div>
    }
}
