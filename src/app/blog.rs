use leptos::{prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

use super::{
    effects::{Reveal, SectionHeading, TiltCard},
    use_theme,
};
#[cfg(feature = "ssr")]
use crate::blog::{get_post, get_recent};
use crate::{
    blog::{Post, PostMeta, EXCERPT_COUNT, GLOBAL_POST_CACHE},
    profile,
    scroll::Section,
};

#[server(input = GetUrl)]
pub async fn get_recent_server(limit: usize) -> Result<Vec<PostMeta>, ServerFnError> {
    get_recent(limit).await.map_err(|e| {
        tracing::error!(error = %e, "failed to load blog metadata");
        ServerFnError::new(e)
    })
}

#[server(input = GetUrl)]
pub async fn get_post_server(name: String) -> Result<Post, ServerFnError> {
    get_post(&name).await.map_err(|e| {
        tracing::warn!(post = %name, error = %e, "blog post unavailable");
        ServerFnError::new(e)
    })
}

#[component]
pub fn BlogExcerpts() -> impl IntoView {
    let theme = use_theme();
    let posts = Resource::new(
        || EXCERPT_COUNT,
        |limit| async move { get_recent_server(limit).await.unwrap_or_default() },
    );

    view! {
        <section id=Section::Blog.id() class="py-24 px-4 scroll-mt-20">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <SectionHeading
                        eyebrow="Blog"
                        title="Recent writing"
                        subtitle=profile::BLOG_DESCRIPTION
                    />
                </Reveal>
                <Transition fallback=move || {
                    view! {
                        <div class="grid gap-6 md:grid-cols-3">
                            <div class="loading-skeleton h-48 rounded-2xl"></div>
                            <div class="loading-skeleton h-48 rounded-2xl"></div>
                            <div class="loading-skeleton h-48 rounded-2xl"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let posts = posts.await;
                        view! {
                            <div class="grid gap-6 md:grid-cols-3">
                                {posts
                                    .into_iter()
                                    .map(|post| view! { <Excerpt post /> })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </Transition>
                <p class="mt-10 text-center">
                    <a
                        href="/rss.xml"
                        target="_blank"
                        class=move || format!("text-sm underline {}", theme.get().classes().muted)
                    >
                        "Subscribe via RSS"
                    </a>
                </p>
            </div>
        </section>
    }
}

#[component]
fn Excerpt(post: PostMeta) -> impl IntoView {
    let theme = use_theme();
    let href = format!("/blog/{}", post.name);
    view! {
        <Reveal>
            <TiltCard class="h-full flex flex-col">
                <span class=move || {
                    format!("text-xs uppercase tracking-wide {}", theme.get().classes().muted)
                }>{post.date.format("%b %e, %Y").to_string()}</span>
                <h3 class=move || {
                    format!("mt-2 text-xl font-semibold {}", theme.get().classes().heading)
                }>
                    <A href=href.clone()>{post.title}</A>
                </h3>
                <p class="mt-3 flex-grow">{post.description}</p>
                <div class="mt-4 flex flex-wrap gap-2">
                    {post
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class=move || {
                                    format!("px-3 py-1 rounded-full text-xs {}", theme.get().classes().chip)
                                }>{tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <A
                    href=href
                    attr:class=move || format!("mt-6 font-semibold {}", theme.get().classes().accent)
                >
                    "Read more →"
                </A>
            </TiltCard>
        </Reveal>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let theme = use_theme();
    let params = use_params_map();
    let post_name = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(post_name, |name| async move {
        let cache = &*GLOBAL_POST_CACHE;
        if let Some(p) = cache.get(&name) {
            return Some((*p).clone());
        }
        let post = get_post_server(name.clone()).await.ok()?;
        // the server keeps its own cache in `crate::blog`
        #[cfg(feature = "hydrate")]
        cache.insert(name, post.clone());
        Some(post)
    });

    view! {
        <Title text="Blog" />
        <div class="max-w-3xl mx-auto px-4 py-16">
            <A
                href=format!("/#{}", Section::Blog.id())
                attr:class=move || format!("text-sm {}", theme.get().classes().nav_link)
            >
                "← Back to the portfolio"
            </A>
            <Suspense fallback=move || {
                view! {
                    <div class="mt-8 space-y-4">
                        <div class="loading-skeleton h-10 rounded"></div>
                        <div class="loading-skeleton h-6 rounded w-3/4"></div>
                        <div class="loading-skeleton h-6 rounded w-2/3"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    match post.await {
                        Some(p) => {
                            view! {
                                <Title text=p.meta.title.clone() />
                                <header class="mt-8 mb-10">
                                    <h1 class=move || {
                                        format!("text-4xl font-bold {}", theme.get().classes().heading)
                                    }>{p.meta.title}</h1>
                                    <p class=move || {
                                        format!("mt-3 text-sm {}", theme.get().classes().muted)
                                    }>
                                        {p.meta.author} " · "
                                        {p.meta.date.format("%b %e, %Y").to_string()}
                                    </p>
                                </header>
                                <article class=move || {
                                    if theme.get().is_dark {
                                        "prose prose-invert max-w-none"
                                    } else {
                                        "prose max-w-none"
                                    }
                                }>
                                    <div inner_html=p.content></div>
                                </article>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class=move || {
                                    format!("mt-8 {}", theme.get().classes().muted)
                                }>"Post not found."</p>
                            }
                                .into_any()
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}
