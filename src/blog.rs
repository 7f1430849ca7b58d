use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

/// How many excerpts the home page shows.
pub const EXCERPT_COUNT: usize = 3;

const META_KEY: &str = "all";

pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);
pub static GLOBAL_META_CACHE: LazyLock<DashMap<&'static str, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    author: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse blog post: {0}")]
    Parse(String),
}

/// Names of the embedded posts, without the `.md` suffix.
pub fn post_names() -> Vec<String> {
    Assets::iter()
        .filter_map(|s| s.strip_suffix(".md").map(str::to_string))
        .collect()
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn load(file: &str) -> Result<(PostMeta, String), BlogError> {
    let asset = Assets::get(file).ok_or_else(|| BlogError::NotFound(file.to_string()))?;
    let content =
        String::from_utf8(asset.data.into()).map_err(|_| BlogError::Parse(file.to_string()))?;
    let fm = Matter::<YAML>::new()
        .parse_with_struct::<FrontMatter>(&content)
        .ok_or_else(|| BlogError::Parse(file.to_string()))?;
    let meta = PostMeta {
        name: file.trim_end_matches(".md").to_string(),
        title: fm.data.title,
        description: fm.data.description,
        author: fm.data.author,
        date: fm.data.date,
        tags: fm.data.tags,
    };
    Ok((meta, fm.content))
}

/// All posts, newest first.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_meta() -> Result<Vec<PostMeta>, BlogError> {
    let cache = &*GLOBAL_META_CACHE;
    if let Some(r) = cache.get(META_KEY) {
        return Ok(r.clone());
    }
    let mut posts = Assets::iter()
        .map(|s| load(&s).map(|(meta, _)| meta))
        .collect::<Result<Vec<_>, _>>()?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    cache.insert(META_KEY, posts.clone());
    Ok(posts)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_recent(limit: usize) -> Result<Vec<PostMeta>, BlogError> {
    let mut posts = get_meta().await?;
    posts.truncate(limit);
    Ok(posts)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_post(name: &str) -> Result<Post, BlogError> {
    let cache = &*GLOBAL_POST_CACHE;
    if let Some(p) = cache.get(name) {
        return Ok(p.clone());
    }
    let (meta, body) = load(&format!("{name}.md"))?;
    let parser = Parser::new_ext(&body, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, highlight(parser));

    let post = Post {
        meta,
        content: html_output,
    };
    cache.insert(name.to_string(), post.clone());
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_names_strip_suffix() {
        let names = post_names();
        assert!(!names.is_empty());
        assert!(names.iter().all(|n| !n.ends_with(".md")));
        assert!(names.contains(&"hello-petals".to_string()));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn test_meta_sorted_newest_first() {
        let posts = get_meta().await.expect("posts should parse");
        assert_eq!(posts.len(), post_names().len());
        assert!(posts.windows(2).all(|w| w[0].date >= w[1].date));

        let recent = get_recent(EXCERPT_COUNT).await.expect("posts should parse");
        assert!(recent.len() <= EXCERPT_COUNT);
        assert_eq!(recent[0], posts[0]);
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn test_get_post_renders_html() {
        let post = get_post("hello-petals").await.expect("post should exist");
        assert_eq!(post.meta.name, "hello-petals");
        assert!(post.content.contains("<h2>"));
        assert!(!post.content.contains("title:"));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[tokio::test]
    async fn test_get_post_missing() {
        let err = get_post("does-not-exist").await.unwrap_err();
        assert_eq!(err, BlogError::NotFound("does-not-exist.md".to_string()));
    }
}
