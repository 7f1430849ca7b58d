use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::blog::PostMeta;
use crate::profile::{post_url, BLOG_DESCRIPTION, BLOG_TITLE, EMAIL, SITE_URL};

pub const FEED_PATH: &str = "public/rss.xml";

pub fn build_channel(posts: Vec<PostMeta>) -> Channel {
    let items = posts
        .into_iter()
        .map(|p| {
            let link = post_url(&p.name);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(p.title)
                .description(p.description)
                .author(format!("{EMAIL} ({})", p.author))
                .categories(
                    p.tags
                        .into_iter()
                        .map(|t| rss::CategoryBuilder::default().name(t).build())
                        .collect::<Vec<_>>(),
                )
                .pub_date(p.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(BLOG_TITLE)
        .description(BLOG_DESCRIPTION)
        .link(format!("{SITE_URL}/#blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_channel_items() {
        let post = PostMeta {
            name: "hello".to_string(),
            title: "Hello".to_string(),
            description: "First".to_string(),
            author: "Mira Okafor".to_string(),
            date: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            tags: vec!["rust".to_string()],
        };
        let channel = build_channel(vec![post]);
        assert_eq!(channel.title(), BLOG_TITLE);
        let item = &channel.items()[0];
        assert_eq!(item.link(), Some("https://miraokafor.dev/blog/hello"));
        assert_eq!(item.guid().map(|g| g.is_permalink()), Some(true));
        assert_eq!(item.categories()[0].name(), "rust");
        assert!(item.pub_date().is_some_and(|d| d.contains("Jan 2026 03:04:05")));
    }
}
