use std::fs::File;

use portfolio_site::{blog::get_meta, rss::build_channel, rss::FEED_PATH};

#[tokio::main]
async fn main() {
    let posts = match get_meta().await {
        Ok(posts) => posts,
        Err(e) => {
            eprintln!("couldn't load blog posts: {e}");
            std::process::exit(1);
        }
    };
    let count = posts.len();
    let channel = build_channel(posts);

    let written = File::create(FEED_PATH)
        .map_err(|e| e.to_string())
        .and_then(|file| {
            channel
                .pretty_write_to(file, b' ', 2)
                .map(|_| ())
                .map_err(|e| e.to_string())
        });
    match written {
        Ok(()) => println!("wrote {count} items to {FEED_PATH}"),
        Err(e) => {
            eprintln!("couldn't write {FEED_PATH}: {e}");
            std::process::exit(1);
        }
    }
}
