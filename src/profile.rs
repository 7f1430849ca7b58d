//! Site identity shared by the views and the RSS feed builder.

pub const OWNER: &str = "Mira Okafor";
pub const ROLE: &str = "Full-stack Engineer & Interface Craftsperson";
pub const DOMAIN: &str = "miraokafor.dev";
pub const SITE_URL: &str = "https://miraokafor.dev";
pub const EMAIL: &str = "hello@miraokafor.dev";
pub const GITHUB_URL: &str = "https://github.com/miraokafor";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/miraokafor";
pub const RESUME_PATH: &str = "/cv.pdf";
pub const LOGO_PATH: &str = "/logo.png";

pub const BLOG_TITLE: &str = "Mira Okafor's Notes";
pub const BLOG_DESCRIPTION: &str =
    "Field notes on building fast, friendly web software, from Rust services to pixel-level motion.";

/// Stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

pub fn post_url(name: &str) -> String {
    format!("{SITE_URL}/blog/{name}")
}

/// Year the bundle was built, for the footer copyright line.
pub fn build_year() -> &'static str {
    BUILD_TIME.get(..4).unwrap_or("2026")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_is_numeric() {
        let year = build_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_links() {
        assert_eq!(mailto(), "mailto:hello@miraokafor.dev");
        assert_eq!(
            post_url("hello-world"),
            "https://miraokafor.dev/blog/hello-world"
        );
    }
}
