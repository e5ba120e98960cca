//! Social media profile links

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::{resolve_href, SocialLinks};
use crate::matchers::SocialPlatform;

/// Scan every link in document order; the first link for a platform wins
pub fn extract_social(document: &Html, base_url: &Url) -> SocialLinks {
    let mut social = SocialLinks::new();

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return social,
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(platform) = SocialPlatform::detect(href) else {
            continue;
        };
        if social.contains_key(&platform) {
            continue;
        }
        if let Some(resolved) = resolve_href(base_url, href) {
            social.insert(platform, resolved);
        }
    }

    debug!(platforms = social.len(), "extracted social links");
    social
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://aawheel.com").unwrap()
    }

    #[test]
    fn test_first_link_per_platform_wins() {
        let html = Html::parse_document(
            r#"
            <a href="https://facebook.com/x">FB</a>
            <a href="https://www.facebook.com/y">FB again</a>
            "#,
        );
        let social = extract_social(&html, &base());
        assert_eq!(social.len(), 1);
        assert_eq!(
            social.get(&SocialPlatform::Facebook).map(String::as_str),
            Some("https://facebook.com/x")
        );
    }

    #[test]
    fn test_platforms_and_relative_links() {
        let html = Html::parse_document(
            r#"
            <a href="/about">About</a>
            <a href="HTTPS://Instagram.com/aawheel">IG</a>
            <a href="/go/youtube">Video</a>
            <a href="https://wa.me/?text=whatsapp">Chat</a>
            "#,
        );
        let social = extract_social(&html, &base());
        let platforms: Vec<SocialPlatform> = social.keys().copied().collect();
        assert_eq!(
            platforms,
            vec![
                SocialPlatform::Instagram,
                SocialPlatform::Youtube,
                SocialPlatform::Whatsapp
            ]
        );
        assert_eq!(social[&SocialPlatform::Youtube], "https://aawheel.com/go/youtube");
        assert_eq!(social[&SocialPlatform::Instagram], "https://instagram.com/aawheel");
    }

    #[test]
    fn test_no_social_links() {
        let html = Html::parse_document(r#"<a href="/contact">Contact</a>"#);
        assert!(extract_social(&html, &base()).is_empty());
    }
}
