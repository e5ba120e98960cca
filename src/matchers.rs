//! Element predicates used by the extractors
//!
//! Every predicate looks at a tag name plus class-token keywords. How a class
//! token is compared to a keyword is decided by [`ClassMatch`], so the
//! extractors never change when the comparison gets stricter or looser.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// How a single class token is compared with a keyword
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassMatch {
    /// Lower-cased token contains the keyword anywhere ("cross-section" matches "section")
    #[default]
    Substring,
    /// Lower-cased token must equal the keyword ("cross-section" does not match "section")
    WholeToken,
}

impl ClassMatch {
    pub fn matches(self, token: &str, keyword: &str) -> bool {
        let token = token.to_lowercase();
        match self {
            ClassMatch::Substring => token.contains(keyword),
            ClassMatch::WholeToken => token == keyword,
        }
    }
}

/// Social platforms recognised in hrefs, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Whatsapp,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::Instagram,
        SocialPlatform::Linkedin,
        SocialPlatform::Youtube,
        SocialPlatform::Whatsapp,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Whatsapp => "whatsapp",
        }
    }

    /// First platform (in [`SocialPlatform::ALL`] order) whose keyword occurs in the href
    pub fn detect(href: &str) -> Option<SocialPlatform> {
        let href = href.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|platform| href.contains(platform.keyword()))
    }
}

/// Structural predicates over elements, sharing one class comparison strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matchers {
    class_match: ClassMatch,
}

impl Matchers {
    pub fn new(class_match: ClassMatch) -> Self {
        Self { class_match }
    }

    pub fn class_match(&self) -> ClassMatch {
        self.class_match
    }

    /// `<nav>`/`<ul>` with a "nav" or "menu" class
    pub fn is_nav_container(&self, element: &ElementRef) -> bool {
        has_tag(element, &["nav", "ul"]) && self.has_class(element, &["nav", "menu"])
    }

    /// `<header>` tag, or anything carrying a "header" class
    pub fn is_header(&self, element: &ElementRef) -> bool {
        has_tag(element, &["header"]) || self.has_class(element, &["header"])
    }

    pub fn is_section(&self, element: &ElementRef) -> bool {
        has_tag(element, &["section", "div"]) && self.has_class(element, &["section", "content"])
    }

    pub fn is_product(&self, element: &ElementRef) -> bool {
        has_tag(element, &["div", "article"]) && self.has_class(element, &["product", "service"])
    }

    pub fn is_review(&self, element: &ElementRef) -> bool {
        has_tag(element, &["div", "blockquote"])
            && self.has_class(element, &["review", "testimonial"])
    }

    pub fn is_author(&self, element: &ElementRef) -> bool {
        has_tag(element, &["span", "div", "p"]) && self.has_class(element, &["author", "name"])
    }

    fn has_class(&self, element: &ElementRef, keywords: &[&str]) -> bool {
        element.value().classes().any(|token| {
            keywords
                .iter()
                .any(|keyword| self.class_match.matches(token, keyword))
        })
    }
}

/// Tag name check; scraper already lower-cases HTML element names
pub fn has_tag(element: &ElementRef, tags: &[&str]) -> bool {
    let name = element.value().name();
    tags.iter().any(|tag| *tag == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_substring_overmatches_on_purpose() {
        assert!(ClassMatch::Substring.matches("cross-section", "section"));
        assert!(ClassMatch::Substring.matches("MainNavBar", "nav"));
        assert!(ClassMatch::WholeToken.matches("Nav", "nav"));
        assert!(!ClassMatch::WholeToken.matches("cross-section", "section"));
        assert!(!ClassMatch::WholeToken.matches("site_nav", "nav"));
        assert!(!ClassMatch::WholeToken.matches("MainNavBar", "nav"));
    }

    #[test]
    fn test_nav_container_needs_tag_and_class() {
        let html = Html::parse_document(
            r#"<nav class="Top-Menu"></nav><div class="nav"></div><ul class="list"></ul>"#,
        );
        let matchers = Matchers::default();
        assert!(matchers.is_nav_container(&first(&html, "nav")));
        assert!(!matchers.is_nav_container(&first(&html, "div")));
        assert!(!matchers.is_nav_container(&first(&html, "ul")));
    }

    #[test]
    fn test_header_by_tag_or_class() {
        let html = Html::parse_document(
            r#"<header></header><span class="page-header"></span><p>x</p>"#,
        );
        let matchers = Matchers::default();
        assert!(matchers.is_header(&first(&html, "header")));
        assert!(matchers.is_header(&first(&html, "span")));
        assert!(!matchers.is_header(&first(&html, "p")));
    }

    #[test]
    fn test_block_predicates() {
        let html = Html::parse_document(
            r#"
            <article class="service-card"></article>
            <blockquote class="customer-testimonial"></blockquote>
            <p class="review-author"></p>
            <section class="main-content"></section>
            <section class="product"></section>
            "#,
        );
        let matchers = Matchers::default();
        assert!(matchers.is_product(&first(&html, "article")));
        assert!(matchers.is_review(&first(&html, "blockquote")));
        assert!(matchers.is_author(&first(&html, "p")));
        assert!(matchers.is_section(&first(&html, "section.main-content")));
        // products only live in div/article
        assert!(!matchers.is_product(&first(&html, "section.product")));
    }

    #[test]
    fn test_strict_matchers_reject_incidental_classes() {
        let html = Html::parse_document(r#"<div class="cross-section"></div>"#);
        let div = first(&html, "div");
        assert!(Matchers::default().is_section(&div));
        assert!(!Matchers::new(ClassMatch::WholeToken).is_section(&div));

        let html = Html::parse_document(r#"<div class="card section"></div>"#);
        assert!(Matchers::new(ClassMatch::WholeToken).is_section(&first(&html, "div")));
    }

    #[test]
    fn test_social_platform_order() {
        assert_eq!(
            SocialPlatform::detect("https://www.Facebook.com/x"),
            Some(SocialPlatform::Facebook)
        );
        // facebook wins over twitter even when both appear
        assert_eq!(
            SocialPlatform::detect("https://twitter.com/share?u=facebook"),
            Some(SocialPlatform::Facebook)
        );
        assert_eq!(
            SocialPlatform::detect("https://wa.me/whatsapp"),
            Some(SocialPlatform::Whatsapp)
        );
        assert_eq!(SocialPlatform::detect("https://example.com"), None);
    }
}
