//! Field extractors
//!
//! Each module is one read-only pass over a parsed page. None of them depends on
//! another's output and none of them can fail: missing markup yields empty fields.

mod contact_extractor;
mod content_extractor;
mod navigation_extractor;
mod social_extractor;

pub use contact_extractor::*;
pub use content_extractor::*;
pub use navigation_extractor::*;
pub use social_extractor::*;

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::matchers::{has_tag, SocialPlatform};

/// A link with its href already resolved against the page URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub main: Vec<NavigationLink>,
    pub footer: Vec<NavigationLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Numbered selling point; only the fallback record carries these
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub number: String,
    pub title: String,
    pub description: String,
}

/// Content read off a live page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub title: String,
    pub tagline: String,
    pub hero: String,
    pub sections: Vec<ContentSection>,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub products: Vec<ProductEntry>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroBanner {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

/// Curated content of the fallback record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackContent {
    pub hero: HeroBanner,
    pub about: ContentSection,
    pub features: Vec<Feature>,
    pub products: Vec<ProductEntry>,
    pub testimonials: Vec<Testimonial>,
}

/// Extracted and fallback content serialize with their own field sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Page(ContentBlock),
    Fallback(FallbackContent),
}

impl Default for Content {
    fn default() -> Self {
        Content::Page(ContentBlock::default())
    }
}

impl Content {
    pub fn as_page(&self) -> Option<&ContentBlock> {
        match self {
            Content::Page(block) => Some(block),
            Content::Fallback(_) => None,
        }
    }

    pub fn products(&self) -> &[ProductEntry] {
        match self {
            Content::Page(block) => &block.products,
            Content::Fallback(content) => &content.products,
        }
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        match self {
            Content::Page(block) => &block.testimonials,
            Content::Fallback(content) => &content.testimonials,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub phone: String,
}

/// Contact details found in a live page's text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(rename = "phone")]
    pub phones: Vec<String>,
    #[serde(rename = "email")]
    pub emails: Vec<String>,
    #[serde(rename = "address")]
    pub addresses: Vec<String>,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackContact {
    #[serde(rename = "phone")]
    pub phones: Vec<String>,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contact {
    Page(ContactInfo),
    Fallback(FallbackContact),
}

impl Default for Contact {
    fn default() -> Self {
        Contact::Page(ContactInfo::default())
    }
}

impl Contact {
    pub fn as_page(&self) -> Option<&ContactInfo> {
        match self {
            Contact::Page(info) => Some(info),
            Contact::Fallback(_) => None,
        }
    }

    pub fn phones(&self) -> &[String] {
        match self {
            Contact::Page(info) => &info.phones,
            Contact::Fallback(contact) => &contact.phones,
        }
    }

    pub fn locations(&self) -> &[Location] {
        match self {
            Contact::Page(info) => &info.locations,
            Contact::Fallback(contact) => &contact.locations,
        }
    }
}

/// One URL per platform, first match wins
pub type SocialLinks = BTreeMap<SocialPlatform, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
}

/// Everything known about one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub site_info: SiteInfo,
    pub navigation: Navigation,
    pub content: Content,
    pub contact: Contact,
    pub social: SocialLinks,
    pub correlations: BTreeMap<String, String>,
}

/// Every element of the document in document order
pub(crate) fn elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.tree.root().descendants().filter_map(ElementRef::wrap)
}

/// Elements strictly below `element`, in document order
pub(crate) fn descendants<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

pub(crate) fn first_descendant<'a>(element: ElementRef<'a>, tags: &[&str]) -> Option<ElementRef<'a>> {
    descendants(element).find(|el| has_tag(el, tags))
}

/// Text content with whitespace runs collapsed and ends trimmed
pub(crate) fn element_text(element: &ElementRef) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve an href against the page URL, `None` when it is not a valid reference
pub(crate) fn resolve_href(base_url: &Url, href: &str) -> Option<String> {
    base_url.join(href.trim()).ok().map(String::from)
}

/// Visible text nodes (script and style bodies skipped), in document order
pub(crate) fn text_nodes(document: &Html) -> impl Iterator<Item = &str> {
    document.tree.root().descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|parent| has_tag(&parent, &["script", "style", "noscript", "template"]));
        if hidden {
            None
        } else {
            Some(&**text)
        }
    })
}
