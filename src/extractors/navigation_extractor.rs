//! Main and footer navigation

use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

use super::{descendants, element_text, elements, resolve_href, Navigation, NavigationLink};
use crate::matchers::{has_tag, Matchers};

/// Footer links considered before filtering
pub const MAX_FOOTER_LINKS: usize = 10;

/// Extract main and footer navigation.
///
/// `main` is read from the page header only when the page has no nav/menu
/// container; a page with containers leaves it empty. `footer` comes from the
/// first `<footer>` and is filled independently of `main`.
pub fn extract_navigation(document: &Html, base_url: &Url, matchers: &Matchers) -> Navigation {
    let containers = elements(document)
        .filter(|el| matchers.is_nav_container(el))
        .count();

    let main = if containers == 0 {
        find_header(document, matchers)
            .map(|header| header_links(header, base_url))
            .unwrap_or_default()
    } else {
        vec![]
    };

    let footer = elements(document)
        .find(|el| has_tag(el, &["footer"]))
        .map(|footer| footer_links(footer, base_url))
        .unwrap_or_default();

    debug!(
        containers,
        main = main.len(),
        footer = footer.len(),
        "extracted navigation"
    );

    Navigation { main, footer }
}

/// First `<header>`, falling back to the first element with a header class
fn find_header<'a>(document: &'a Html, matchers: &Matchers) -> Option<ElementRef<'a>> {
    elements(document)
        .find(|el| has_tag(el, &["header"]))
        .or_else(|| elements(document).find(|el| matchers.is_header(el)))
}

fn anchors(container: ElementRef<'_>) -> impl Iterator<Item = (ElementRef<'_>, &str)> {
    descendants(container).filter_map(|el| {
        if !has_tag(&el, &["a"]) {
            return None;
        }
        el.value().attr("href").map(|href| (el, href))
    })
}

fn header_links(header: ElementRef, base_url: &Url) -> Vec<NavigationLink> {
    anchors(header)
        .filter_map(|(anchor, href)| to_link(&anchor, href, base_url))
        .collect()
}

fn footer_links(footer: ElementRef, base_url: &Url) -> Vec<NavigationLink> {
    anchors(footer)
        .take(MAX_FOOTER_LINKS)
        .filter(|(_, href)| !href.starts_with('#'))
        .filter_map(|(anchor, href)| to_link(&anchor, href, base_url))
        .collect()
}

fn to_link(anchor: &ElementRef, href: &str, base_url: &Url) -> Option<NavigationLink> {
    let text = element_text(anchor);
    if text.is_empty() || href.trim().is_empty() {
        return None;
    }
    Some(NavigationLink {
        text,
        href: resolve_href(base_url, href)?,
    })
}
