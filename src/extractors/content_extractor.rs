//! Page title, hero, sections, products and testimonials

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{
    descendants, element_text, elements, first_descendant, ContentBlock, ContentSection,
    ProductEntry, Testimonial,
};
use crate::matchers::{has_tag, Matchers};

/// Section candidates considered, not kept
pub const MAX_SECTIONS: usize = 10;
/// Product candidates considered
pub const MAX_PRODUCTS: usize = 20;
/// Review candidates considered
pub const MAX_TESTIMONIALS: usize = 10;
/// Paragraphs joined into a section's content
pub const SECTION_PARAGRAPHS: usize = 3;
/// Hard character cut for testimonial text
pub const TESTIMONIAL_CHARS: usize = 200;

pub fn extract_content(document: &Html, matchers: &Matchers) -> ContentBlock {
    let (hero, tagline) = extract_hero(document);

    let content = ContentBlock {
        title: extract_title(document),
        tagline,
        hero,
        sections: extract_sections(document, matchers),
        products: extract_products(document, matchers),
        testimonials: extract_testimonials(document, matchers),
        ..ContentBlock::default()
    };

    debug!(
        sections = content.sections.len(),
        products = content.products.len(),
        testimonials = content.testimonials.len(),
        "extracted content"
    );

    content
}

fn extract_title(document: &Html) -> String {
    let selector = match Selector::parse("title") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default()
}

/// Returns `(hero, tagline)`: the first `<h1>` and the first `<p>` after it
fn extract_hero(document: &Html) -> (String, String) {
    let Some(h1) = elements(document).find(|el| has_tag(el, &["h1"])) else {
        return (String::new(), String::new());
    };
    let tagline = paragraph_after(elements(document), h1)
        .map(|p| element_text(&p))
        .unwrap_or_default();
    (element_text(&h1), tagline)
}

/// First `<p>` after `anchor` in document order
fn paragraph_after<'a>(
    elements: impl Iterator<Item = ElementRef<'a>>,
    anchor: ElementRef<'a>,
) -> Option<ElementRef<'a>> {
    elements
        .skip_while(|el| el.id() != anchor.id())
        .skip(1)
        .find(|el| has_tag(el, &["p"]))
}

fn extract_sections(document: &Html, matchers: &Matchers) -> Vec<ContentSection> {
    elements(document)
        .filter(|el| matchers.is_section(el))
        .take(MAX_SECTIONS)
        .filter_map(|section| {
            let heading = first_descendant(section, &["h1", "h2", "h3"])?;
            let content = descendants(section)
                .filter(|el| has_tag(el, &["p"]))
                .take(SECTION_PARAGRAPHS)
                .map(|p| element_text(&p))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            if content.is_empty() {
                return None;
            }
            Some(ContentSection {
                heading: element_text(&heading),
                content,
            })
        })
        .collect()
}

fn extract_products(document: &Html, matchers: &Matchers) -> Vec<ProductEntry> {
    elements(document)
        .filter(|el| matchers.is_product(el))
        .take(MAX_PRODUCTS)
        .filter_map(|product| {
            let heading = first_descendant(product, &["h2", "h3", "h4"])?;
            let description = first_descendant(product, &["p"])
                .map(|p| element_text(&p))
                .unwrap_or_default();
            Some(ProductEntry {
                name: element_text(&heading),
                description,
                category: None,
                image: None,
            })
        })
        .collect()
}

fn extract_testimonials(document: &Html, matchers: &Matchers) -> Vec<Testimonial> {
    elements(document)
        .filter(|el| matchers.is_review(el))
        .take(MAX_TESTIMONIALS)
        .filter_map(|review| {
            let author = descendants(review).find(|el| matchers.is_author(el))?;

            // An empty <p> does not count as a text source
            let text = first_descendant(review, &["p"])
                .map(|p| element_text(&p))
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| element_text(&review));
            if text.is_empty() {
                return None;
            }

            Some(Testimonial {
                author: element_text(&author),
                text: text.chars().take(TESTIMONIAL_CHARS).collect(),
                date: None,
            })
        })
        .collect()
}
