//! Merge extractor outputs into one [`ExtractionResult`]

use std::collections::BTreeMap;

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::extractors::{
    extract_contact, extract_content, extract_navigation, extract_social, Contact, Content,
    ContentBlock, ExtractionResult, SiteInfo,
};
use crate::fallback::fallback_record;
use crate::matchers::Matchers;

/// Sections whose content makes up the site description
const DESCRIPTION_SECTIONS: usize = 2;

/// Runs every extractor against a page, or substitutes the fallback record
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    matchers: Matchers,
}

impl Assembler {
    pub fn new(matchers: Matchers) -> Self {
        Self { matchers }
    }

    /// Build the record for a page. `None` means no document could be obtained
    /// and yields the fallback record unchanged.
    pub fn assemble(&self, document: Option<&Html>, base_url: &Url) -> ExtractionResult {
        match document {
            Some(document) => self.extract(document, base_url),
            None => {
                info!(url = %base_url, "no document available, using fallback record");
                fallback_record()
            }
        }
    }

    fn extract(&self, document: &Html, base_url: &Url) -> ExtractionResult {
        let navigation = extract_navigation(document, base_url, &self.matchers);
        let content = extract_content(document, &self.matchers);
        let contact = extract_contact(document);
        let social = extract_social(document, base_url);

        debug!(url = %base_url, "assembled live extraction");

        ExtractionResult {
            site_info: site_info(&content),
            navigation,
            content: Content::Page(content),
            contact: Contact::Page(contact),
            social,
            correlations: BTreeMap::new(),
        }
    }
}

/// Assemble with the default (substring) matchers
pub fn assemble(document: Option<&Html>, base_url: &Url) -> ExtractionResult {
    Assembler::default().assemble(document, base_url)
}

fn site_info(content: &ContentBlock) -> SiteInfo {
    SiteInfo {
        name: content.title.clone(),
        title: content.hero.clone(),
        tagline: content.tagline.clone(),
        description: content
            .sections
            .iter()
            .take(DESCRIPTION_SECTIONS)
            .map(|section| section.content.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    }
}
