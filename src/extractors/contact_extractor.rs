//! Phone numbers, emails and street addresses found anywhere in the page text

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use tracing::debug;

use super::{text_nodes, ContactInfo};

pub const MAX_PHONES: usize = 5;
pub const MAX_EMAILS: usize = 5;
pub const MAX_ADDRESSES: usize = 5;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+.*(Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr)").unwrap()
});

pub fn extract_contact(document: &Html) -> ContactInfo {
    let text: String = text_nodes(document).collect();

    let phones = unique_matches(&PHONE_RE, &text, MAX_PHONES);
    let emails = unique_matches(&EMAIL_RE, &text, MAX_EMAILS);
    let addresses: Vec<String> = text_nodes(document)
        .filter(|node| ADDRESS_RE.is_match(node))
        .take(MAX_ADDRESSES)
        .map(|node| node.trim().to_string())
        .collect();

    debug!(
        phones = phones.len(),
        emails = emails.len(),
        addresses = addresses.len(),
        "extracted contact info"
    );

    ContactInfo {
        phones,
        emails,
        addresses,
        locations: vec![],
    }
}

/// Distinct matches in first-seen order, capped at `limit`
fn unique_matches(re: &Regex, text: &str, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for m in re.find_iter(text) {
        if found.len() == limit {
            break;
        }
        if seen.insert(m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phones_deduplicated_and_capped() {
        let html = Html::parse_document(
            r#"
            <p>Omaha 800-688-2953</p>
            <p>Springfield 800.467.0060 or 800-688-2953</p>
            <p>KC (816) 221-9556</p>
            <p>402 597 6118, 5551234567, 555-000-1111, 555-222-3333</p>
            "#,
        );
        let contact = extract_contact(&html);

        assert_eq!(contact.phones.len(), 5);
        let unique: HashSet<&String> = contact.phones.iter().collect();
        assert_eq!(unique.len(), contact.phones.len());
        assert!(contact.phones.contains(&"800-688-2953".to_string()));
        assert!(contact.phones.contains(&"(816) 221-9556".to_string()));
    }

    #[test]
    fn test_emails() {
        let html = Html::parse_document(
            r#"
            <p>sales@aawheel.com</p>
            <a href="mailto:x">info@aawheel.com</a>
            <p>sales@aawheel.com</p>
            <p>not an @email</p>
            "#,
        );
        let contact = extract_contact(&html);
        let emails: HashSet<&str> = contact.emails.iter().map(String::as_str).collect();
        assert_eq!(emails, HashSet::from(["sales@aawheel.com", "info@aawheel.com"]));
    }

    #[test]
    fn test_addresses_keep_whole_text_node() {
        let html = Html::parse_document(
            r#"
            <address>
                1234 Industrial Blvd
            </address>
            <p>We opened in 1998 on the other side of town.</p>
            <p>No numbers on Main Street</p>
            "#,
        );
        let contact = extract_contact(&html);
        assert_eq!(contact.addresses[0], "1234 Industrial Blvd");
        assert!(!contact.addresses.iter().any(|a| a.contains("Main Street")));
    }

    #[test]
    fn test_address_cap() {
        let html: String = (1..=8)
            .map(|i| format!("<p>{i}00 Oak Avenue</p>"))
            .collect();
        let contact = extract_contact(&Html::parse_document(&html));
        assert_eq!(contact.addresses.len(), 5);
        assert_eq!(contact.addresses[0], "100 Oak Avenue");
    }

    #[test]
    fn test_no_matches() {
        let contact = extract_contact(&Html::parse_document("<p>Hello</p>"));
        assert_eq!(contact, ContactInfo::default());
    }
}
