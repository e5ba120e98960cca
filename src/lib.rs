//! Heuristic site content extractor
//!
//! Pulls a structured record out of a single fetched page:
//! - Navigation (nav/menu containers, header fallback, footer)
//! - Title, hero and tagline, content sections
//! - Product/service listings and testimonials
//! - Phone numbers, emails, street addresses
//! - Social media profile links
//!
//! Extraction never fails. When no page is available the fixed fallback record
//! is returned instead.

pub mod assembler;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fallback;
pub mod fetch;
pub mod matchers;
pub mod output;
pub mod robots;

#[cfg(test)]
mod test_support;

pub use assembler::{assemble, Assembler};
pub use extractors::*;
pub use fallback::fallback_record;
pub use matchers::{ClassMatch, Matchers, SocialPlatform};
