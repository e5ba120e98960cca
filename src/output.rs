//! JSON persistence and the closing report

use std::path::Path;

use crate::error::OutputError;
use crate::extractors::ExtractionResult;

/// Pretty-printed JSON with a trailing newline
pub fn to_json(result: &ExtractionResult) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

pub fn write_json(path: &Path, result: &ExtractionResult) -> Result<(), OutputError> {
    let json = to_json(result)?;
    std::fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Counts printed once the record is saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub navigation_items: usize,
    pub products: usize,
    pub testimonials: usize,
}

impl Summary {
    pub fn of(result: &ExtractionResult) -> Self {
        Self {
            navigation_items: result.navigation.main.len(),
            products: result.content.products().len(),
            testimonials: result.content.testimonials().len(),
        }
    }

    pub fn print(&self) {
        println!("  - Navigation items: {}", self.navigation_items);
        println!("  - Products: {}", self.products);
        println!("  - Testimonials: {}", self.testimonials);
    }
}
