//! Runtime configuration from command-line flags and environment

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::matchers::{ClassMatch, Matchers};

pub const DEFAULT_URL: &str = "https://aawheel.com";
pub const DEFAULT_OUTPUT: &str = "website_data.json";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "site_parser",
    about = "Scrape website content and structure into a JSON record"
)]
pub struct ScrapeConfig {
    /// Target website URL
    #[arg(long, env = "SITE_PARSER_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Where the JSON record is written
    #[arg(short, long, env = "SITE_PARSER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(long, env = "SITE_PARSER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Request timeout in seconds
    #[arg(long, env = "SITE_PARSER_TIMEOUT", default_value_t = 15)]
    pub timeout: u64,

    /// Match class keywords only against whole class tokens
    #[arg(long)]
    pub strict_classes: bool,

    /// Skip the robots.txt lookup
    #[arg(long)]
    pub skip_robots: bool,
}

impl ScrapeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn matchers(&self) -> Matchers {
        if self.strict_classes {
            Matchers::new(ClassMatch::WholeToken)
        } else {
            Matchers::default()
        }
    }

    pub fn check_robots(&self) -> bool {
        !self.skip_robots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrapeConfig::try_parse_from(["site_parser"]).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.matchers(), Matchers::default());
        assert!(config.check_robots());
    }

    #[test]
    fn test_flags() {
        let config = ScrapeConfig::try_parse_from([
            "site_parser",
            "--url",
            "https://example.com",
            "-o",
            "out.json",
            "--timeout",
            "3",
            "--strict-classes",
            "--skip-robots",
        ])
        .unwrap();
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.matchers().class_match(), ClassMatch::WholeToken);
        assert!(!config.check_robots());
    }
}
