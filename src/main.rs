use clap::Parser;
use tracing::warn;
use url::Url;

use site_parser::config::ScrapeConfig;
use site_parser::fetch::Fetcher;
use site_parser::output::{write_json, Summary};
use site_parser::robots::check_robots;
use site_parser::{fallback_record, Assembler};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ScrapeConfig::parse();
    println!("Scraping website: {}", config.url);

    let assembler = Assembler::new(config.matchers());
    let fetcher = Fetcher::new(config.user_agent.clone(), config.timeout());

    // A failed fetch is not an error: the record falls back to the built-in data
    let result = match Url::parse(&config.url) {
        Ok(base_url) => {
            if config.check_robots() {
                let robots = check_robots(fetcher.agent(), &base_url, fetcher.user_agent());
                if robots.found {
                    println!("✓ Found robots.txt");
                }
                if !robots.allowed {
                    println!("robots.txt disallows this page, scraping anyway");
                }
            }

            println!("Scraping main page...");
            let document = fetcher.fetch_optional(&base_url);
            if document.is_none() {
                println!("Failed to scrape main page. Using fallback data.");
            }
            assembler.assemble(document.as_ref(), &base_url)
        }
        Err(err) => {
            warn!(url = %config.url, error = %err, "invalid target URL");
            println!("Invalid URL. Using fallback data.");
            fallback_record()
        }
    };

    write_json(&config.output, &result)?;

    println!(
        "✓ Scraping complete! Data saved to {}",
        config.output.display()
    );
    Summary::of(&result).print();

    Ok(())
}
