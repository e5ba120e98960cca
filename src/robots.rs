//! robots.txt advisory check

use texting_robots::Robot;
use tracing::{info, warn};
use url::Url;

/// Outcome of looking up robots.txt for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotsCheck {
    /// robots.txt was fetched successfully
    pub found: bool,
    pub allowed: bool,
}

impl RobotsCheck {
    fn missing() -> Self {
        Self {
            found: false,
            allowed: true,
        }
    }
}

/// Fetch `<scheme>://<host>/robots.txt` and check `url` against it.
///
/// Advisory only: any failure (bad URL, network, non-2xx) counts as "not found, allowed".
pub fn check_robots(agent: &ureq::Agent, url: &Url, user_agent: &str) -> RobotsCheck {
    let Some(host) = url.host_str() else {
        return RobotsCheck::missing();
    };
    let robots_url = match url.port() {
        Some(port) => format!("{}://{}:{}/robots.txt", url.scheme(), host, port),
        None => format!("{}://{}/robots.txt", url.scheme(), host),
    };

    let robots_txt = match agent
        .get(&robots_url)
        .header("User-Agent", user_agent)
        .call()
    {
        Ok(resp) if resp.status().is_success() => {
            resp.into_body().read_to_string().unwrap_or_default()
        }
        _ => return RobotsCheck::missing(),
    };

    info!(robots_url = %robots_url, "found robots.txt");
    let allowed = is_allowed(&robots_txt, url.as_str(), user_agent);
    if !allowed {
        warn!(url = %url, "robots.txt disallows this page, continuing anyway");
    }

    RobotsCheck {
        found: true,
        allowed,
    }
}

/// Evaluate robots.txt rules; unparsable files allow everything
pub fn is_allowed(robots_txt: &str, url: &str, user_agent: &str) -> bool {
    Robot::new(user_agent, robots_txt.as_bytes())
        .map(|r| r.allowed(url))
        .unwrap_or(true)
}
