use url::Url;
use yewdux::Store;

use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// where the user collection lives
#[derive(Debug, Clone, PartialEq, Store)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Accepts an absolute http(s) url; trailing slashes are dropped so
    /// paths can be appended verbatim.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(crate::error::Error::Config(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Config for an optional override, falling back to the default when it
    /// is missing or not a usable url.
    pub fn resolve(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url).unwrap_or_else(|err| {
                log::warn!("ignoring api base url {:?}: {}", url, err);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn user_url(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base_url)
    }
}
