use crate::errors::ClientError;
use reqwest::Url;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BADGE_ID: &str = "cartBadge";
pub const DEFAULT_CHECKOUT_SELECTOR: &str = ".checkout-container";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub badge_id: String,
    pub checkout_selector: String,
    pub home_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            badge_id: DEFAULT_BADGE_ID.to_string(),
            checkout_selector: DEFAULT_CHECKOUT_SELECTOR.to_string(),
            home_path: HOME_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let defaults = Self::default();
        let base_url = lookup("APP_BASE_URL").unwrap_or(defaults.base_url);

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            badge_id: lookup("APP_BADGE_ID").unwrap_or(defaults.badge_id),
            checkout_selector: lookup("APP_CHECKOUT_SELECTOR").unwrap_or(defaults.checkout_selector),
            home_path: defaults.home_path,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ClientError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Absolute URL for a backend path such as `/cart`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|err| ClientError::invalid_base_url(raw, err.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ClientError::invalid_base_url(raw, "scheme must be http or https"));
    }

    Ok(trimmed.to_string())
}
