use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Where and how likes are reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) base_url: String,
    pub(crate) like_path: String,
    pub(crate) field: String,
    pub(crate) timeout: Option<Duration>,
}

impl Config {
    pub const BASE_URL_VAR: &'static str = "LIKES_BASE_URL";
    pub const TIMEOUT_VAR: &'static str = "LIKES_TIMEOUT_SECS";

    pub fn with_base_url(base_url: impl ToString) -> Self {
        Config {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Reads `LIKES_BASE_URL` and `LIKES_TIMEOUT_SECS`, falling back to the
    /// defaults for whatever isn't set.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(base_url) = std::env::var(Self::BASE_URL_VAR) {
            config.base_url = base_url;
        }

        if let Ok(secs) = std::env::var(Self::TIMEOUT_VAR) {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("{} is not a number of seconds: {e}", Self::TIMEOUT_VAR))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn like_path(mut self, path: impl ToString) -> Self {
        self.like_path = path.to_string();
        self
    }

    /// Name of the form field the message id is sent in
    pub fn field(mut self, field: impl ToString) -> Self {
        self.field = field.to_string();
        self
    }

    /// No timeout means the request is left to finish whenever it finishes
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn like_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(&self.like_path)?)
    }

    pub fn field_name(&self) -> &str {
        &self.field
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "http://127.0.0.1:5000".to_string(),
            like_path: "/do_like".to_string(),
            field: "message_id".to_string(),
            timeout: None,
        }
    }
}
