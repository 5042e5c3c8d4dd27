//! Client configuration.

use url::Url;

use crate::error::{ClientError, Result};

const TABLES_SEGMENT: &str = "tables/";
const DEFAULT_USER_AGENT: &str = concat!("zumo-client/", env!("CARGO_PKG_VERSION"));

/// Immutable configuration for a [`TableClient`](crate::TableClient).
///
/// Built once, never mutated; the client only ever reads it.
#[derive(Debug, Clone)]
pub struct TableClientConfig {
    /// Normalized service address, ending in the `tables/` path segment.
    pub base_url: String,
    /// Value for the `X-ZUMO-APPLICATION` header, when present.
    pub application_key: Option<String>,
    /// Value for the `X-ZUMO-MASTER` header, when present.
    pub master_key: Option<String>,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl TableClientConfig {
    /// Create a configuration with no keys from a service address.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] or
    /// [`ClientError::UnsupportedScheme`] when the address is not an absolute
    /// http(s) URL.
    pub fn new(service_url: impl Into<String>) -> Result<Self> {
        Self::builder(service_url).build()
    }

    /// Start building a configuration for the given service address.
    pub fn builder(service_url: impl Into<String>) -> TableClientConfigBuilder {
        TableClientConfigBuilder::new(service_url)
    }
}

/// Builder for [`TableClientConfig`].
#[derive(Debug)]
pub struct TableClientConfigBuilder {
    service_url: String,
    application_key: Option<String>,
    master_key: Option<String>,
    user_agent: String,
}

impl TableClientConfigBuilder {
    fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            application_key: None,
            master_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the application key (`X-ZUMO-APPLICATION`).
    pub fn application_key(mut self, key: impl Into<String>) -> Self {
        self.application_key = Some(key.into());
        self
    }

    /// Set the master key (`X-ZUMO-MASTER`), also required for `noscript`.
    pub fn master_key(mut self, key: impl Into<String>) -> Self {
        self.master_key = Some(key.into());
        self
    }

    /// Override the user agent sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Validate and normalize the service address.
    ///
    /// The scheme defaults to `https://` when absent, the path gains a
    /// trailing slash if needed, and the `tables/` segment is appended, so
    /// request URLs are always `base_url + table`.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] or
    /// [`ClientError::UnsupportedScheme`] when the address is not an absolute
    /// http(s) URL.
    pub fn build(self) -> Result<TableClientConfig> {
        let service_url = if self.service_url.starts_with("http://")
            || self.service_url.starts_with("https://")
        {
            self.service_url
        } else {
            format!("https://{}", self.service_url)
        };

        let parsed = Url::parse(&service_url)?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ClientError::UnsupportedScheme(other.to_string())),
        }

        let mut base_url = String::from(parsed.as_str());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        base_url.push_str(TABLES_SEGMENT);

        Ok(TableClientConfig {
            base_url,
            application_key: self.application_key,
            master_key: self.master_key,
            user_agent: self.user_agent,
        })
    }
}
