//! Blocking HTTP transport used to reach the calculator.

use crate::constants::default_headers;
use crate::error::{Error, Result};
use crate::models::Config;
use reqwest::blocking::{Client, ClientBuilder};
use tracing::debug;
use url::Url;

/// Fetches a response body with a single GET.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        (**self).get(url)
    }
}

/// [`Transport`] backed by a `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers());

        if let Some(proxy) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy).map_err(Error::Http)?);
        }

        let client = builder.build().map_err(Error::Http)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        let bytes = resp.bytes()?;
        debug!(%status, len = bytes.len(), "calculator responded");
        if !status.is_success() {
            return Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes.to_vec())
    }
}
