use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

pub const BASE_URL: &str = "http://ws.correios.com.br/calculador/CalcPrecoPrazo.aspx";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Override key that replaces the endpoint instead of a request field.
pub const URL_OVERRIDE_KEY: &str = "url";

/// Element holding one service quote in the response document.
pub const QUOTE_NODE: &str = "cServico";

pub const DEFAULT_USER_AGENT: &str = concat!("correios-client-rs/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/xml,text/xml;q=0.9,*/*;q=0.8"),
    ("accept-language", "pt-BR,pt;q=0.9,en;q=0.5"),
];

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (k, v) in DEFAULT_HEADERS {
        let name = HeaderName::from_static(k);
        if let Ok(val) = HeaderValue::from_str(v) {
            headers.insert(name, val);
        }
    }
    headers
}

pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}
