use crate::constants::{QUOTE_NODE, URL_OVERRIDE_KEY};
use crate::error::{Error, Result};
use crate::models::{Config, QuoteResult, Surcharges};
use crate::params::{RateField, RateRequestParameters};
use crate::transport::{HttpTransport, Transport};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};
use url::Url;
use xmltree::Element;

pub struct CorreiosClient<T = HttpTransport> {
    config: Config,
    endpoint: String,
    params: RateRequestParameters,
    transport: T,
}

impl CorreiosClient<HttpTransport> {
    pub fn new(config: Option<Config>) -> Result<Self> {
        let cfg = config.unwrap_or_default();
        let transport = HttpTransport::new(&cfg)?;
        Ok(Self::with_transport(transport, Some(cfg)))
    }

    /// Creates a client and applies `overrides` to its parameters.
    pub fn with_overrides<I, K, V>(overrides: I, config: Option<Config>) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        let mut client = Self::new(config)?;
        client.apply_overrides(overrides);
        Ok(client)
    }
}

impl<T: Transport> CorreiosClient<T> {
    pub fn with_transport(transport: T, config: Option<Config>) -> Self {
        let cfg = config.unwrap_or_default();
        Self {
            endpoint: cfg.base_url.clone(),
            config: cfg,
            params: RateRequestParameters::new(),
            transport,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Endpoint the next request goes to, after any `url` override.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn params(&self) -> &RateRequestParameters {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut RateRequestParameters {
        &mut self.params
    }

    pub fn get(&self, name: &str) -> Result<Option<&str>> {
        self.params.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl ToString) -> Result<()> {
        self.params.set(name, value)
    }

    /// Merges named values into the parameter set.
    ///
    /// Keys are field wire names or aliases; values are trimmed before being
    /// stored. The `url` key replaces the endpoint of this client. Any other
    /// key is ignored.
    pub fn apply_overrides<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        for (key, value) in overrides {
            let key = key.as_ref();
            let value = value.to_string();
            let value = value.trim();
            if key == URL_OVERRIDE_KEY {
                self.endpoint = value.to_string();
            } else if let Some(field) = RateField::lookup(key) {
                self.params.set_field(field, value);
            } else {
                debug!(key, "ignoring unknown override");
            }
        }
    }

    pub fn request_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(self.params.query_pairs());
        Ok(url)
    }

    /// Fetches the quote for the current parameters.
    ///
    /// Returns the first quote in the response, or an empty [`QuoteResult`]
    /// when the document carries none.
    pub fn request(&self) -> Result<QuoteResult> {
        let quote = self.fetch_quotes()?.into_iter().next();
        Ok(quote.unwrap_or_else(|| {
            warn!(endpoint = %self.endpoint, "response carried no quote");
            QuoteResult::default()
        }))
    }

    pub fn request_with<I, K, V>(&mut self, overrides: I) -> Result<QuoteResult>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        self.apply_overrides(overrides);
        self.request()
    }

    /// Fetches every quote in the response, for multi-service requests.
    pub fn request_all(&self) -> Result<Vec<QuoteResult>> {
        self.fetch_quotes()
    }

    fn fetch_quotes(&self) -> Result<Vec<QuoteResult>> {
        let url = self.request_url()?;
        debug!(%url, "requesting quote");
        let body = self.transport.get(&url)?;
        parse_quotes(&body)
    }
}

fn parse_quotes(body: &[u8]) -> Result<Vec<QuoteResult>> {
    let root = Element::parse(body).map_err(|e| Error::Parse(e.to_string()))?;
    root.children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|el| el.name == QUOTE_NODE)
        .map(parse_quote)
        .collect()
}

fn parse_quote(node: &Element) -> Result<QuoteResult> {
    Ok(QuoteResult {
        service_code: parse_number(node, "Codigo")?,
        price: parse_money(node, "Valor")?,
        price_without_surcharges: parse_money(node, "ValorSemAdicionais")?,
        delivery_days: parse_number(node, "PrazoEntrega")?,
        surcharges: Surcharges {
            hand_delivery: parse_money(node, "ValorMaoPropria")?.unwrap_or_default(),
            receipt_notice: parse_money(node, "ValorAvisoRecebimento")?.unwrap_or_default(),
            declared_value: parse_money(node, "ValorValorDeclarado")?.unwrap_or_default(),
        },
        home_delivery: child_text(node, "EntregaDomiciliar").map(|t| parse_flag(&t)),
        saturday_delivery: child_text(node, "EntregaSabado").map(|t| parse_flag(&t)),
        error_code: parse_number(node, "Erro")?.unwrap_or(0),
        error_message: child_text(node, "MsgErro"),
        notes: child_text(node, "obsFim"),
    })
}

fn child_text(node: &Element, name: &str) -> Option<String> {
    node.get_child(name)
        .and_then(|child| child.get_text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_number<N: FromStr>(node: &Element, name: &str) -> Result<Option<N>> {
    child_text(node, name)
        .map(|text| {
            text.parse::<N>()
                .map_err(|_| Error::Parse(format!("{name}: invalid number {text:?}")))
        })
        .transpose()
}

fn parse_money(node: &Element, name: &str) -> Result<Option<Decimal>> {
    child_text(node, name)
        .map(|text| {
            parse_brl(&text).ok_or_else(|| Error::Parse(format!("{name}: invalid amount {text:?}")))
        })
        .transpose()
}

/// Parses an amount written as `1.234,56`.
fn parse_brl(text: &str) -> Option<Decimal> {
    let normalized = text.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

fn parse_flag(text: &str) -> bool {
    matches!(text, "S" | "s")
}
