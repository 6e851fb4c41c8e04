//! Public data models returned by the client.

use crate::constants::{default_timeout, BASE_URL, DEFAULT_USER_AGENT};
use crate::service::ServiceCode;
use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Calculator endpoint, without query string.
    pub base_url: String,
    /// Total request timeout.
    pub timeout: Duration,
    /// Optional proxy for all requests.
    pub proxy_url: Option<String>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: default_timeout(),
            proxy_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Optional services charged on top of the base price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Surcharges {
    /// Hand delivery to the addressee (`ValorMaoPropria`).
    pub hand_delivery: Decimal,
    /// Proof of delivery notice (`ValorAvisoRecebimento`).
    pub receipt_notice: Decimal,
    /// Declared value insurance (`ValorValorDeclarado`).
    pub declared_value: Decimal,
}

impl Surcharges {
    pub fn total(&self) -> Decimal {
        self.hand_delivery + self.receipt_notice + self.declared_value
    }
}

/// Price and delivery time computed for one service.
///
/// Business errors reported by the remote service (invalid CEP, weight out of
/// range, ...) are carried in `error_code`/`error_message` rather than raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    /// Service the quote refers to (`Codigo`).
    pub service_code: Option<u32>,
    /// Total price including surcharges (`Valor`).
    pub price: Option<Decimal>,
    /// Base price (`ValorSemAdicionais`).
    pub price_without_surcharges: Option<Decimal>,
    /// Estimated delivery time in business days (`PrazoEntrega`).
    pub delivery_days: Option<u32>,
    pub surcharges: Surcharges,
    /// Whether the destination gets home delivery (`EntregaDomiciliar`).
    pub home_delivery: Option<bool>,
    /// Whether delivery happens on Saturdays (`EntregaSabado`).
    pub saturday_delivery: Option<bool>,
    /// Remote error code, 0 when the calculation succeeded (`Erro`).
    pub error_code: i32,
    /// Remote error description (`MsgErro`).
    pub error_message: Option<String>,
    /// Free-text remarks about the delivery time (`obsFim`).
    pub notes: Option<String>,
}

impl QuoteResult {
    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }

    /// Catalog entry for `service_code`, if it is one of the public services.
    pub fn service(&self) -> Option<ServiceCode> {
        self.service_code
            .and_then(|code| ServiceCode::try_from(code).ok())
    }
}
