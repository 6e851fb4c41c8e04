pub mod client;
pub mod constants;
pub mod error;
pub mod models;
pub mod params;
pub mod service;
pub mod transport;

pub use client::CorreiosClient;
pub use constants::{default_headers, default_timeout, BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use models::{Config, QuoteResult, Surcharges};
pub use params::{CalculationMode, PackageFormat, RateField, RateRequestParameters};
pub use service::ServiceCode;
pub use transport::{HttpTransport, Transport};
