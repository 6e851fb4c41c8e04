//! Catalog of the Correios service codes usable without a contract.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A Correios shipping service tier and its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceCode {
    /// Express delivery.
    Sedex,
    /// Express delivery by 10 a.m. the next business day.
    Sedex10,
    /// Express delivery, cash on delivery.
    SedexCod,
    /// Standard (economy) delivery.
    Pac,
}

impl ServiceCode {
    pub const ALL: [ServiceCode; 4] = [
        ServiceCode::Sedex,
        ServiceCode::Sedex10,
        ServiceCode::SedexCod,
        ServiceCode::Pac,
    ];

    /// Numeric code sent as `nCdServico`.
    pub const fn code(self) -> u32 {
        match self {
            ServiceCode::Sedex => 40010,
            ServiceCode::Sedex10 => 40215,
            ServiceCode::SedexCod => 40045,
            ServiceCode::Pac => 41106,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ServiceCode::Sedex => "SEDEX",
            ServiceCode::Sedex10 => "SEDEX10",
            ServiceCode::SedexCod => "SEDEX_COD",
            ServiceCode::Pac => "PAC",
        }
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u32> for ServiceCode {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        ServiceCode::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| Error::UnknownService(code.to_string()))
    }
}

impl FromStr for ServiceCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        if let Ok(code) = raw.parse::<u32>() {
            return ServiceCode::try_from(code);
        }
        match raw.to_ascii_uppercase().as_str() {
            "SEDEX" => Ok(ServiceCode::Sedex),
            "SEDEX10" | "SEDEX_10" => Ok(ServiceCode::Sedex10),
            "SEDEX_COD" | "SEDEXACOBRAR" | "SEDEX_A_COBRAR" => Ok(ServiceCode::SedexCod),
            "PAC" => Ok(ServiceCode::Pac),
            _ => Err(Error::UnknownService(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SEDEX", ServiceCode::Sedex)]
    #[case("sedex10", ServiceCode::Sedex10)]
    #[case("SEDEXACOBRAR", ServiceCode::SedexCod)]
    #[case(" pac ", ServiceCode::Pac)]
    #[case("41106", ServiceCode::Pac)]
    fn parses_names_and_codes(#[case] input: &str, #[case] expected: ServiceCode) {
        assert_eq!(input.parse::<ServiceCode>().unwrap(), expected);
    }

    #[test]
    fn display_is_the_wire_code() {
        assert_eq!(ServiceCode::Sedex.to_string(), "40010");
        assert_eq!(ServiceCode::SedexCod.to_string(), "40045");
    }

    #[test]
    fn rejects_unknown_services() {
        assert!(matches!(
            "CARTA".parse::<ServiceCode>(),
            Err(Error::UnknownService(name)) if name == "CARTA"
        ));
        assert!(ServiceCode::try_from(12345).is_err());
    }
}
