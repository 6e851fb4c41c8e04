//! Named request parameters for the price/delivery-time calculator.
//!
//! Every field is always serialized, in declaration order. Fields without a
//! value go out as an empty token and the remote service reports the problem
//! inside the quote.

use crate::error::{Error, Result};
use crate::service::ServiceCode;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of request fields. Variant order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RateField {
    CompanyId,
    CompanyPassword,
    OriginPostalCode,
    DestinationPostalCode,
    WeightKg,
    PackageFormat,
    LengthCm,
    HeightCm,
    WidthCm,
    HandDelivery,
    DeclaredValue,
    ReceiptNotice,
    ServiceCode,
    DiameterCm,
    ResponseFormat,
    CalculationMode,
}

impl RateField {
    pub const ALL: [RateField; 16] = [
        RateField::CompanyId,
        RateField::CompanyPassword,
        RateField::OriginPostalCode,
        RateField::DestinationPostalCode,
        RateField::WeightKg,
        RateField::PackageFormat,
        RateField::LengthCm,
        RateField::HeightCm,
        RateField::WidthCm,
        RateField::HandDelivery,
        RateField::DeclaredValue,
        RateField::ReceiptNotice,
        RateField::ServiceCode,
        RateField::DiameterCm,
        RateField::ResponseFormat,
        RateField::CalculationMode,
    ];

    /// Parameter name expected by the remote service.
    pub const fn wire_name(self) -> &'static str {
        match self {
            RateField::CompanyId => "nCdEmpresa",
            RateField::CompanyPassword => "sDsSenha",
            RateField::OriginPostalCode => "sCepOrigem",
            RateField::DestinationPostalCode => "sCepDestino",
            RateField::WeightKg => "nVlPeso",
            RateField::PackageFormat => "nCdFormato",
            RateField::LengthCm => "nVlComprimento",
            RateField::HeightCm => "nVlAltura",
            RateField::WidthCm => "nVlLargura",
            RateField::HandDelivery => "sCdMaoPropria",
            RateField::DeclaredValue => "nVlValorDeclarado",
            RateField::ReceiptNotice => "sCdAvisoRecebimento",
            RateField::ServiceCode => "nCdServico",
            RateField::DiameterCm => "nVlDiametro",
            RateField::ResponseFormat => "StrRetorno",
            RateField::CalculationMode => "nIndicaCalculo",
        }
    }

    pub const fn alias(self) -> &'static str {
        match self {
            RateField::CompanyId => "companyId",
            RateField::CompanyPassword => "companyPassword",
            RateField::OriginPostalCode => "originPostalCode",
            RateField::DestinationPostalCode => "destinationPostalCode",
            RateField::WeightKg => "weightKg",
            RateField::PackageFormat => "packageFormat",
            RateField::LengthCm => "lengthCm",
            RateField::HeightCm => "heightCm",
            RateField::WidthCm => "widthCm",
            RateField::HandDelivery => "handDelivery",
            RateField::DeclaredValue => "declaredValue",
            RateField::ReceiptNotice => "receiptNotice",
            RateField::ServiceCode => "serviceCode",
            RateField::DiameterCm => "diameterCm",
            RateField::ResponseFormat => "responseFormat",
            RateField::CalculationMode => "calculationMode",
        }
    }

    pub const fn default_value(self) -> Option<&'static str> {
        match self {
            RateField::PackageFormat => Some("1"),
            RateField::HandDelivery | RateField::ReceiptNotice => Some("N"),
            RateField::DeclaredValue | RateField::DiameterCm => Some("0"),
            RateField::ResponseFormat => Some("xml"),
            RateField::CalculationMode => Some("3"),
            _ => None,
        }
    }

    /// Finds a field by wire name or alias.
    pub fn lookup(name: &str) -> Option<Self> {
        RateField::ALL
            .into_iter()
            .find(|f| f.wire_name() == name || f.alias() == name)
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for RateField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RateField::lookup(s).ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Package shape (`nCdFormato`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    Box = 1,
    RollOrPrism = 2,
    Envelope = 3,
}

/// Which outputs the remote service computes (`nIndicaCalculo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMode {
    PriceOnly = 1,
    DeadlineOnly = 2,
    PriceAndDeadline = 3,
}

fn flag(value: bool) -> &'static str {
    if value {
        "S"
    } else {
        "N"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequestParameters {
    values: BTreeMap<RateField, String>,
}

impl Default for RateRequestParameters {
    fn default() -> Self {
        let values = RateField::ALL
            .into_iter()
            .filter_map(|f| f.default_value().map(|v| (f, v.to_string())))
            .collect();
        Self { values }
    }
}

impl RateRequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: RateField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn set_field(&mut self, field: RateField, value: impl ToString) -> &mut Self {
        self.values.insert(field, value.to_string());
        self
    }

    /// Removes the value, defaults included. The field still serializes, empty.
    pub fn clear_field(&mut self, field: RateField) -> &mut Self {
        self.values.remove(&field);
        self
    }

    /// Reads a field by wire name or alias.
    ///
    /// Returns `Ok(None)` for a known field without a value and
    /// [`Error::UnknownField`] for a name outside the field set.
    pub fn get(&self, name: &str) -> Result<Option<&str>> {
        let field: RateField = name.parse()?;
        Ok(self.field(field))
    }

    /// Writes a field by wire name or alias, storing the value verbatim.
    pub fn set(&mut self, name: &str, value: impl ToString) -> Result<()> {
        let field: RateField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Every field in wire order, unset ones as an empty string.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        RateField::ALL
            .into_iter()
            .map(|f| (f.wire_name(), self.field(f).unwrap_or("")))
    }

    pub fn set_credentials(&mut self, company_id: &str, password: &str) -> &mut Self {
        self.set_field(RateField::CompanyId, company_id)
            .set_field(RateField::CompanyPassword, password)
    }

    pub fn set_origin(&mut self, cep: &str) -> &mut Self {
        self.set_field(RateField::OriginPostalCode, cep)
    }

    pub fn set_destination(&mut self, cep: &str) -> &mut Self {
        self.set_field(RateField::DestinationPostalCode, cep)
    }

    pub fn set_weight_kg(&mut self, weight: Decimal) -> &mut Self {
        self.set_field(RateField::WeightKg, weight.normalize())
    }

    pub fn set_dimensions(&mut self, length_cm: u32, height_cm: u32, width_cm: u32) -> &mut Self {
        self.set_field(RateField::LengthCm, length_cm)
            .set_field(RateField::HeightCm, height_cm)
            .set_field(RateField::WidthCm, width_cm)
    }

    pub fn set_diameter_cm(&mut self, diameter_cm: u32) -> &mut Self {
        self.set_field(RateField::DiameterCm, diameter_cm)
    }

    pub fn set_package_format(&mut self, format: PackageFormat) -> &mut Self {
        self.set_field(RateField::PackageFormat, format as u8)
    }

    pub fn set_hand_delivery(&mut self, enabled: bool) -> &mut Self {
        self.set_field(RateField::HandDelivery, flag(enabled))
    }

    pub fn set_receipt_notice(&mut self, enabled: bool) -> &mut Self {
        self.set_field(RateField::ReceiptNotice, flag(enabled))
    }

    /// Declared value, only charged for by the cash-on-delivery service.
    pub fn set_declared_value(&mut self, value: Decimal) -> &mut Self {
        self.set_field(RateField::DeclaredValue, value.normalize())
    }

    pub fn set_service(&mut self, service: ServiceCode) -> &mut Self {
        self.set_field(RateField::ServiceCode, service)
    }

    /// Requests several services at once; the response carries one quote each.
    pub fn set_services(&mut self, services: &[ServiceCode]) -> &mut Self {
        let joined = services
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.set_field(RateField::ServiceCode, joined)
    }

    pub fn set_response_format(&mut self, format: &str) -> &mut Self {
        self.set_field(RateField::ResponseFormat, format)
    }

    pub fn set_calculation_mode(&mut self, mode: CalculationMode) -> &mut Self {
        self.set_field(RateField::CalculationMode, mode as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_the_service_documentation() {
        let params = RateRequestParameters::new();
        assert_eq!(params.field(RateField::PackageFormat), Some("1"));
        assert_eq!(params.field(RateField::HandDelivery), Some("N"));
        assert_eq!(params.field(RateField::DeclaredValue), Some("0"));
        assert_eq!(params.field(RateField::ReceiptNotice), Some("N"));
        assert_eq!(params.field(RateField::DiameterCm), Some("0"));
        assert_eq!(params.field(RateField::ResponseFormat), Some("xml"));
        assert_eq!(params.field(RateField::CalculationMode), Some("3"));
        assert_eq!(params.field(RateField::CompanyId), None);
        assert_eq!(params.field(RateField::WeightKg), None);
    }

    #[test]
    fn query_pairs_cover_every_field_once_in_order() {
        let params = RateRequestParameters::new();
        let names: Vec<_> = params.query_pairs().map(|(name, _)| name).collect();
        let expected: Vec<_> = RateField::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(names, expected);
        assert_eq!(names[0], "nCdEmpresa");
        assert_eq!(names[15], "nIndicaCalculo");

        let (_, company) = params.query_pairs().next().unwrap();
        assert_eq!(company, "");
    }

    #[test]
    fn get_and_set_accept_wire_names_and_aliases() {
        let mut params = RateRequestParameters::new();
        params.set("sCepOrigem", "11680000").unwrap();
        params.set("destinationPostalCode", "82220000").unwrap();
        assert_eq!(params.get("originPostalCode").unwrap(), Some("11680000"));
        assert_eq!(params.get("sCepDestino").unwrap(), Some("82220000"));
        assert_eq!(params.get("nVlPeso").unwrap(), None);
    }

    #[test]
    fn unknown_names_are_lookup_errors() {
        let mut params = RateRequestParameters::new();
        assert!(matches!(params.get("bogus"), Err(Error::UnknownField(name)) if name == "bogus"));
        assert!(matches!(params.set("bogus", 1), Err(Error::UnknownField(_))));
        assert_eq!(params, RateRequestParameters::new());
    }

    #[test]
    fn typed_setters_write_wire_values() {
        let mut params = RateRequestParameters::new();
        params
            .set_weight_kg(dec!(0.30))
            .set_dimensions(30, 15, 20)
            .set_package_format(PackageFormat::Envelope)
            .set_hand_delivery(true)
            .set_declared_value(dec!(150.00))
            .set_services(&[ServiceCode::Sedex, ServiceCode::Pac])
            .set_calculation_mode(CalculationMode::PriceOnly);

        assert_eq!(params.field(RateField::WeightKg), Some("0.3"));
        assert_eq!(params.field(RateField::LengthCm), Some("30"));
        assert_eq!(params.field(RateField::HeightCm), Some("15"));
        assert_eq!(params.field(RateField::WidthCm), Some("20"));
        assert_eq!(params.field(RateField::PackageFormat), Some("3"));
        assert_eq!(params.field(RateField::HandDelivery), Some("S"));
        assert_eq!(params.field(RateField::DeclaredValue), Some("150"));
        assert_eq!(params.field(RateField::ServiceCode), Some("40010,41106"));
        assert_eq!(params.field(RateField::CalculationMode), Some("1"));
    }

    #[test]
    fn clearing_a_default_leaves_an_empty_token() {
        let mut params = RateRequestParameters::new();
        params.clear_field(RateField::ResponseFormat);
        let format = params
            .query_pairs()
            .find(|(name, _)| *name == "StrRetorno")
            .map(|(_, value)| value);
        assert_eq!(format, Some(""));
    }
}
