use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Currency details keyed by lowercase currency code.
pub type CurrencyDetails = HashMap<String, Currency>;

/// Formatting information for a currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    /// ISO 4217 code, lowercase.
    #[serde(rename = "currency_code")]
    pub code: String,
    /// Decimal places.
    #[serde(rename = "currency_places")]
    pub places: u32,
    /// Symbol placed before the amount.
    #[serde(rename = "currency_pre_symbol")]
    pub pre_symbol: String,
    /// Symbol placed after the amount.
    #[serde(rename = "currency_post_symbol")]
    pub post_symbol: String,
    /// Minor units per major unit.
    #[serde(rename = "currency_factor")]
    pub factor: u32,
    /// ISO 4217 numeric code.
    #[serde(rename = "currency_number")]
    pub number: u32,
}
