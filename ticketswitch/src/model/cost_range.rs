use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// A discounted price compared to the full price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offer {
    /// Discounted seat price.
    #[serde(rename = "offer_seatprice")]
    pub seatprice: Decimal,
    /// Discounted surcharge.
    #[serde(rename = "offer_surcharge")]
    pub surcharge: Decimal,
    /// Undiscounted seat price.
    pub full_seatprice: Decimal,
    /// Undiscounted surcharge.
    pub full_surcharge: Decimal,
    /// Saving in the currency.
    pub absolute_saving: Decimal,
    /// Saving as a percentage.
    pub percentage_saving: Decimal,
}

/// Price range summary for an event or performance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRange {
    /// Seat counts that can be bought.
    #[serde(alias = "valid_quanities")]
    pub valid_quantities: Vec<u32>,
    /// Cheapest seat price.
    pub min_seatprice: Decimal,
    /// Most expensive seat price.
    pub max_seatprice: Decimal,
    /// Cheapest surcharge.
    pub min_surcharge: Decimal,
    /// Most expensive surcharge.
    pub max_surcharge: Decimal,
    /// Currency of the prices.
    pub currency_code: String,
    /// Currency details, when embedded.
    pub currency: Currency,
    /// Best value offer.
    pub best_value_offer: Offer,
    /// Largest saving.
    pub max_saving_offer: Offer,
    /// Cheapest offer.
    pub min_cost_offer: Offer,
    /// Top price offer.
    #[serde(rename = "top_price")]
    pub top_price_offer: Offer,
}

/// Cost range for a single ticket type and price band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRangeDetails {
    /// Ticket type code.
    pub ticket_type_code: String,
    /// Price band code.
    pub price_band_code: String,
    /// Ticket type description.
    pub ticket_type_desc: String,
    /// Price band description.
    pub price_band_desc: String,
    /// Range including single seats.
    pub cost_range: CostRange,
    /// Range excluding single seats.
    pub no_singles_cost_range: CostRange,
}
