use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CurrencyDetails;

/// Summary of cached availability for an event or performance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityDetails {
    /// Ticket type code.
    pub ticket_type_code: String,
    /// Ticket type description.
    #[serde(rename = "ticket_type_desc")]
    pub ticket_type_description: String,
    /// Price band code.
    pub price_band_code: String,
    /// Price band description.
    #[serde(rename = "price_band_desc")]
    pub price_band_description: String,
    /// Seat price.
    pub seatprice: Decimal,
    /// Surcharge.
    pub surcharge: Decimal,
    /// Undiscounted seat price.
    pub full_seatprice: Decimal,
    /// Undiscounted surcharge.
    pub full_surcharge: Decimal,
    /// Currency of the prices.
    #[serde(rename = "avail_currency_code")]
    pub currency_code: String,
    /// First date with availability.
    pub first_date: Option<DateTime<FixedOffset>>,
    /// Last date with availability.
    pub last_date: Option<DateTime<FixedOffset>>,
    /// Seat counts that can be bought.
    pub valid_quantities: Vec<u32>,
}

/// Commission earned by the selling user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCommission {
    /// Amount including VAT.
    #[serde(rename = "amount_including_vat")]
    pub including_vat: Decimal,
    /// Amount excluding VAT.
    #[serde(rename = "amount_excluding_vat")]
    pub excluding_vat: Decimal,
    /// Currency of the amounts.
    #[serde(rename = "commission_currency_code")]
    pub currency_code: String,
}

/// Commission available before any split with the selling user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrossCommission {
    /// Amount including VAT.
    #[serde(rename = "amount_including_vat")]
    pub including_vat: Decimal,
    /// Amount excluding VAT.
    #[serde(rename = "amount_excluding_vat")]
    pub excluding_vat: Decimal,
    /// Currency of the amounts.
    #[serde(rename = "commission_currency_code")]
    pub currency_code: String,
}

/// Seats at one price within a ticket type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBand {
    /// Price band code.
    #[serde(rename = "price_band_code")]
    pub code: String,
    /// Default discount code.
    pub discount_code: String,
    /// Default discount description.
    pub discount_desc: String,
    /// Seats available; negative when the supplier does not say.
    pub number_available: i32,
    /// Seat price.
    #[serde(rename = "sale_seatprice")]
    pub seatprice: Decimal,
    /// Surcharge.
    #[serde(rename = "sale_surcharge")]
    pub surcharge: Decimal,
    /// Single seats may be left behind: `always`, `never` or `if_necessary`.
    pub allows_leaving_single_seats: String,
    /// Priced as an offer.
    pub is_offer: bool,
    /// Seat price without the offer.
    #[serde(rename = "non_offer_sale_seatprice")]
    pub non_offer_seatprice: Decimal,
    /// Surcharge without the offer.
    #[serde(rename = "non_offer_sale_surcharge")]
    pub non_offer_surcharge: Decimal,
    /// Saving as a percentage.
    pub percentage_saving: Decimal,
    /// Saving in the currency.
    pub absolute_saving: Decimal,
    /// Raw free seat blocks, keyed by seat block.
    #[serde(rename = "free_seat_blocks")]
    pub free_seat_blocks_raw: HashMap<String, Vec<Vec<String>>>,
    /// Raw restricted view seat ids.
    pub restricted_view_seats_raw: Vec<String>,
    /// Raw ids of seats delivered by text message.
    pub seats_by_text_message_raw: Vec<String>,
    /// Predicted commission for the user.
    pub predicted_user_commission: UserCommission,
}

/// A class of ticket, e.g. stalls or circle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketType {
    /// Ticket type code.
    #[serde(rename = "ticket_type_code")]
    pub code: String,
    /// Ticket type description.
    #[serde(rename = "ticket_type_desc")]
    pub description: String,
    /// Price bands.
    #[serde(rename = "price_band")]
    pub price_bands: Vec<PriceBand>,
}

/// Ticket types available for a performance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Availability {
    /// Ticket types.
    #[serde(rename = "ticket_type")]
    pub ticket_types: Vec<TicketType>,
}

/// Live availability of a performance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityResult {
    /// Ticket types and price bands.
    pub availability: Availability,
    /// The backend reported an error.
    pub backend_is_broken: bool,
    /// The backend could not be reached.
    pub backend_is_down: bool,
    /// The backend refused due to throttling.
    pub backend_throttle_failed: bool,
    /// Seats must be contiguous.
    pub contiguous_seat_selection_only: bool,
    /// Currency of the prices.
    pub currency_code: String,
    /// Currencies referenced by the prices.
    pub currency_details: CurrencyDetails,
    /// Seat counts that can be bought.
    pub valid_quantities: Vec<u32>,
}

impl AvailabilityResult {
    /// Ticket types in the result.
    #[must_use]
    pub fn ticket_types(&self) -> &[TicketType] {
        &self.availability.ticket_types
    }
}

/// A discount applicable to a price band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    /// Saving in the currency.
    pub absolute_saving: Decimal,
    /// Single seats may be left behind.
    pub allows_leaving_single_seats: String,
    /// Discount code.
    #[serde(rename = "discount_code")]
    pub code: String,
    /// Discount description.
    #[serde(rename = "discount_desc")]
    pub description: String,
    /// Minimum eligible age; negative when unrestricted.
    #[serde(rename = "discount_minimum_eligible_age")]
    pub minimum_eligible_age: i32,
    /// Maximum eligible age; negative when unrestricted.
    #[serde(rename = "discount_maximum_eligible_age")]
    pub maximum_eligible_age: i32,
    /// Semantic type, e.g. `adult` or `child`.
    #[serde(rename = "discount_semantic_type")]
    pub semantic_type: String,
    /// Priced as an offer.
    pub is_offer: bool,
    /// Seat price without the offer.
    #[serde(rename = "non_offer_sale_seatprice")]
    pub non_offer_seatprice: Decimal,
    /// Surcharge without the offer.
    #[serde(rename = "non_offer_sale_surcharge")]
    pub non_offer_surcharge: Decimal,
    /// Seat price plus surcharge without the offer.
    #[serde(rename = "non_offer_sale_combined")]
    pub non_offer_combined: Decimal,
    /// Seats available; negative when the supplier does not say.
    pub number_available: i32,
    /// Saving as a percentage.
    pub percentage_saving: Decimal,
    /// Price band code.
    pub price_band_code: String,
    /// Seat price.
    #[serde(rename = "sale_seatprice")]
    pub seatprice: Decimal,
    /// Surcharge.
    #[serde(rename = "sale_surcharge")]
    pub surcharge: Decimal,
    /// Seat price plus surcharge.
    #[serde(rename = "sale_combined")]
    pub combined: Decimal,
}

/// Wire wrapper around a list of discounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountList {
    /// Discounts.
    pub discount: Vec<Discount>,
}

/// Discounts for a ticket type and price band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountsResult {
    /// Discounts.
    pub discounts: DiscountList,
    /// Currency of the prices.
    pub currency_code: String,
    /// Currencies referenced by the prices.
    pub currency_details: CurrencyDetails,
}

impl DiscountsResult {
    /// Discounts in the result.
    #[must_use]
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts.discount
    }
}
