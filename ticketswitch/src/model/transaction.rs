use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CurrencyDetails, Customer, Order, Trolley, User};

/// Outcome of placing a hold on inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationResult {
    /// Countries the customer may come from, keyed by country code.
    pub allowed_countries: HashMap<String, String>,
    /// The customer's address may be edited.
    pub can_edit_address: bool,
    /// Currencies referenced by the trolley.
    pub currency_details: CurrencyDetails,
    /// Some requested orders could not be reserved.
    pub input_contained_unavailable_order: bool,
    /// Languages the backend supports.
    pub language_list: Vec<String>,
    /// Minutes before the hold expires.
    pub minutes_left_on_reserve: f64,
    /// Purchasing needs an agent reference.
    pub needs_agent_reference: bool,
    /// Purchasing needs an email address.
    pub needs_email_address: bool,
    /// Purchasing needs card details.
    pub needs_payment_card: bool,
    /// Address details known in advance.
    pub prefilled_address: HashMap<String, String>,
    /// When the hold was placed.
    #[serde(rename = "reserve_iso8601_date_and_time")]
    pub reserve_datetime: Option<DateTime<FixedOffset>>,
    /// Transaction status, e.g. `reserved`.
    pub transaction_status: String,
    /// Reserved orders.
    #[serde(rename = "trolley_contents")]
    pub trolley: Trolley,
    /// Orders that could not be reserved.
    pub unreserved_orders: Vec<Order>,
}

/// The party that takes payment for a callout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Debitor {
    /// Debitor type.
    #[serde(rename = "debitor_type")]
    pub kind: String,
    /// Debitor name.
    #[serde(rename = "debitor_name")]
    pub name: String,
    /// Description.
    #[serde(rename = "debitor_desc")]
    pub description: String,
    /// Integration specific data, passed through untouched.
    #[serde(rename = "debitor_integration_data")]
    pub integration_data: serde_json::Map<String, serde_json::Value>,
    /// Aggregation key.
    #[serde(rename = "debitor_aggregation_key", alias = "debitor_aggregration_key")]
    pub aggregation_key: String,
}

/// A redirect to a third party, usually a payment provider.
///
/// The purchase is completed by a follow-up call once the customer returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Callout {
    /// Source code of the bundle being paid for.
    #[serde(rename = "bundle_source_code")]
    pub code: String,
    /// Source description.
    #[serde(rename = "bundle_source_desc")]
    pub description: String,
    /// Amount to pay.
    #[serde(rename = "bundle_total_cost")]
    pub total: Decimal,
    /// Callout type, e.g. `get` or `post`.
    #[serde(rename = "callout_type")]
    pub kind: String,
    /// Where to send the customer.
    #[serde(rename = "callout_destination_url")]
    pub destination: String,
    /// Parameters to send with the redirect.
    #[serde(rename = "callout_parameters")]
    pub parameters: HashMap<String, String>,
    /// Integration specific data, passed through untouched.
    #[serde(rename = "callout_integration_data")]
    pub integration_data: serde_json::Map<String, serde_json::Value>,
    /// Payment taker.
    pub debitor: Debitor,
    /// Currency of the amount.
    pub currency_code: String,
}

/// Outcome of a purchase attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakePurchaseResult {
    /// Transaction status, e.g. `purchased` or `attempting`.
    #[serde(rename = "transaction_status")]
    pub status: String,
    /// Redirect needed to complete the purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout: Option<Callout>,
    /// Redirect for a further bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_callout: Option<Callout>,
    /// Currencies referenced by the trolley.
    #[serde(rename = "currency_details")]
    pub currency: CurrencyDetails,
    /// Purchased orders.
    #[serde(rename = "trolley_contents")]
    pub trolley: Trolley,
    /// Customer the purchase was made for.
    pub customer: Customer,
    /// When the hold was placed.
    #[serde(rename = "reserve_iso8601_date_and_time")]
    pub reserve_datetime: Option<DateTime<FixedOffset>>,
    /// When the purchase completed.
    #[serde(rename = "purchase_iso8601_date_and_time")]
    pub purchase_datetime: Option<DateTime<FixedOffset>>,
    /// Account that made the reservation.
    pub reserve_user: User,
    /// Languages the backend supports.
    #[serde(rename = "language_list")]
    pub languages: Vec<String>,
}

/// Current state of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResult {
    /// Languages the backend supports.
    #[serde(rename = "language_list")]
    pub languages: Vec<String>,
    /// Orders in the transaction.
    #[serde(rename = "trolley_contents")]
    pub trolley: Trolley,
    /// When the hold was placed.
    #[serde(rename = "reserve_iso8601_date_and_time")]
    pub reserve_datetime: Option<DateTime<FixedOffset>>,
    /// When the purchase completed.
    #[serde(rename = "purchase_iso8601_date_and_time")]
    pub purchase_datetime: Option<DateTime<FixedOffset>>,
    /// Currencies referenced by the trolley.
    pub currency_details: CurrencyDetails,
    /// Transaction status.
    #[serde(rename = "transaction_status")]
    pub status: String,
    /// Customer, when requested with `add_customer`.
    pub customer: Customer,
}

/// Outcome of a cancellation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancellationResult {
    /// Item numbers that were cancelled.
    pub cancelled_item_numbers: Vec<u32>,
    /// Orders that have to be cancelled together with the requested ones.
    pub must_also_cancel: Vec<Order>,
    /// Transaction after cancelling.
    #[serde(rename = "trolley_contents")]
    pub trolley: Trolley,
    /// Currencies referenced by the trolley.
    pub currency_details: CurrencyDetails,
}

impl CancellationResult {
    /// Returns `true` if every order in the transaction is now cancelled.
    #[must_use]
    pub fn is_fully_cancelled(&self) -> bool {
        self.trolley.is_fully_cancelled()
    }
}
