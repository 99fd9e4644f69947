use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Event, GrossCommission, Performance, SendMethod, UserCommission};

/// Cancellation status of an order that has been cancelled.
pub const CANCELLED: &str = "cancelled";

/// A reserved or purchased seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seat {
    /// Column id.
    #[serde(rename = "col_id")]
    pub column_id: String,
    /// Full seat id.
    pub full_id: String,
    /// The view is restricted.
    pub is_restricted_view: bool,
    /// Row id.
    pub row_id: String,
    /// Free text about the seat.
    pub seat_text: String,
    /// Backend specific seat data.
    pub seat_subdata: String,
    /// Ticket barcode, once purchased.
    pub barcode: String,
}

/// Seats bought with one discount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketOrder {
    /// Discount code.
    pub discount_code: String,
    /// Discount description.
    pub discount_desc: String,
    /// Number of seats.
    #[serde(rename = "no_of_seats")]
    pub number_of_seats: u32,
    /// Seat price per seat.
    #[serde(rename = "sale_seatprice")]
    pub seatprice: Decimal,
    /// Surcharge per seat.
    #[serde(rename = "sale_surcharge")]
    pub surcharge: Decimal,
    /// Seats.
    pub seats: Vec<Seat>,
    /// Seat price for all seats.
    #[serde(rename = "total_sale_seatprice")]
    pub total_seatprice: Decimal,
    /// Surcharge for all seats.
    #[serde(rename = "total_sale_surcharge")]
    pub total_surcharge: Decimal,
}

/// Wire wrapper around a list of ticket orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketOrderList {
    /// Ticket orders.
    pub ticket_order: Vec<TicketOrder>,
}

/// Tickets for one performance, ticket type and price band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Event.
    pub event: Event,
    /// The requested seats were reserved.
    pub got_requested_seats: bool,
    /// Item number within the trolley; used to cancel single items.
    pub item_number: u32,
    /// Performance.
    pub performance: Performance,
    /// Price band code.
    pub price_band_code: String,
    /// Seats that were asked for.
    pub requested_seat_ids: Vec<String>,
    /// Why the reservation failed, if it did.
    pub reserve_failure_comment: String,
    /// Outcome of a specific seat request.
    pub seat_request_status: String,
    /// Delivery method.
    pub send_method: SendMethod,
    /// Seats grouped by discount.
    pub ticket_orders: TicketOrderList,
    /// Ticket type code.
    pub ticket_type_code: String,
    /// Ticket type description.
    pub ticket_type_desc: String,
    /// Number of seats across all ticket orders.
    #[serde(rename = "total_no_of_seats")]
    pub total_number_of_seats: u32,
    /// Seat price across all ticket orders.
    #[serde(rename = "total_sale_seatprice")]
    pub total_seatprice: Decimal,
    /// Surcharge across all ticket orders.
    #[serde(rename = "total_sale_surcharge")]
    pub total_surcharge: Decimal,
    /// Commission for the selling user.
    pub user_commission: UserCommission,
    /// Commission before any split.
    pub gross_commission: GrossCommission,
    /// Booking reference on the backend.
    pub backend_purchase_reference: String,
    /// Cancellation state, `cancelled` once cancelled.
    pub cancellation_status: String,
}

impl Order {
    /// Ticket orders in this order.
    #[must_use]
    pub fn ticket_orders(&self) -> &[TicketOrder] {
        &self.ticket_orders.ticket_order
    }

    /// Returns `true` if this order has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation_status == CANCELLED
    }
}

/// Total cost charged to the selling agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentCost {
    /// Currency of the amount.
    pub currency_code: String,
    /// Amount.
    pub total_agent_cost: Decimal,
}

/// Outcome of a purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseResult {
    /// Only part of the trolley was purchased.
    pub is_partial: bool,
    /// The purchase succeeded.
    pub success: bool,
    /// Cost to the agent.
    pub agent_cost: AgentCost,
    /// Part of the cost was on credit.
    pub is_semi_credit: bool,
}

/// Orders from one backend system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bundle {
    /// Number of orders.
    #[serde(rename = "bundle_order_count")]
    pub order_count: u32,
    /// Source code.
    #[serde(rename = "bundle_source_code")]
    pub source_code: String,
    /// Source description.
    #[serde(rename = "bundle_source_desc")]
    pub source_desc: String,
    /// Total cost.
    #[serde(rename = "bundle_total_cost")]
    pub total_cost: Decimal,
    /// Total seat price.
    #[serde(rename = "bundle_total_seatprice")]
    pub total_seatprice: Decimal,
    /// Total send cost.
    #[serde(rename = "bundle_total_send_cost")]
    pub total_send_cost: Decimal,
    /// Total surcharge.
    #[serde(rename = "bundle_total_surcharge")]
    pub total_surcharge: Decimal,
    /// Currency of the amounts.
    pub currency_code: String,
    /// Orders.
    #[serde(rename = "order")]
    pub orders: Vec<Order>,
    /// Outcome of purchasing this bundle.
    pub purchase_result: PurchaseResult,
}

/// The contents of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trolley {
    /// Bundles, one per backend system.
    #[serde(rename = "bundle")]
    pub bundles: Vec<Bundle>,
    /// Transaction uuid.
    pub transaction_uuid: String,
    /// Transaction id.
    pub transaction_id: String,
    /// Number of bundles.
    #[serde(rename = "trolley_bundle_count")]
    pub bundle_count: u32,
    /// Number of orders.
    #[serde(rename = "trolley_order_count")]
    pub order_count: u32,
    /// Outcome of purchasing the whole trolley.
    pub purchase_result: PurchaseResult,
}

impl Trolley {
    /// Iterates every order across all bundles.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.bundles.iter().flat_map(|bundle| bundle.orders.iter())
    }

    /// Returns `true` if every order in every bundle is cancelled.
    ///
    /// A trolley without bundles reports `false`: there is nothing to
    /// confirm as cancelled.
    #[must_use]
    pub fn is_fully_cancelled(&self) -> bool {
        !self.bundles.is_empty() && self.orders().all(Order::is_cancelled)
    }
}
