use std::sync::Arc;

use chrono::NaiveDate;

use super::{DATE_FORMAT, ParameterProvider, ParameterSet, PaymentMethod, UniversalParams, join_list};
use crate::model::Customer;

/// Options for placing a hold on inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeReservationParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Departure date for products that need one.
    pub departure_date: Option<NaiveDate>,
    /// Discount codes, one per seat, sent as `disc0`, `disc1`, ...
    pub discounts: Vec<String>,
    /// Number of seats to reserve.
    pub number_of_seats: u32,
    /// Performance to reserve.
    pub performance_id: String,
    /// Price band code.
    pub price_band_code: String,
    /// Specific seat ids, sent as `seat0`, `seat1`, ...
    pub seats: Vec<String>,
    /// Send method code; needs `source_code` to be sent.
    pub send_method: Option<String>,
    /// Source of the send method.
    pub source_code: Option<String>,
    /// Ticket type code.
    pub ticket_type_code: String,
    /// Existing trolley to add to.
    pub trolley_token: Option<String>,
    /// Include predicted commission.
    pub user_commission: bool,
}

impl ParameterProvider for MakeReservationParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();

        if self.number_of_seats > 0 {
            params.set("no_of_seats", self.number_of_seats.to_string());
        }
        params.set_non_empty("perf_id", &self.performance_id);
        params.set_non_empty("price_band_code", &self.price_band_code);
        params.set_non_empty("ticket_type_code", &self.ticket_type_code);

        if let Some(date) = self.departure_date {
            params.set("departure_date", date.format(DATE_FORMAT).to_string());
        }
        for (index, discount) in self.discounts.iter().enumerate() {
            params.set(format!("disc{index}"), discount.as_str());
        }
        for (index, seat) in self.seats.iter().enumerate() {
            params.set(format!("seat{index}"), seat.as_str());
        }
        if let (Some(send_method), Some(source_code)) = (&self.send_method, &self.source_code)
            && !send_method.is_empty()
            && !source_code.is_empty()
        {
            params.set(format!("{source_code}_send_code"), send_method.as_str());
        }
        if let Some(token) = &self.trolley_token {
            params.set_non_empty("trolley_token", token);
        }
        if self.user_commission {
            params.set_flag("req_predicted_commission");
        }

        params
    }
}

/// Options identifying an existing transaction.
///
/// Used by the release and status calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Transaction to act on.
    pub transaction_uuid: String,
}

impl TransactionParams {
    /// Creates options for the given transaction.
    #[must_use]
    pub fn new(transaction_uuid: impl Into<String>) -> Self {
        Self {
            transaction_uuid: transaction_uuid.into(),
            ..Self::default()
        }
    }
}

impl ParameterProvider for TransactionParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();
        params.set_non_empty("transaction_uuid", &self.transaction_uuid);
        params
    }
}

/// Options for purchasing a reserved transaction.
///
/// A payment method is only needed when not purchasing on credit. Setting
/// `send_confirmation_email` requires an email address on the customer.
#[derive(Debug, Clone, Default)]
pub struct MakePurchaseParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Reserved transaction to purchase.
    pub transaction_uuid: String,
    /// Partner reference for the purchase.
    pub agent_reference: Option<String>,
    /// Customer details.
    pub customer: Customer,
    /// Payment details, merged in verbatim.
    pub payment_method: Option<Arc<dyn PaymentMethod>>,
    /// Ask the API to email the customer a confirmation.
    pub send_confirmation_email: bool,
}

impl MakePurchaseParams {
    /// Creates options for the given transaction and customer.
    #[must_use]
    pub fn new(transaction_uuid: impl Into<String>, customer: Customer) -> Self {
        Self {
            transaction_uuid: transaction_uuid.into(),
            customer,
            ..Self::default()
        }
    }

    /// Attaches a payment method.
    #[must_use]
    pub fn with_payment_method(mut self, payment_method: impl PaymentMethod + 'static) -> Self {
        self.payment_method = Some(Arc::new(payment_method));
        self
    }
}

impl ParameterProvider for MakePurchaseParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();

        params.set_non_empty("transaction_uuid", &self.transaction_uuid);
        if let Some(reference) = &self.agent_reference {
            params.set_non_empty("agent_reference", reference);
        }
        if self.send_confirmation_email {
            params.set_flag("send_confirmation_email");
        }
        params.merge(self.customer.flatten());
        if let Some(payment_method) = &self.payment_method {
            params.merge(payment_method.payment_params());
        }

        params
    }
}

/// Options for cancelling a purchased transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancellationParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Transaction to cancel. Always sent.
    pub transaction_uuid: String,
    /// Item numbers to cancel; all items when empty.
    pub cancel_items: Vec<u32>,
}

impl CancellationParams {
    /// Creates options cancelling every item of the given transaction.
    #[must_use]
    pub fn new(transaction_uuid: impl Into<String>) -> Self {
        Self {
            transaction_uuid: transaction_uuid.into(),
            ..Self::default()
        }
    }
}

impl ParameterProvider for CancellationParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();
        params.set_non_empty("transaction_uuid", &self.transaction_uuid);
        if !self.cancel_items.is_empty() {
            params.set("cancel_items_list", join_list(&self.cancel_items));
        }
        params
    }
}

/// Options for validating an email address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCheckParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Address to validate.
    pub email_address: String,
}

impl EmailCheckParams {
    /// Creates options for the given address.
    #[must_use]
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ..Self::default()
        }
    }
}

impl ParameterProvider for EmailCheckParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();
        params.set_non_empty("email_address", &self.email_address);
        params
    }
}
