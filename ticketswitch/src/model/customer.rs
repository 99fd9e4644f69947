use serde::{Deserialize, Serialize};

use crate::params::{ParameterProvider, ParameterSet};

/// The person tickets are purchased for.
///
/// Decoded from transaction responses and sent back when purchasing. The
/// response keys for email and address lines differ from the purchase
/// parameter keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Partner reference for the customer.
    #[serde(rename = "agent_ref")]
    pub agent_reference: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// ISO 3166-1 country code.
    pub country_code: String,
    /// Title.
    pub title: String,
    /// Initials.
    pub initials: String,
    /// Suffix.
    pub suffix: String,
    /// Postcode.
    pub postcode: String,
    /// Town.
    pub town: String,
    /// County.
    pub county: String,
    /// Email address.
    #[serde(rename = "email_addr")]
    pub email_address: String,
    /// Phone number.
    pub phone: String,
    /// Work phone number.
    pub work_phone: String,
    /// Home phone number.
    pub home_phone: String,
    /// First address line.
    #[serde(rename = "addr_line_one")]
    pub address_line_one: String,
    /// Second address line.
    #[serde(rename = "addr_line_two")]
    pub address_line_two: String,
    /// The backend may use the customer's data.
    pub supplier_can_use_customer_data: bool,
    /// The selling user may use the customer's data.
    pub user_can_use_customer_data: bool,
    /// Anyone may use the customer's data.
    pub world_can_use_customer_data: bool,
}

impl ParameterProvider for Customer {
    /// Empty fields are omitted. The three consent flags are always sent as
    /// `"0"` or `"1"`.
    fn flatten(&self) -> ParameterSet {
        let mut params = ParameterSet::new();

        let fields = [
            ("agent_ref", &self.agent_reference),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("country_code", &self.country_code),
            ("title", &self.title),
            ("initials", &self.initials),
            ("suffix", &self.suffix),
            ("postcode", &self.postcode),
            ("town", &self.town),
            ("county", &self.county),
            ("email_address", &self.email_address),
            ("phone", &self.phone),
            ("work_phone", &self.work_phone),
            ("home_phone", &self.home_phone),
            ("address_line_one", &self.address_line_one),
            ("address_line_two", &self.address_line_two),
        ];
        for (key, value) in fields {
            params.set_non_empty(key, value);
        }

        let consent = [
            (
                "supplier_can_use_customer_data",
                self.supplier_can_use_customer_data,
            ),
            ("user_can_use_customer_data", self.user_can_use_customer_data),
            ("world_can_use_customer_data", self.world_can_use_customer_data),
        ];
        for (key, allowed) in consent {
            params.set(key, if allowed { "1" } else { "0" });
        }

        params
    }
}
