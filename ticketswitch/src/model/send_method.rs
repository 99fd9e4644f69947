use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CurrencyDetails;

/// A country a send method can deliver to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    /// ISO 3166-1 code.
    #[serde(rename = "country_code")]
    pub code: String,
    /// Country name.
    #[serde(rename = "country_desc")]
    pub description: String,
}

/// Wire wrapper around a list of countries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryList {
    /// Countries.
    pub country: Vec<Country>,
}

/// A way of delivering tickets to the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMethod {
    /// Send method code.
    #[serde(rename = "send_code")]
    pub code: String,
    /// Delivery cost.
    #[serde(rename = "send_cost")]
    pub cost: Decimal,
    /// Description.
    #[serde(rename = "send_desc")]
    pub description: String,
    /// Type, e.g. `post` or `collect`.
    #[serde(rename = "send_type")]
    pub kind: String,
    /// Countries the method delivers to; empty means any.
    pub permitted_countries: CountryList,
    /// Type after purchase, which can differ from `kind`.
    #[serde(rename = "send_final_type")]
    pub final_type: String,
    /// Self-print vouchers can be generated.
    pub can_generate_self_print: bool,
    /// Location of the self-print voucher.
    pub self_print_voucher_url: String,
    /// The voucher has an HTML rendition.
    pub has_html_page: bool,
}

impl SendMethod {
    /// Countries the method delivers to.
    #[must_use]
    pub fn permitted_countries(&self) -> &[Country] {
        &self.permitted_countries.country
    }
}

/// Wire wrapper around a list of send methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMethodList {
    /// Send methods.
    pub send_method: Vec<SendMethod>,
}

/// Send methods available for a performance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMethodsResults {
    /// Currencies referenced by the costs.
    pub currency_details: CurrencyDetails,
    /// Currency of the costs.
    pub currency_code: String,
    /// Source the methods belong to.
    pub source_code: String,
    /// Send methods.
    pub send_methods: SendMethodList,
}

impl SendMethodsResults {
    /// Send methods in the result.
    #[must_use]
    pub fn send_methods(&self) -> &[SendMethod] {
        &self.send_methods.send_method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_send_methods() {
        let result: SendMethodsResults = serde_json::from_str(
            r#"{
                "currency_code": "gbp",
                "source_code": "ext_test0",
                "send_methods": {"send_method": [{
                    "send_code": "POST",
                    "send_cost": 1.5,
                    "send_desc": "Post (UK & Ireland only)",
                    "send_type": "post",
                    "send_final_type": "post",
                    "can_generate_self_print": false,
                    "permitted_countries": {"country": [
                        {"country_code": "ie", "country_desc": "Ireland"},
                        {"country_code": "uk", "country_desc": "United Kingdom"}
                    ]}
                }]}
            }"#,
        )
        .unwrap();

        assert_eq!(result.source_code, "ext_test0");
        let method = &result.send_methods()[0];
        assert_eq!(method.code, "POST");
        assert_eq!(method.cost, Decimal::new(15, 1));
        assert_eq!(method.kind, "post");
        assert_eq!(method.final_type, "post");
        assert_eq!(method.permitted_countries().len(), 2);
        assert_eq!(method.permitted_countries()[1].description, "United Kingdom");
    }
}
