use serde::{Deserialize, Serialize};

/// A backend ticketing system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    /// Source code.
    #[serde(rename = "source_code")]
    pub code: String,
    /// Description.
    #[serde(rename = "source_desc_from_config")]
    pub description: String,
    /// After-sales contact address.
    #[serde(rename = "source_after_sales_email")]
    pub email: String,
    /// Postal address.
    #[serde(rename = "source_postal_addr")]
    pub address: String,
    /// System class.
    #[serde(rename = "source_system_class")]
    pub class: String,
    /// System type.
    #[serde(rename = "source_system_type_string")]
    pub kind: String,
    /// Terms and conditions.
    #[serde(rename = "source_t_and_c")]
    pub terms_and_conditions: String,
}

/// Sources available to the account.
///
/// The API answers with a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcesResult {
    /// Sources.
    pub sources: Vec<Source>,
}
