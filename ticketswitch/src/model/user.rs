use serde::{Deserialize, Serialize};

/// The authenticated account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User id.
    #[serde(rename = "user_id")]
    pub id: String,
    /// Display name.
    #[serde(rename = "real_name")]
    pub name: String,
    /// Default country code.
    #[serde(rename = "default_country_code")]
    pub country: String,
    /// Sub-user id.
    pub sub_user: String,
    /// Business-to-business account.
    pub is_b2b: bool,
    /// Statement descriptor for card payments.
    pub statement_descriptor: String,
    /// Backend group.
    pub backend_group: String,
    /// Content group.
    pub content_group: String,
}
