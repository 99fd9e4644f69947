use serde::{Deserialize, Serialize};

/// Paging state of a listing response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingStatus {
    /// Results per page.
    pub page_length: u32,
    /// Current page.
    pub page_number: u32,
    /// Pages after this one.
    pub pages_remaining: u32,
    /// Results after this page.
    pub results_remaining: u32,
    /// Total results across all pages.
    #[serde(rename = "total_unpaged_results")]
    pub total_results: u32,
}
