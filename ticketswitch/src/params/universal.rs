use std::collections::BTreeMap;

use super::{ParameterProvider, ParameterSet};

/// Media assets requested by [`UniversalParams::media`].
const MEDIA_KEYS: [&str; 10] = [
    "req_media_triplet_one",
    "req_media_triplet_two",
    "req_media_triplet_three",
    "req_media_triplet_four",
    "req_media_triplet_five",
    "req_media_seating_plan",
    "req_media_square",
    "req_media_landscape",
    "req_media_marquee",
    "req_video_iframe",
];

/// Options accepted by every call.
///
/// Several flags depend on others: requesting any offer variant implies
/// `req_cost_range`, and availability with performances implies
/// `req_avail_details`. Both keys are always emitted together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniversalParams {
    /// Availability details for events and performances.
    pub availability: bool,
    /// Availability details including per-performance data.
    pub availability_with_performances: bool,
    /// Extra descriptive info for events.
    pub extra_info: bool,
    /// Critic and user reviews.
    pub reviews: bool,
    /// All media assets.
    pub media: bool,
    /// Cost ranges.
    pub cost_range: bool,
    /// Best value offer (implies cost range).
    pub best_value_offer: bool,
    /// Maximum saving offer (implies cost range).
    pub max_saving_offer: bool,
    /// Minimum cost offer (implies cost range).
    pub min_cost_offer: bool,
    /// Top price offer (implies cost range).
    pub top_price_offer: bool,
    /// Cost ranges excluding single seats (implies cost range).
    pub no_singles_data: bool,
    /// Per ticket type and price band cost range breakdown.
    pub cost_range_details: bool,
    /// Source (backend system) information.
    pub source_info: bool,
    /// Add the customer record to transaction responses.
    pub add_customer: bool,
    /// Custom tracking id, sent as `custom_tracking_id`.
    pub tracking_id: Option<String>,
    /// Arbitrary extra parameters. Applied last, so they override any key
    /// computed from the fields above.
    pub misc: BTreeMap<String, String>,
}

impl UniversalParams {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary extra parameter.
    #[must_use]
    pub fn with_misc(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.misc.insert(key.into(), value.into());
        self
    }

    /// Sets the custom tracking id.
    #[must_use]
    pub fn with_tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }
}

impl ParameterProvider for UniversalParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = ParameterSet::new();

        if self.availability {
            params.set_flag("req_avail_details");
        }
        if self.availability_with_performances {
            params.set_flag("req_avail_details");
            params.set_flag("req_avail_details_with_perfs");
        }
        if self.extra_info {
            params.set_flag("req_extra_info");
        }
        if self.reviews {
            params.set_flag("req_reviews");
        }
        if self.media {
            for key in MEDIA_KEYS {
                params.set_flag(key);
            }
        }
        if self.cost_range {
            params.set_flag("req_cost_range");
        }

        let offers = [
            (self.best_value_offer, "req_best_value_offer"),
            (self.max_saving_offer, "req_max_saving_offer"),
            (self.min_cost_offer, "req_min_cost_offer"),
            (self.top_price_offer, "req_top_price_offer"),
            (self.no_singles_data, "req_no_singles_data"),
        ];
        for (enabled, key) in offers {
            if enabled {
                params.set_flag("req_cost_range");
                params.set_flag(key);
            }
        }

        if self.cost_range_details {
            params.set_flag("req_cost_range_details");
        }
        if self.source_info {
            params.set_flag("req_src_info");
        }
        if self.add_customer {
            params.set_flag("add_customer");
        }
        if let Some(tracking_id) = &self.tracking_id {
            params.set_non_empty("custom_tracking_id", tracking_id);
        }

        for (key, value) in &self.misc {
            params.set(key.clone(), value.clone());
        }

        params
    }
}

/// Paging options for listing calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Results per page; omitted when zero.
    pub page_length: u32,
    /// Zero-based page index; omitted when zero.
    pub page_number: u32,
}

impl PaginationParams {
    /// Creates paging options.
    #[must_use]
    pub const fn new(page_length: u32, page_number: u32) -> Self {
        Self {
            page_length,
            page_number,
        }
    }
}

impl ParameterProvider for PaginationParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        if self.page_length > 0 {
            params.set("page_len", self.page_length.to_string());
        }
        if self.page_number > 0 {
            params.set("page_no", self.page_number.to_string());
        }
        params
    }
}
