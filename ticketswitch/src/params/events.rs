use chrono::NaiveDate;

use super::{
    ParameterProvider, ParameterSet, PaginationParams, SortOrder, UniversalParams, date_range,
    join_list,
};
use crate::geo::Circle;

/// Options for event searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEventsParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Paging options.
    pub pagination: PaginationParams,
    /// Search keywords, comma-joined on the wire.
    pub keywords: Vec<String>,
    /// First date of the search window.
    pub start_date: Option<NaiveDate>,
    /// Last date of the search window.
    pub end_date: Option<NaiveDate>,
    /// ISO 3166-1 country code.
    pub country_code: Option<String>,
    /// City code.
    pub city_code: Option<String>,
    /// Geographic area; ignored unless valid.
    pub circle: Option<Circle>,
    /// Include events that are no longer on sale.
    pub include_dead: bool,
    /// Result ordering.
    pub sort_order: Option<SortOrder>,
}

impl ParameterProvider for ListEventsParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();
        params.merge(self.pagination.flatten());

        if !self.keywords.is_empty() {
            params.set("keywords", join_list(&self.keywords));
        }
        params.set_non_empty("date_range", &date_range(self.start_date, self.end_date));
        if let Some(country_code) = &self.country_code {
            params.set_non_empty("country_code", country_code);
        }
        if let Some(city_code) = &self.city_code {
            params.set_non_empty("city_code", city_code);
        }
        if let Some(circle) = self.circle.as_ref().filter(|c| c.is_valid()) {
            params.set("circle", circle.param());
        }
        if self.include_dead {
            params.set_flag("include_dead");
        }
        if let Some(sort_order) = self.sort_order {
            params.set("sort_order", sort_order.as_str());
        }

        params
    }
}

/// Options for listing an event's performances or performance times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPerformancesParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Paging options.
    pub pagination: PaginationParams,
    /// Event to list performances for.
    pub event_id: String,
    /// First date of the window.
    pub start_date: Option<NaiveDate>,
    /// Last date of the window.
    pub end_date: Option<NaiveDate>,
}

impl ListPerformancesParams {
    /// Creates options for the given event.
    #[must_use]
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            ..Self::default()
        }
    }
}

impl ParameterProvider for ListPerformancesParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();
        params.merge(self.pagination.flatten());

        params.set_non_empty("event_id", &self.event_id);
        params.set_non_empty("date_range", &date_range(self.start_date, self.end_date));

        params
    }
}
