use super::{ParameterProvider, ParameterSet, UniversalParams};

/// Options for a performance availability lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAvailabilityParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Only return availability for this many contiguous seats.
    pub number_of_seats: u32,
    /// Include discounts per price band.
    pub discounts: bool,
    /// Include example seats.
    pub example_seats: bool,
    /// Include seat blocks.
    pub seat_blocks: bool,
    /// Include predicted commission.
    pub user_commission: bool,
}

impl ParameterProvider for GetAvailabilityParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();

        if self.number_of_seats > 0 {
            params.set("number_of_seats", self.number_of_seats.to_string());
        }
        if self.discounts {
            params.set_flag("add_discounts");
        }
        if self.example_seats {
            params.set_flag("add_example_seats");
        }
        if self.seat_blocks {
            params.set_flag("add_seat_blocks");
        }
        if self.user_commission {
            params.set_flag("req_predicted_commission");
        }

        params
    }
}

/// Options for the months-with-performances lookup.
///
/// The months endpoint uses its own cost-range key names, which differ from
/// the ones [`UniversalParams`] emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMonthsParams {
    /// Options shared by every call.
    pub universal: UniversalParams,
    /// Event to list months for.
    pub event_id: String,
    /// Cost ranges per month.
    pub cost_range: bool,
    /// Cost range breakdown per month.
    pub cost_range_details: bool,
    /// Best value offer.
    pub best_value_offer: bool,
    /// Maximum saving offer.
    pub max_saving_offer: bool,
    /// Minimum cost offer.
    pub min_cost_offer: bool,
    /// Top price offer.
    pub top_price_offer: bool,
    /// Exclude single seats from cost ranges.
    pub no_singles_data: bool,
}

impl GetMonthsParams {
    /// Creates options for the given event.
    #[must_use]
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            ..Self::default()
        }
    }
}

impl ParameterProvider for GetMonthsParams {
    fn flatten(&self) -> ParameterSet {
        let mut params = self.universal.flatten();

        params.set_non_empty("event_id", &self.event_id);

        let flags = [
            (self.cost_range, "req_cost_range"),
            (self.best_value_offer, "req_best_value_offer"),
            (self.cost_range_details, "req_cost_range_details"),
            (self.max_saving_offer, "req_cost_range_max_saving_offer"),
            (self.min_cost_offer, "req_cost_range_min_cost_offer"),
            (self.top_price_offer, "req_cost_range_top_price_offer"),
            (self.no_singles_data, "req_cost_range_no_singles_data"),
        ];
        for (enabled, key) in flags {
            if enabled {
                params.set_flag(key);
            }
        }

        params
    }
}
