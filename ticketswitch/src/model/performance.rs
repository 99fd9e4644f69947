use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{AvailabilityDetails, CostRange, PagingStatus};

/// A single dated occurrence of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Performance {
    /// Performance id.
    #[serde(rename = "perf_id")]
    pub id: String,
    /// Performance name, when the event names them.
    #[serde(rename = "perf_name")]
    pub name: String,
    /// Parent event id.
    pub event_id: String,
    /// Start time.
    #[serde(rename = "iso8601_date_and_time")]
    pub datetime: Option<DateTime<FixedOffset>>,
    /// Human-readable date.
    pub date_desc: String,
    /// Human-readable time.
    pub time_desc: String,
    /// Running time in minutes.
    pub running_time: i32,
    /// Seats are pooled rather than allocated.
    pub has_pool_seats: bool,
    /// Limited availability.
    pub is_limited: bool,
    /// Placeholder that cannot be booked.
    pub is_ghost: bool,
    /// Cached upper bound of bookable seats.
    pub cached_max_seats: i32,
    /// Price range.
    pub cost_range: CostRange,
    /// Price range excluding single seats.
    pub no_singles_cost_range: CostRange,
    /// Availability summary.
    #[serde(rename = "avail_details")]
    pub availability_details: AvailabilityDetails,
}

/// One page of an event's performances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPerformancesResults {
    /// Performances carry names.
    #[serde(rename = "has_perf_names")]
    pub has_performance_names: bool,
    /// The only performance should be selected automatically. Copied from
    /// the response envelope.
    #[serde(rename = "autoselect_this_performance")]
    pub autoselect: bool,
    /// Paging state.
    pub paging_status: PagingStatus,
    /// Performances on this page.
    #[serde(rename = "performance")]
    pub performances: Vec<Performance>,
}

/// A distinct start time across an event's performances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceTime {
    /// Start time.
    #[serde(rename = "iso8601_date_and_time")]
    pub datetime: Option<DateTime<FixedOffset>>,
    /// Human-readable time.
    pub time_desc: String,
}

/// Distinct start times of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPerformanceTimesResults {
    /// Start times.
    #[serde(rename = "time")]
    pub times: Vec<PerformanceTime>,
}
