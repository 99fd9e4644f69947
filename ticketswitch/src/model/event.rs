use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{AvailabilityDetails, CostRange, CostRangeDetails, CurrencyDetails, PagingStatus};

/// Location of a venue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoData {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Related events suggested for cross-selling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpsellList {
    /// Event ids.
    #[serde(rename = "event_id")]
    pub event_ids: Vec<String>,
}

/// A piece of descriptive content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Plain text.
    pub value: String,
    /// HTML markup.
    pub value_html: String,
}

/// A custom data field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Machine name.
    #[serde(rename = "custom_field_name")]
    pub name: String,
    /// Display label.
    #[serde(rename = "custom_field_label")]
    pub label: String,
    /// Value.
    #[serde(rename = "custom_field_data")]
    pub data: String,
}

/// An image or video asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    /// Caption text.
    pub caption: String,
    /// Caption markup.
    pub caption_html: String,
    /// Asset name, e.g. `square`.
    pub name: String,
    /// Location of the asset.
    pub url: String,
    /// Served over HTTPS.
    pub secure: bool,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A critic or user review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Review text.
    pub body: String,
    /// Publication time.
    #[serde(rename = "iso8601_date_and_time")]
    pub datetime: Option<DateTime<FixedOffset>>,
    /// Rating out of five.
    pub star_rating: u32,
    /// Language code.
    pub language: String,
    /// Headline.
    pub title: String,
    /// Written by a user rather than a critic.
    pub is_user: bool,
    /// Author name.
    pub author: String,
    /// Original location.
    pub url: String,
}

/// A bookable product: a show, attraction or similar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Event id.
    #[serde(rename = "event_id")]
    pub id: String,
    /// `live` or `dead`.
    #[serde(rename = "event_status")]
    pub status: String,
    /// Event name.
    #[serde(rename = "event_desc")]
    pub description: String,
    /// Source (backend system) description.
    #[serde(rename = "source_desc")]
    pub source: String,
    /// Source code.
    pub source_code: String,
    /// Event type, e.g. `simple_ticket`.
    pub event_type: String,
    /// Venue name.
    #[serde(rename = "venue_desc")]
    pub venue: String,
    /// Classification, keyed by class id.
    pub classes: HashMap<String, String>,
    /// Custom filters.
    #[serde(rename = "custom_filter")]
    pub filters: Vec<String>,
    /// Venue postcode.
    pub postcode: String,
    /// Venue location.
    pub geo_data: GeoData,
    /// City name.
    #[serde(rename = "city_desc")]
    pub city: String,
    /// City code.
    pub city_code: String,
    /// Country name.
    #[serde(rename = "country_desc")]
    pub country: String,
    /// ISO 3166-1 country code.
    pub country_code: String,
    /// Longest running time in minutes.
    pub max_running_time: i32,
    /// Shortest running time in minutes.
    pub min_running_time: i32,
    /// Performance times are meaningful.
    #[serde(rename = "show_perf_time")]
    pub show_performance_time: bool,
    /// The event has no performances.
    #[serde(rename = "has_no_perfs")]
    pub has_no_performances: bool,
    /// Seats are allocated.
    pub is_seated: bool,
    /// A departure date is needed to reserve.
    pub needs_departure_date: bool,
    /// A duration is needed to reserve.
    pub needs_duration: bool,
    /// A performance is needed to reserve.
    pub needs_performance: bool,
    /// Suggested related events.
    #[serde(rename = "event_upsell_list")]
    pub upsell_list: UpsellList,
    /// Price range.
    pub cost_range: CostRange,
    /// Price range excluding single seats.
    pub no_singles_cost_range: CostRange,
    /// Price range per ticket type and price band.
    pub cost_range_details: CostRangeDetails,
    /// Descriptive content, keyed by content name.
    pub content: HashMap<String, Content>,
    /// Custom fields, keyed by field name.
    pub fields: HashMap<String, Field>,
    /// Extra info.
    pub event_info: String,
    /// Extra info markup.
    pub event_info_html: String,
    /// Venue address.
    pub venue_addr: String,
    /// Venue address markup.
    pub venue_addr_html: String,
    /// Venue info.
    pub venue_info: String,
    /// Venue info markup.
    pub venue_info_html: String,
    /// Media assets, keyed by asset name.
    pub media: HashMap<String, Media>,
    /// Reviews.
    pub reviews: Vec<Review>,
    /// Average critic rating as a percentage.
    pub critic_review_percent: f64,
    /// Availability summary.
    pub availability_details: AvailabilityDetails,
    /// Events bundled into this one.
    pub component_events: Vec<Self>,
    /// Seat counts that can be bought.
    pub valid_quantities: Vec<u32>,
    /// Sold only alongside another event.
    #[serde(rename = "is_add_on")]
    pub is_addon: bool,
    /// Area code.
    pub area_code: String,
    /// Backend event code.
    #[serde(rename = "event_code")]
    pub code: String,
    /// Backend venue code.
    pub venue_code: String,
}

/// One page of an event search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListEventsResults {
    /// Currencies referenced by the events, from the top-level envelope.
    #[serde(rename = "currency_details")]
    pub currencies: CurrencyDetails,
    /// Default currency of the account.
    pub default_currency_code: String,
    /// Currency prices were converted to.
    pub desired_currency_code: String,
    /// Paging state.
    pub paging_status: PagingStatus,
    /// Events on this page.
    #[serde(rename = "event")]
    pub events: Vec<Event>,
}
