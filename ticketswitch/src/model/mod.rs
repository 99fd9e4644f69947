//! Domain entities decoded from API responses.
//!
//! Every record decodes from a minimal JSON object: missing keys fall back
//! to their defaults and unknown keys are ignored. Money is
//! [`rust_decimal::Decimal`] and timestamps are
//! [`chrono::DateTime<FixedOffset>`](chrono::DateTime).
//!
//! The API nests many lists one level deep (`{"discounts": {"discount":
//! [..]}}`). Those wrappers are kept as small list types so the records
//! round-trip, and the parent types expose slice accessors.

mod availability;
mod cost_range;
mod currency;
mod customer;
mod event;
mod months;
mod paging;
mod performance;
mod send_method;
mod source;
mod transaction;
mod trolley;
mod user;

pub use availability::{
    Availability, AvailabilityDetails, AvailabilityResult, Discount, DiscountList,
    DiscountsResult, GrossCommission, PriceBand, TicketType, UserCommission,
};
pub use cost_range::{CostRange, CostRangeDetails, Offer};
pub use currency::{Currency, CurrencyDetails};
pub use customer::Customer;
pub use event::{Content, Event, Field, GeoData, ListEventsResults, Media, Review, UpsellList};
pub use months::{Month, MonthsResult};
pub use paging::PagingStatus;
pub use performance::{
    ListPerformanceTimesResults, ListPerformancesResults, Performance, PerformanceTime,
};
pub use send_method::{Country, CountryList, SendMethod, SendMethodList, SendMethodsResults};
pub use source::{Source, SourcesResult};
pub use transaction::{
    Callout, CancellationResult, Debitor, MakePurchaseResult, ReservationResult, StatusResult,
};
pub use trolley::{
    AgentCost, Bundle, CANCELLED, Order, PurchaseResult, Seat, TicketOrder, TicketOrderList,
    Trolley,
};
pub use user::User;
