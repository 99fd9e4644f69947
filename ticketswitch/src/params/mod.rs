//! Call parameters.
//!
//! Every operation's options are expressed as a parameter provider: a typed
//! struct implementing [`ParameterProvider`], which flattens it into a
//! [`ParameterSet`] of wire keys.
//!
//! # Composition
//!
//! Call-specific providers hold their shared options as named fields
//! (`universal`, `pagination`) and merge them in a fixed order:
//!
//! 1. [`UniversalParams`]
//! 2. [`PaginationParams`]
//! 3. the call's own fields
//!
//! Later contributions overwrite earlier ones, so a call's own fields win on
//! key collision. Within [`UniversalParams`] the `misc` map is applied last
//! and can override any key it computes itself.
//!
//! # Conventions
//!
//! - boolean flags are sent as the literal `"1"`, and only when set
//! - absent or zero values contribute no key at all
//! - plain lists are comma-joined into a single value
//! - positional lists become numbered keys (`seat0`, `seat1`, ...)

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

mod events;
mod inventory;
mod transaction;
mod universal;

pub use events::{ListEventsParams, ListPerformancesParams};
pub use inventory::{GetAvailabilityParams, GetMonthsParams};
pub use transaction::{
    CancellationParams, EmailCheckParams, MakePurchaseParams, MakeReservationParams,
    TransactionParams,
};
pub use universal::{PaginationParams, UniversalParams};

/// Wire format for dates inside parameters.
pub(crate) const DATE_FORMAT: &str = "%Y%m%d";

/// A multimap of wire parameter names to their values.
///
/// Keys iterate in sorted order so encoded query strings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<String, Vec<String>>);

impl ParameterSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets `key` to a single value, replacing anything already there.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// Adds a repeated value for `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Sets a boolean flag (`"1"`).
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.set(key, "1");
    }

    /// Sets `key` only when `value` is non-empty.
    pub fn set_non_empty(&mut self, key: impl Into<String>, value: &str) {
        if !value.is_empty() {
            self.set(key, value);
        }
    }

    /// Overlays `other` key by key. Keys present in `other` replace ours.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Removes `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    /// The first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value stored under `key`.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(key, value)` pairs in key order, repeating keys with
    /// several values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.append(key, value);
        }
        set
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ParameterSet {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Single values serialize as strings, repeated ones as arrays of strings.
impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, values) in &self.0 {
            match values.as_slice() {
                [single] => map.serialize_entry(key, single)?,
                many => map.serialize_entry(key, many)?,
            }
        }
        map.end()
    }
}

/// Anything that contributes wire parameters to a call.
pub trait ParameterProvider {
    /// Flattens the provider into wire parameters.
    fn flatten(&self) -> ParameterSet;
}

impl ParameterProvider for ParameterSet {
    fn flatten(&self) -> ParameterSet {
        self.clone()
    }
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for &P {
    fn flatten(&self) -> ParameterSet {
        (**self).flatten()
    }
}

/// Payment details attached to a purchase.
///
/// Implement this for card, redirect or any other payment scheme the
/// backend understands. The contributed keys are merged into the purchase
/// parameters verbatim.
pub trait PaymentMethod: fmt::Debug + Send + Sync {
    /// Wire parameters describing the payment.
    fn payment_params(&self) -> ParameterSet;
}

impl PaymentMethod for ParameterSet {
    fn payment_params(&self) -> ParameterSet {
        self.clone()
    }
}

impl<S: BuildHasher + Send + Sync> PaymentMethod for HashMap<String, String, S> {
    fn payment_params(&self) -> ParameterSet {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl PaymentMethod for BTreeMap<String, String> {
    fn payment_params(&self) -> ParameterSet {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Result ordering for event searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Sales across all partners over the last 48 hours.
    MostPopular,
    /// Alphabetically by event description.
    Alphabetic,
    /// Minimum total price, lowest first.
    CostAscending,
    /// Maximum total price, highest first.
    CostDescending,
    /// Average critic rating, highest first.
    CriticRating,
    /// Date added to the system, newest first.
    Recent,
    /// Most recently sold first.
    LastSale,
}

impl SortOrder {
    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MostPopular => "most_popular",
            Self::Alphabetic => "alphabetic",
            Self::CostAscending => "cost_ascending",
            Self::CostDescending => "cost_descending",
            Self::CriticRating => "critic_rating",
            Self::Recent => "recent",
            Self::LastSale => "last_sale",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders an inclusive date range as `YYYYMMDD:YYYYMMDD`.
///
/// Either bound may be open. Returns an empty string when both are.
#[must_use]
pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    if start.is_none() && end.is_none() {
        return String::new();
    }
    let fmt = |date: Option<NaiveDate>| {
        date.map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    };
    format!("{}:{}", fmt(start), fmt(end))
}

/// Joins list items with commas.
pub(crate) fn join_list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_date_range() {
        assert_eq!(date_range(None, None), "");
        assert_eq!(date_range(date(2016, 7, 23), None), "20160723:");
        assert_eq!(date_range(None, date(2016, 7, 23)), ":20160723");
        assert_eq!(
            date_range(date(2016, 7, 21), date(2016, 7, 23)),
            "20160721:20160723"
        );
    }

    #[test]
    fn test_set_overwrites_and_append_repeats() {
        let mut set = ParameterSet::new();
        set.set("foo", "bar");
        set.set("foo", "baz");
        assert_eq!(set.get_all("foo"), ["baz"]);

        set.append("foo", "qux");
        assert_eq!(set.get_all("foo"), ["baz", "qux"]);
        assert_eq!(set.get("foo"), Some("baz"));
        assert!(set.get("missing").is_none());
        assert!(set.get_all("missing").is_empty());
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut base = ParameterSet::from([("a", "1"), ("b", "2")]);
        base.merge(ParameterSet::from([("b", "3"), ("c", "4")]));
        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("3"));
        assert_eq!(base.get("c"), Some("4"));
    }

    #[test]
    fn test_iter_is_sorted() {
        let set = ParameterSet::from([("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_serialize_single_and_repeated() {
        let mut set = ParameterSet::from([("foo", "bar")]);
        set.append("seat", "A1");
        set.append("seat", "A2");
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"foo": "bar", "seat": ["A1", "A2"]})
        );
    }

    #[test]
    fn test_payment_method_from_map() {
        let mut card = HashMap::new();
        card.insert("card_number".to_owned(), "4111111111111111".to_owned());
        card.insert("expiry_date".to_owned(), "0125".to_owned());
        let params = card.payment_params();
        assert_eq!(params.get("card_number"), Some("4111111111111111"));
        assert_eq!(params.get("expiry_date"), Some("0125"));
    }

    #[test]
    fn test_sort_order_wire_values() {
        assert_eq!(SortOrder::MostPopular.as_str(), "most_popular");
        assert_eq!(SortOrder::CostDescending.to_string(), "cost_descending");
        assert_eq!(SortOrder::LastSale.as_str(), "last_sale");
    }

    #[test]
    fn test_zero_valued_providers_flatten_empty() {
        let providers: [(&str, &dyn ParameterProvider); 11] = [
            ("UniversalParams", &UniversalParams::default()),
            ("PaginationParams", &PaginationParams::default()),
            ("ListEventsParams", &ListEventsParams::default()),
            ("ListPerformancesParams", &ListPerformancesParams::default()),
            ("GetAvailabilityParams", &GetAvailabilityParams::default()),
            ("GetMonthsParams", &GetMonthsParams::default()),
            ("MakeReservationParams", &MakeReservationParams::default()),
            ("TransactionParams", &TransactionParams::default()),
            ("CancellationParams", &CancellationParams::default()),
            ("EmailCheckParams", &EmailCheckParams::default()),
            ("ParameterSet", &ParameterSet::default()),
        ];
        for (name, provider) in providers {
            let params = provider.flatten();
            assert!(params.is_empty(), "{name}: {:?}", params.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_zero_valued_customer_sends_consent_only() {
        let params = Customer::default().flatten();
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            [
                ("supplier_can_use_customer_data", "0"),
                ("user_can_use_customer_data", "0"),
                ("world_can_use_customer_data", "0"),
            ]
        );
    }
}
