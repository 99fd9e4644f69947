use serde::{Deserialize, Serialize};

/// A month in which an event has performances.
///
/// Bit `n` of `dates_bitmask` is set when day `n + 1` has a performance.
/// Bits 0 to 6 of `weekdays_bitmask` cover Monday to Sunday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Month {
    /// Short name, e.g. `feb`.
    pub month: String,
    /// Full name, e.g. `February`.
    #[serde(rename = "month_desc")]
    pub description: String,
    /// Days of the month with performances.
    #[serde(rename = "month_dates_bitmask")]
    pub dates_bitmask: u64,
    /// Weekdays with performances.
    #[serde(rename = "month_weekdays_bitmask")]
    pub weekdays_bitmask: u64,
    /// Year.
    pub year: i32,
}

impl Month {
    /// Returns `true` if the given day (1-based) has a performance.
    #[must_use]
    pub const fn has_performance_on(&self, day: u32) -> bool {
        day >= 1 && day <= 31 && self.dates_bitmask & (1 << (day - 1)) != 0
    }
}

/// Months in which an event has performances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthsResult {
    /// Months.
    #[serde(rename = "month")]
    pub months: Vec<Month>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_months() {
        let result: MonthsResult = serde_json::from_str(
            r#"{"month": [{
                "month": "feb",
                "month_desc": "February",
                "month_dates_bitmask": 5,
                "month_weekdays_bitmask": 63,
                "year": 2017
            }]}"#,
        )
        .unwrap();
        let month = &result.months[0];
        assert_eq!(month.description, "February");
        assert_eq!(month.year, 2017);
        assert!(month.has_performance_on(1));
        assert!(!month.has_performance_on(2));
        assert!(month.has_performance_on(3));
        assert!(!month.has_performance_on(0));
        assert!(!month.has_performance_on(32));
    }
}
