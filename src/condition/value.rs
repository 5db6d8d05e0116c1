use {
    chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc},
    ipnet::{IpNet, Ipv4Net, Ipv6Net},
    std::net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

/// A single value that can appear on the right-hand side of a condition clause.
///
/// Strings pass through unchanged. Dates and times are rendered in UTC as RFC 3339 with second precision
/// (`2020-01-01T00:00:00Z`); a bare [NaiveDate] means midnight UTC.
///
/// Fractional seconds are truncated. IAM date operators accept both `2020-01-01T00:00:00Z` and
/// `2020-01-01T00:00:00.000Z`; pass a string to keep milliseconds.
pub trait ConditionValue {
    fn to_condition_value(&self) -> String;
}

/// Anything that can be passed as the value(s) of a condition: a scalar [ConditionValue] or a collection of them.
pub trait IntoConditionValues {
    fn into_condition_values(self) -> Vec<String>;
}

impl ConditionValue for str {
    fn to_condition_value(&self) -> String {
        self.to_string()
    }
}

impl<T: ConditionValue + ?Sized> ConditionValue for &T {
    fn to_condition_value(&self) -> String {
        (**self).to_condition_value()
    }
}

macro_rules! display_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl ConditionValue for $t {
                fn to_condition_value(&self) -> String {
                    self.to_string()
                }
            }

            impl IntoConditionValues for $t {
                fn into_condition_values(self) -> Vec<String> {
                    vec![self.to_condition_value()]
                }
            }
        )*
    };
}

display_value!(
    String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, IpAddr, Ipv4Addr,
    Ipv6Addr, IpNet, Ipv4Net, Ipv6Net,
);

impl<Tz: TimeZone> ConditionValue for DateTime<Tz> {
    fn to_condition_value(&self) -> String {
        self.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl<Tz: TimeZone> IntoConditionValues for DateTime<Tz> {
    fn into_condition_values(self) -> Vec<String> {
        vec![self.to_condition_value()]
    }
}

impl ConditionValue for NaiveDateTime {
    fn to_condition_value(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl ConditionValue for NaiveDate {
    fn to_condition_value(&self) -> String {
        self.format("%Y-%m-%dT00:00:00Z").to_string()
    }
}

impl IntoConditionValues for NaiveDateTime {
    fn into_condition_values(self) -> Vec<String> {
        vec![self.to_condition_value()]
    }
}

impl IntoConditionValues for NaiveDate {
    fn into_condition_values(self) -> Vec<String> {
        vec![self.to_condition_value()]
    }
}

impl IntoConditionValues for &str {
    fn into_condition_values(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoConditionValues for &String {
    fn into_condition_values(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: ConditionValue> IntoConditionValues for Vec<T> {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

impl<T: ConditionValue> IntoConditionValues for &Vec<T> {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

impl<T: ConditionValue> IntoConditionValues for &[T] {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

impl<T: ConditionValue, const N: usize> IntoConditionValues for [T; N] {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}
