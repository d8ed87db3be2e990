//! Common value types shared across Mollie resources.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A monetary amount: ISO 4217 currency plus a string decimal value with the
/// exact number of decimals the currency prescribes (`"10.00"` for EUR).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amount {
    /// ISO 4217 currency code
    pub currency: String,
    /// String decimal, e.g. `"10.00"`
    pub value: String,
}

impl Amount {
    /// Creates an amount.
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }
}

/// A postal address as Mollie models it on orders and customers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_and_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_additional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Whether a resource was created in the live or the test environment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Live environment
    Live,
    /// Sandbox environment
    Test,
}

/// Recurring behaviour of a payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    /// One-off payment
    Oneoff,
    /// First payment of a recurring sequence, establishes the mandate
    First,
    /// Follow-up payment charged against an existing mandate
    Recurring,
}

/// A day-granularity date, wire format `YYYY-MM-DD`.
///
/// Deliberately distinct from the RFC 3339 timestamps Mollie uses elsewhere;
/// decoding anything but the exact ten-character form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortDate(pub NaiveDate);

/// Wire format for [`ShortDate`].
const SHORT_DATE_FORMAT: &str = "%Y-%m-%d";

impl ShortDate {
    /// Creates a short date from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(ShortDate)
    }
}

impl From<NaiveDate> for ShortDate {
    fn from(date: NaiveDate) -> Self {
        ShortDate(date)
    }
}

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SHORT_DATE_FORMAT))
    }
}

impl FromStr for ShortDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, SHORT_DATE_FORMAT).map(ShortDate)
    }
}

impl Serialize for ShortDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ShortDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e| {
            serde::de::Error::custom(format!("invalid short date {:?}: {}", raw, e))
        })
    }
}
