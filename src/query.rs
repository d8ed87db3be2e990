//! Query-string encoding for typed list options.
//!
//! Every options struct serialises itself through [`QueryBuilder`]: zero
//! values are omitted, values are form-encoded, nested amounts use bracketed
//! sub-keys (`amount[currency]=EUR`) and multi-value fields join with a
//! comma or a literal `+` per the upstream contract. Keys are emitted in
//! alphabetical order so encodings are deterministic.

use crate::types::{Amount, ShortDate};
use std::fmt::Display;
use url::form_urlencoded::byte_serialize;

/// Separator for multi-value query fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Values joined with `,`
    Comma,
    /// Values joined with a literal `+`
    Plus,
}

impl Separator {
    fn as_str(self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Plus => "+",
        }
    }
}

/// Accumulates `key=value` pairs and renders them as a stable query string.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar pair; empty values are omitted.
    pub fn push(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.push_encoded(key, encode_value(value));
        }
    }

    fn push_encoded(&mut self, key: &str, encoded: String) {
        self.pairs.push((key.to_string(), encoded));
    }

    /// Adds an optional displayable value (`bool`, integers, enums…).
    pub fn push_opt<T: Display>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.push(key, &value.to_string());
        }
    }

    /// Adds an optional short date as `YYYY-MM-DD`.
    pub fn push_date(&mut self, key: &str, value: Option<&ShortDate>) {
        if let Some(date) = value {
            self.push(key, &date.to_string());
        }
    }

    /// Adds a multi-value field joined with the given separator; empty
    /// slices are omitted. Items are encoded individually so the separator
    /// itself stays literal while a `+` or `,` inside an item does not.
    pub fn push_list<S: AsRef<str>>(&mut self, key: &str, values: &[S], separator: Separator) {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .filter(|v| !v.is_empty())
            .map(encode_value)
            .collect::<Vec<_>>()
            .join(separator.as_str());
        if !joined.is_empty() {
            self.push_encoded(key, joined);
        }
    }

    /// Adds a nested amount using bracketed sub-keys.
    pub fn push_amount(&mut self, key: &str, value: Option<&Amount>) {
        if let Some(amount) = value {
            self.push(&format!("{}[currency]", key), &amount.currency);
            self.push(&format!("{}[value]", key), &amount.value);
        }
    }

    /// Renders the accumulated pairs, alphabetically by key, without a
    /// leading `?`. Returns `None` when nothing was pushed.
    pub fn finish(mut self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        self.pairs.sort_by(|a, b| a.0.cmp(&b.0));
        let encoded = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_key(k), v))
            .collect::<Vec<_>>()
            .join("&");
        Some(encoded)
    }
}

fn encode_key(raw: &str) -> String {
    // Brackets in sub-keys stay literal; Mollie expects `amount[value]=…`.
    byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace("%5B", "[")
        .replace("%5D", "]")
}

fn encode_value<S: AsRef<str>>(raw: S) -> String {
    byte_serialize(raw.as_ref().as_bytes()).collect::<String>()
}
