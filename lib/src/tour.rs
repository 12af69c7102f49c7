//! Data structures representing tour records returned by the tours API

use serde::Deserialize;
use std::fmt::Display;

use crate::error::Result;

// The tours API is not consistent about scalar types: ids and prices show up
// as strings on the live endpoint and as plain numbers in fixtures.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Opaque identifier of a tour, stable within a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "TextOrNumber")]
pub struct TourId(String);

impl TourId {
    /// Returns a new TourId wrapping the given value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string form of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<TextOrNumber> for TourId {
    fn from(value: TextOrNumber) -> Self {
        Self(value.into())
    }
}

impl Display for TourId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display value of a tour's price, without currency symbol
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "TextOrNumber")]
pub struct Price(String);

impl Price {
    /// Returns a new Price from its display text
    pub fn new(price: impl Into<String>) -> Self {
        Self(price.into())
    }
}

impl From<TextOrNumber> for Price {
    fn from(value: TextOrNumber) -> Self {
        Self(value.into())
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data structure representing a single tour listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tour {
    /// Unique id of the tour
    pub id: TourId,
    /// Display title
    pub name: String,
    /// URL of the tour's image
    pub image: String,
    /// Free text description, may be long
    pub info: String,
    /// Price display value
    pub price: Price,
}

/// Decodes a JSON array of tours, preserving response order
pub fn decode_tours(body: &str) -> Result<Vec<Tour>> {
    let tours = serde_json::from_str::<Vec<Tour>>(body)?;
    Ok(tours)
}

#[cfg(test)]
#[path = "./tour_tests.rs"]
mod tests;
