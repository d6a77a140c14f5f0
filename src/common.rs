//! Value types shared by all three message families.

use serde::{Deserialize, Serialize};

/// The ID of a hotel, using the same ID as the Hotel List Feed.
///
/// The number of `<Property>` elements allowed in a single `<Item>` block
/// depends on the kind of Hint message: up to 100 for exact itineraries,
/// more than one for check-in ranges and ranged stays when the matching
/// `<MultipleItineraries>` mode is enabled in `<QueryControl>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Property {
    #[serde(rename = "$text", default)]
    pub id: String,
}

impl Property {
    pub fn new(id: impl Into<String>) -> Self {
        Property { id: id.into() }
    }
}

impl From<&str> for Property {
    fn from(id: &str) -> Self {
        Property::new(id)
    }
}

/// An amount of money with its currency type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Money {
    #[serde(rename = "@currency")]
    pub currency: String,
    #[serde(rename = "$text")]
    pub value: f32,
}

impl Money {
    pub fn new(value: f32, currency: impl Into<String>) -> Self {
        Money {
            currency: currency.into(),
            value,
        }
    }
}
