//! Query messages: requests for pricing or metadata updates, used with
//! both the Pull and Pull-with-Hints delivery modes.
//!
//! A pricing query names the itinerary and the hotels to reprice and is
//! answered with a `<Transaction>` carrying `<Result>` elements. A metadata
//! query names the hotels whose room data should be refreshed.

use serde::{Deserialize, Serialize};

use crate::codec::Message;
use crate::common::Property;
use crate::datetime::Date;

/// A pricing or metadata Query message. Which of the two list containers
/// is populated determines the query type; the schema does not make them
/// mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename = "Query", rename_all = "PascalCase")]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_list: Option<PropertyList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_info_properties: Option<HotelInfoProperties>,
}

impl Message for Query {
    const ROOT: &'static str = "Query";
}

/// IDs of the hotels that require pricing updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PropertyList {
    #[serde(rename = "Property", default)]
    pub properties: Vec<Property>,
}

/// IDs of the hotels for which updated room and Room Bundle metadata is
/// requested in a metadata query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HotelInfoProperties {
    #[serde(rename = "Property", default)]
    pub properties: Vec<Property>,
}
