//! Message types for the Google Hotel Prices XML feed.
//!
//! This crate models the three message families exchanged with the feed
//! endpoint (Hint notifications, pricing/metadata Queries and Transaction
//! results) as plain serde trees, together with the fixed-format date and
//! time scalars the wire contract mandates. Transport, authentication and
//! retry policy live in the caller; this crate only turns XML documents
//! into typed trees and back.

pub mod codec;
pub mod common;
pub mod datetime;
pub mod error;
pub mod hint;
pub mod query;
pub mod transaction;

// Re-export key types for convenience
pub use codec::{from_xml, to_xml, Message};
pub use common::{Money, Property};
pub use datetime::{Date, DateTime, TimeOfDay};
pub use error::{FeedError, FormatError};
pub use hint::{Hint, HintRequest, Item, Itinerary, Stay, StaysIncludingRange};
pub use query::{HotelInfoProperties, PropertyList, Query};
pub use transaction::{
    AllowablePointsOfSale, Child, Children, OccupancyDetails, PointOfSale, PricingResult, Rate,
    Rates, Refundable, Transaction,
};
