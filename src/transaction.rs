//! Transaction messages: pricing and availability updates.
//!
//! A `<Transaction>` carries any number of `<Result>` elements, each
//! pricing one room/itinerary combination. Pricing values set in a nested
//! `<Rate>` override the base values of the enclosing `<Result>`; that
//! inheritance is business semantics and not enforced here.

use serde::{Deserialize, Serialize};

use crate::codec::Message;
use crate::common::{Money, Property};
use crate::datetime::{Date, DateTime, TimeOfDay};

/// Container for pricing and availability updates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename = "Transaction")]
pub struct Transaction {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime,
    #[serde(rename = "@partner", skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    #[serde(rename = "Result", default)]
    pub results: Vec<PricingResult>,
}

impl Message for Transaction {
    const ROOT: &'static str = "Transaction";
}

/// Pricing for one room/itinerary combination, the `<Result>` element.
///
/// On the wire the base rate fields (`<Baserate>`, `<Tax>` and so on) are
/// direct children of `<Result>`, siblings of `<Property>` and `<Checkin>`,
/// never wrapped in a `<Rate>` element. They are therefore declared inline
/// here; [`PricingResult::rate`] and [`PricingResult::set_rate`] convert
/// between the inline fields and a standalone [`Rate`].
///
/// `rates` is used only when there are multiple rates for the same
/// room/itinerary combination, e.g. conditional or qualified rates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PricingResult {
    #[serde(rename = "@rate_rule_id", skip_serializing_if = "Option::is_none")]
    pub rate_rule_id: Option<String>,
    pub property: Property,
    pub checkin: Date,
    #[serde(rename = "RoomID", skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baserate: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_fees: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refundable: Option<Refundable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowable_points_of_sale: Option<AllowablePointsOfSale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_details: Option<OccupancyDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<Rates>,
}

impl PricingResult {
    /// A result pricing the given property and check-in date, with every
    /// optional field unset.
    pub fn new(property: Property, checkin: Date) -> Self {
        PricingResult {
            rate_rule_id: None,
            property,
            checkin,
            room_id: None,
            nights: None,
            baserate: None,
            tax: None,
            other_fees: None,
            expiration_time: None,
            refundable: None,
            charge_currency: None,
            allowable_points_of_sale: None,
            occupancy: None,
            occupancy_details: None,
            custom1: None,
            custom2: None,
            custom3: None,
            custom4: None,
            custom5: None,
            rates: None,
        }
    }

    /// The base pricing of this result as a standalone [`Rate`].
    pub fn rate(&self) -> Rate {
        Rate {
            rate_rule_id: self.rate_rule_id.clone(),
            baserate: self.baserate.clone(),
            tax: self.tax.clone(),
            other_fees: self.other_fees.clone(),
            expiration_time: self.expiration_time,
            refundable: self.refundable.clone(),
            charge_currency: self.charge_currency.clone(),
            allowable_points_of_sale: self.allowable_points_of_sale.clone(),
            occupancy: self.occupancy,
            occupancy_details: self.occupancy_details.clone(),
            custom1: self.custom1.clone(),
            custom2: self.custom2.clone(),
            custom3: self.custom3.clone(),
            custom4: self.custom4.clone(),
            custom5: self.custom5.clone(),
        }
    }

    /// Replaces the base pricing of this result with `rate`.
    pub fn set_rate(&mut self, rate: Rate) {
        self.rate_rule_id = rate.rate_rule_id;
        self.baserate = rate.baserate;
        self.tax = rate.tax;
        self.other_fees = rate.other_fees;
        self.expiration_time = rate.expiration_time;
        self.refundable = rate.refundable;
        self.charge_currency = rate.charge_currency;
        self.allowable_points_of_sale = rate.allowable_points_of_sale;
        self.occupancy = rate.occupancy;
        self.occupancy_details = rate.occupancy_details;
        self.custom1 = rate.custom1;
        self.custom2 = rate.custom2;
        self.custom3 = rate.custom3;
        self.custom4 = rate.custom4;
        self.custom5 = rate.custom5;
    }
}

/// All rate information for one price of a room/itinerary combination.
///
/// Every field is optional; unset fields inherit their value from the
/// parent `<Result>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rate {
    #[serde(rename = "@rate_rule_id", skip_serializing_if = "Option::is_none")]
    pub rate_rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baserate: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_fees: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refundable: Option<Refundable>,
    /// One of `deposit`, `hotel`, `installment` or `web`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowable_points_of_sale: Option<AllowablePointsOfSale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_details: Option<OccupancyDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom5: Option<String>,
}

/// One or more `<Rate>` blocks, each defining a different price for the
/// same room/itinerary combination.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Rates {
    #[serde(rename = "Rate", default)]
    pub rates: Vec<Rate>,
}

/// The number and type of guests (adults or children) a rate applies to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OccupancyDetails {
    /// Number of adults, between 1 and 20.
    pub num_adults: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
}

/// The maximum age of each child guest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Children {
    #[serde(rename = "Child", default)]
    pub children: Vec<Child>,
}

/// One child guest, typically age 0-17.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Child {
    #[serde(rename = "@age")]
    pub age: u8,
}

/// Landing pages eligible to book the rate. When absent, all landing
/// pages in the points of sale file are eligible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AllowablePointsOfSale {
    #[serde(rename = "PointOfSale", default)]
    pub points_of_sale: Vec<PointOfSale>,
}

/// One landing page, matched against the `id` attribute in the points of
/// sale file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PointOfSale {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Refund terms of a rate. A rate with no `<Refundable>` element does not
/// display as refundable at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Refundable {
    /// Whether the rate allows a full refund.
    #[serde(rename = "@available")]
    pub available: bool,
    /// Days in advance of check-in until which a full refund can be
    /// requested, between 0 and 330.
    #[serde(rename = "@refundable_until_days")]
    pub refundable_until_days: i32,
    /// Latest time of day, local to the hotel, that a refund request is
    /// honored. Defaults to midnight when unset.
    #[serde(
        rename = "@refundable_until_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub refundable_until_time: Option<TimeOfDay>,
}
