//! Hint messages: pull-with-hints change notifications.
//!
//! A `HintRequest` carries the time the partner last received a successful
//! fetch; the matching `Hint` response names the hotels and itineraries
//! whose prices changed since then.

use serde::{Deserialize, Serialize};

use crate::codec::Message;
use crate::common::Property;
use crate::datetime::{Date, DateTime};

/// A Hint Request message containing the time of the last successful
/// update received from the partner's server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename = "HintRequest", rename_all = "PascalCase")]
pub struct HintRequest {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime,
    pub last_fetch_time: DateTime,
}

impl Message for HintRequest {
    const ROOT: &'static str = "HintRequest";
}

/// A Hint Response message specifying the hotels whose prices have changed
/// since the last successful Hint Response from the same server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename = "Hint")]
pub struct Hint {
    #[serde(rename = "Item", default)]
    pub items: Vec<Item>,
}

impl Message for Hint {
    const ROOT: &'static str = "Hint";
}

/// A container for one hotel/itinerary to be updated.
///
/// The schema does not enforce that only one itinerary shape is populated;
/// [`Item::itinerary`] classifies whichever subset of fields is present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "Property", default)]
    pub properties: Vec<Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay: Option<Stay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stays_including_range: Option<StaysIncludingRange>,
}

/// The check-in date and length of stay of an exact itinerary hint.
/// Each `<Item>` can contain only a single `<Stay>`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stay {
    pub check_in_date: Date,
    pub length_of_stay: i8,
}

/// The first/last date window of a ranged stay hint. A missing
/// `<LastDate>` means only single-night stays are affected.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StaysIncludingRange {
    pub first_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<Date>,
}

/// The itinerary shape of an [`Item`], inferred from which optional fields
/// are populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Itinerary<'a> {
    /// No stay information; all itineraries of the property need a refresh.
    Unset,
    /// A single check-in date and length of stay.
    ExactStay(&'a Stay),
    /// Every itinerary whose check-in date falls in the window.
    CheckinRange {
        first_date: Date,
        last_date: Option<Date>,
    },
    /// Every itinerary overlapping the window.
    RangedStay(&'a StaysIncludingRange),
}

impl Item {
    /// Classifies the itinerary shape of this item. When more than one
    /// shape is populated the most specific container wins: `Stay`, then
    /// `StaysIncludingRange`, then the bare first/last date pair.
    pub fn itinerary(&self) -> Itinerary<'_> {
        if let Some(stay) = &self.stay {
            Itinerary::ExactStay(stay)
        } else if let Some(range) = &self.stays_including_range {
            Itinerary::RangedStay(range)
        } else if let Some(first_date) = self.first_date {
            Itinerary::CheckinRange {
                first_date,
                last_date: self.last_date,
            }
        } else {
            Itinerary::Unset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_xml, to_xml};

    const HINT_REQUEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<HintRequest id="request" timestamp="2019-06-03T22:59:48Z">
  <LastFetchTime>2019-06-03T22:54:40Z</LastFetchTime>
</HintRequest>"#;

    const HINT_EXACT_ITINERARY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Hint>
  <Item>
    <Property>12345</Property>
    <Stay>
      <CheckInDate>2018-07-03</CheckInDate>
      <LengthOfStay>3</LengthOfStay>
    </Stay>
  </Item>
  <Item>
    <Property>12345</Property>
    <Stay>
      <CheckInDate>2018-07-03</CheckInDate>
      <LengthOfStay>4</LengthOfStay>
    </Stay>
  </Item>
</Hint>"#;

    const HINT_CHECKIN_RANGES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Hint>
  <Item>
    <Property>12345</Property>
    <Property>67890</Property>
    <FirstDate>2018-07-03</FirstDate>
    <LastDate>2018-07-06</LastDate>
  </Item>
</Hint>"#;

    const HINT_RANGED_STAY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Hint>
  <Item>
    <Property>12345</Property>
    <StaysIncludingRange>
      <FirstDate>2018-07-03</FirstDate>
      <LastDate>2018-07-06</LastDate>
    </StaysIncludingRange>
  </Item>
  <Item>
    <Property>67890</Property>
    <StaysIncludingRange>
      <FirstDate>2018-07-03</FirstDate>
    </StaysIncludingRange>
  </Item>
</Hint>"#;

    fn date(text: &str) -> Date {
        text.parse().unwrap()
    }

    #[test]
    fn decode_hint_request() {
        let request: HintRequest = from_xml(HINT_REQUEST).unwrap();
        assert_eq!(request.id, "request");
        assert_eq!(request.timestamp.to_string(), "2019-06-03T22:59:48Z");
        assert_eq!(request.last_fetch_time.to_string(), "2019-06-03T22:54:40Z");
    }

    #[test]
    fn encode_hint_request() {
        let request = HintRequest {
            id: "request".to_string(),
            timestamp: "2019-06-03T22:59:48Z".parse().unwrap(),
            last_fetch_time: "2019-06-03T22:54:40Z".parse().unwrap(),
        };
        let xml = to_xml(&request).unwrap();
        assert_eq!(
            xml,
            "<HintRequest id=\"request\" timestamp=\"2019-06-03T22:59:48Z\">\
             <LastFetchTime>2019-06-03T22:54:40Z</LastFetchTime></HintRequest>"
        );
    }

    #[test]
    fn decode_hint_without_items() {
        let hint: Hint = from_xml("<Hint/>").unwrap();
        assert!(hint.items.is_empty());
    }

    #[test]
    fn decode_exact_itinerary_hint() {
        let hint: Hint = from_xml(HINT_EXACT_ITINERARY).unwrap();
        assert_eq!(hint.items.len(), 2);

        for (item, nights) in hint.items.iter().zip([3i8, 4]) {
            assert_eq!(item.properties, vec![Property::new("12345")]);
            assert_eq!(
                item.stay,
                Some(Stay {
                    check_in_date: date("2018-07-03"),
                    length_of_stay: nights,
                })
            );
            assert_eq!(item.first_date, None);
            assert_eq!(item.last_date, None);
            assert_eq!(item.stays_including_range, None);
        }
    }

    #[test]
    fn decode_checkin_ranges_hint() {
        let hint: Hint = from_xml(HINT_CHECKIN_RANGES).unwrap();
        assert_eq!(hint.items.len(), 1);

        let item = &hint.items[0];
        assert_eq!(
            item.properties,
            vec![Property::new("12345"), Property::new("67890")]
        );
        assert_eq!(item.first_date, Some(date("2018-07-03")));
        assert_eq!(item.last_date, Some(date("2018-07-06")));
        assert_eq!(item.stay, None);
        assert_eq!(item.stays_including_range, None);
    }

    #[test]
    fn decode_ranged_stay_hint() {
        let hint: Hint = from_xml(HINT_RANGED_STAY).unwrap();
        assert_eq!(hint.items.len(), 2);

        assert_eq!(
            hint.items[0].stays_including_range,
            Some(StaysIncludingRange {
                first_date: date("2018-07-03"),
                last_date: Some(date("2018-07-06")),
            })
        );
        // A single-night window: LastDate absent, not equal to FirstDate.
        assert_eq!(
            hint.items[1].stays_including_range,
            Some(StaysIncludingRange {
                first_date: date("2018-07-03"),
                last_date: None,
            })
        );
    }

    #[test]
    fn itinerary_classification() {
        let bare = Item {
            properties: vec![Property::new("12345")],
            ..Item::default()
        };
        assert_eq!(bare.itinerary(), Itinerary::Unset);

        let exact: Hint = from_xml(HINT_EXACT_ITINERARY).unwrap();
        assert!(matches!(
            exact.items[0].itinerary(),
            Itinerary::ExactStay(stay) if stay.length_of_stay == 3
        ));

        let range: Hint = from_xml(HINT_CHECKIN_RANGES).unwrap();
        assert_eq!(
            range.items[0].itinerary(),
            Itinerary::CheckinRange {
                first_date: date("2018-07-03"),
                last_date: Some(date("2018-07-06")),
            }
        );

        let ranged: Hint = from_xml(HINT_RANGED_STAY).unwrap();
        assert!(matches!(
            ranged.items[1].itinerary(),
            Itinerary::RangedStay(window) if window.last_date.is_none()
        ));
    }

    #[test]
    fn unset_fields_are_omitted_on_encode() {
        let hint = Hint {
            items: vec![Item {
                properties: vec![Property::new("12345")],
                stay: Some(Stay {
                    check_in_date: date("2018-07-03"),
                    length_of_stay: 3,
                }),
                ..Item::default()
            }],
        };
        let xml = to_xml(&hint).unwrap();
        assert!(xml.contains("<Stay>"));
        assert!(!xml.contains("FirstDate"));
        assert!(!xml.contains("LastDate"));
        assert!(!xml.contains("StaysIncludingRange"));
    }

    #[test]
    fn hint_round_trip() {
        for fixture in [HINT_EXACT_ITINERARY, HINT_CHECKIN_RANGES, HINT_RANGED_STAY] {
            let hint: Hint = from_xml(fixture).unwrap();
            let encoded = to_xml(&hint).unwrap();
            let decoded: Hint = from_xml(&encoded).unwrap();
            assert_eq!(decoded, hint);
        }
    }
}
