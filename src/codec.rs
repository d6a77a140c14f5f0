//! Decoding and encoding of whole feed messages.
//!
//! [`from_xml`] verifies the root element name before handing the document
//! to the serde deserializer, so a `<Hint>` body posted to a transaction
//! endpoint is rejected up front instead of decoding into an empty tree.
//! Failures are never recovered locally: any malformed structure or scalar
//! aborts the whole message.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FeedError;

/// A top-level feed message with a fixed root element name.
pub trait Message {
    /// The required root element, e.g. `Transaction`.
    const ROOT: &'static str;
}

/// Decodes one feed message from an XML document.
pub fn from_xml<T: Message + DeserializeOwned>(xml: &str) -> Result<T, FeedError> {
    let root = root_element(xml)?;
    if root != T::ROOT {
        return Err(FeedError::UnexpectedRoot {
            found: root,
            expected: T::ROOT,
        });
    }
    tracing::trace!(root = T::ROOT, bytes = xml.len(), "decoding feed message");
    Ok(quick_xml::de::from_str(xml)?)
}

/// Encodes one feed message to an XML document.
pub fn to_xml<T: Message + Serialize>(message: &T) -> Result<String, FeedError> {
    tracing::trace!(root = T::ROOT, "encoding feed message");
    Ok(quick_xml::se::to_string(message)?)
}

/// Name of the first element in the document, skipping the XML declaration,
/// comments and other preamble.
fn root_element(xml: &str) -> Result<String, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::Eof => return Err(FeedError::MissingRoot),
            _ => (),
        }
    }
}
