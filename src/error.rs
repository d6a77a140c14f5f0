use thiserror::Error;

/// A scalar token did not match its fixed, protocol-mandated text format.
///
/// Carries the offending text and the name of the expected format so that
/// a rejected feed message can be reported back to the partner verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{text}` does not match the {format_name} format `{format}`")]
pub struct FormatError {
    /// The text that failed to parse.
    pub text: String,
    /// Human-readable name of the format ("date", "time", "datetime").
    pub format_name: &'static str,
    /// The expected layout, e.g. `YYYY-MM-DD`.
    pub format: &'static str,
}

// Error types for feed message processing
#[derive(Error, Debug)]
pub enum FeedError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        found: String,
        expected: &'static str,
    },

    #[error("document contains no root element")]
    MissingRoot,

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("decode error: {0}")]
    Decode(#[from] quick_xml::DeError),

    #[error("encode error: {0}")]
    Encode(#[from] quick_xml::SeError),
}
