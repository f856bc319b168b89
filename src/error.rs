use std::fmt;

/// Errors raised while turning SVG nodes into contours.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A `transform` attribute that could not be parsed.
    Transform { input: String, reason: String },
    /// A path `d` attribute that could not be parsed.
    PathData { input: String, reason: String },
    /// The document handed to `convert_svg_str` is not well-formed XML.
    Xml(String),
    /// An options document that could not be loaded.
    Config(String),
}

impl Error {
    pub(crate) fn transform(input: &str, reason: impl Into<String>) -> Error {
        Error::Transform{input: input.to_string(), reason: reason.into()}
    }
    pub(crate) fn path_data(input: &str, reason: impl Into<String>) -> Error {
        Error::PathData{input: input.to_string(), reason: reason.into()}
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transform { input, reason } => write!(f, "bad transform {:?}: {}", input, reason),
            Error::PathData { input, reason } => write!(f, "bad path data {:?}: {}", input, reason),
            Error::Xml(msg) => write!(f, "xml: {}", msg),
            Error::Config(msg) => write!(f, "options: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Error {
        Error::Xml(e.to_string())
    }
}
