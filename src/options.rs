use serde_xml_rs::from_str;

use crate::error::Error;

/// Knobs for a conversion call. Hosts keep these as an XML element, e.g.
/// `<options root-tag="svg" curve-tolerance="0.25"/>`; missing attributes default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Tag of the document root element; the ancestor walk stops before it.
    #[serde(rename="root-tag")]
    pub root_tag: String,
    /// Max distance (user units) between a cubic or arc and its quadratic approximation.
    #[serde(rename="curve-tolerance")]
    pub curve_tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options{
            root_tag: "svg".to_string(),
            curve_tolerance: 0.5,
        }
    }
}

impl Options {
    pub fn from_xml(xml: &str) -> Result<Options, Error> {
        let ret: Options = from_str(xml).map_err(|e| Error::Config(e.to_string()))?;
        if !(ret.curve_tolerance > 0.) {
            return Err(Error::Config(format!("curve-tolerance must be positive, got {}", ret.curve_tolerance)));
        }
        Ok(ret)
    }
}
