// numeric attribute values, read the way browsers read presentation attributes
use regex::Regex;

const NUMBER_REGEX_STR: &'static str = r"[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?";

lazy_static! {
    static ref LEADING_NUMBER: Regex = Regex::new(&format!(r"^\s*({})", NUMBER_REGEX_STR)).unwrap();
}

/// Read the leading number of an attribute value, ignoring whatever follows
/// (so `"12px"` is 12). Non-finite results count as absent.
pub fn parse_float(s: &str) -> Option<f64> {
    let m = LEADING_NUMBER.captures(s)?.get(1)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn attr_float(value: Option<&str>) -> Option<f64> {
    value.and_then(parse_float)
}
