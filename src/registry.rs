// Table of the shape tags we know how to outline.
use std::collections::HashMap;

use crate::contour::Contour;
use crate::error::Error;
use crate::options::Options;
use crate::{path, shapes};

pub type SingleFn = fn(&[Option<&str>], &Options) -> Result<Contour, Error>;
pub type MultiFn = fn(&[Option<&str>], &Options) -> Result<Vec<Contour>, Error>;

/// A generator yields either one contour or a list of them.
#[derive(Clone, Copy)]
pub enum Generator {
    Single(SingleFn),
    Multi(MultiFn),
}

#[derive(Clone, Copy)]
pub struct ShapeDescriptor {
    pub generator: Generator,
    /// Attributes handed to the generator, in this order.
    pub params: &'static [&'static str],
}

impl ShapeDescriptor {
    pub fn multi_contour(&self) -> bool {
        match self.generator {
            Generator::Single(_) => false,
            Generator::Multi(_) => true,
        }
    }
    /// Run the generator, normalized to a list. An empty list means the shape
    /// drew nothing.
    pub fn generate(&self, params: &[Option<&str>], options: &Options) -> Result<Vec<Contour>, Error> {
        match self.generator {
            Generator::Single(f) => {
                let contour = f(params, options)?;
                Ok(if contour.is_empty() { Vec::new() } else { vec![contour] })
            },
            Generator::Multi(f) => f(params, options),
        }
    }
}

lazy_static! {
    static ref SHAPES: HashMap<&'static str, ShapeDescriptor> = {
        let mut m = HashMap::new();
        m.insert("path", ShapeDescriptor{generator: Generator::Multi(path::path), params: &["d"]});
        m.insert("circle", ShapeDescriptor{generator: Generator::Single(shapes::oval), params: &["cx", "cy", "r"]});
        m.insert("ellipse", ShapeDescriptor{generator: Generator::Single(shapes::oval), params: &["cx", "cy", "rx", "ry"]});
        m.insert("rect", ShapeDescriptor{generator: Generator::Single(shapes::rect), params: &["x", "y", "width", "height"]});
        m.insert("polygon", ShapeDescriptor{generator: Generator::Single(shapes::polygon), params: &["points"]});
        m.insert("polyline", ShapeDescriptor{generator: Generator::Single(shapes::polygon), params: &["points"]});
        m
    };
}

/// Descriptor for a supported tag, `None` for anything else.
pub fn lookup(tag: &str) -> Option<&'static ShapeDescriptor> {
    SHAPES.get(tag)
}

#[cfg(test)]
mod test {
    use super::lookup;
    use crate::options::Options;
    #[test]
    fn test_lookup() {
        for tag in &["path", "circle", "ellipse", "rect", "polygon", "polyline"] {
            assert!(lookup(tag).is_some(), "{} should be supported", tag);
        }
        for tag in &["g", "svg", "line", "text", "use", "Rect", ""] {
            assert!(lookup(tag).is_none(), "{} should not be supported", tag);
        }
        assert!(lookup("path").unwrap().multi_contour());
        assert!(!lookup("circle").unwrap().multi_contour());
        assert_eq!(lookup("ellipse").unwrap().params, &["cx", "cy", "rx", "ry"]);
    }
    #[test]
    fn test_generate_normalizes() {
        let opts = Options::default();
        let rect = lookup("rect").unwrap();
        assert_eq!(rect.generate(&[None, None, Some("1"), Some("1")], &opts).unwrap().len(), 1);
        assert!(rect.generate(&[None, None, None, None], &opts).unwrap().is_empty());
        let path = lookup("path").unwrap();
        assert_eq!(path.generate(&[Some("M0 0 L1 0 L1 1 Z M5 5 L6 5 L6 6 Z")], &opts).unwrap().len(), 2);
    }
}
