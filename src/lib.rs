#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate serde_xml_rs;
extern crate regex;
extern crate roxmltree;
extern crate svgtypes;
extern crate kurbo;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
mod number;
mod error;
mod options;
mod contour;
mod transform;
mod shapes;
mod path;
mod node;
mod registry;
mod collect;
mod assemble;
pub use error::Error;
pub use options::Options;
pub use contour::{Contour, ContourPoint, contours_to_path_data};
pub use transform::{TransformOp, parse_transform, compose, apply_transforms};
pub use kurbo::Affine;
pub use node::{SvgNode, extract_params};
pub use registry::{ShapeDescriptor, Generator, lookup};
pub use collect::collect_transforms;
pub use assemble::{ParsedSegment, scan, generate, convert, convert_with_options, convert_svg_str};
