// Two passes over the input: scan nodes into segments, then generate and place contours.
use crate::collect::collect_transforms;
use crate::contour::Contour;
use crate::error::Error;
use crate::node::{extract_params, SvgNode};
use crate::options::Options;
use crate::registry::{lookup, ShapeDescriptor};
use crate::transform::{apply_transforms, TransformOp};

/// One supported shape node, read but not yet outlined.
pub struct ParsedSegment<'n> {
    pub kind: &'n str,
    pub descriptor: &'static ShapeDescriptor,
    pub params: Vec<Option<&'n str>>,
    pub transform: Option<Vec<TransformOp>>,
}

/// Pick out supported shapes, in input order, with their attributes and transform chains.
pub fn scan<'n, N: SvgNode>(nodes: &'n [N], options: &Options) -> Result<Vec<ParsedSegment<'n>>, Error> {
    let mut segments = Vec::new();
    for node in nodes {
        let kind = node.tag();
        let descriptor = match lookup(kind) {
            Some(d) => d,
            None => {
                trace!("skipping unsupported <{}>", kind);
                continue
            },
        };
        let transform = collect_transforms(node, &options.root_tag)?;
        trace!("<{}> transform chain of {} ops", kind, transform.as_ref().map_or(0, |t| t.len()));
        segments.push(ParsedSegment{
            kind: kind,
            descriptor: descriptor,
            params: extract_params(node, descriptor.params),
            transform: transform,
        });
    }
    Ok(segments)
}

/// Outline every segment and flatten the results. `None` when nothing was drawn.
pub fn generate(segments: &[ParsedSegment], options: &Options) -> Result<Option<Vec<Contour>>, Error> {
    if segments.is_empty() {
        return Ok(None)
    }
    let mut ret = Vec::new();
    for segment in segments {
        let contours = segment.descriptor.generate(&segment.params, options)?;
        if contours.is_empty() {
            trace!("<{}> produced no outline", segment.kind);
            continue
        }
        match segment.transform {
            Some(ref ops) => ret.extend(apply_transforms(&contours, ops)),
            None => ret.extend(contours),
        }
    }
    Ok(if ret.is_empty() { None } else { Some(ret) })
}

pub fn convert_with_options<N: SvgNode>(nodes: &[N], options: &Options) -> Result<Option<Vec<Contour>>, Error> {
    let segments = scan(nodes, options)?;
    let ret = generate(&segments, options)?;
    debug!("{} nodes, {} shapes, {} contours",
           nodes.len(), segments.len(), ret.as_ref().map_or(0, |c| c.len()));
    Ok(ret)
}

/// Convert shape nodes to contours, in input order. `Ok(None)` when none of
/// the nodes is a supported shape or none of them drew anything.
pub fn convert<N: SvgNode>(nodes: &[N]) -> Result<Option<Vec<Contour>>, Error> {
    convert_with_options(nodes, &Options::default())
}

/// Parse an SVG document and convert every element in it, in document order.
pub fn convert_svg_str(svg: &str, options: &Options) -> Result<Option<Vec<Contour>>, Error> {
    let doc = roxmltree::Document::parse(svg)?;
    let nodes: Vec<roxmltree::Node> = doc.descendants().filter(|n| n.is_element()).collect();
    convert_with_options(&nodes, options)
}

#[cfg(test)]
mod test {
    use super::{convert, convert_svg_str, generate, scan};
    use crate::contour::ContourPoint;
    use crate::options::Options;
    use crate::shapes;
    use crate::transform::TransformOp;
    fn elements<'a, 'input>(doc: &'a roxmltree::Document<'input>) -> Vec<roxmltree::Node<'a, 'input>> {
        doc.descendants().filter(|n| n.is_element()).collect()
    }
    #[test]
    fn test_scan_keeps_order_and_skips_unknown() {
        let doc = roxmltree::Document::parse(r#"<svg><text/><g transform="translate(1)">
            <rect x="1"/><line/><circle r="2"/></g><path d="M0 0"/></svg>"#).unwrap();
        let nodes = elements(&doc);
        let segments = scan(&nodes, &Options::default()).unwrap();
        let kinds: Vec<&str> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec!["rect", "circle", "path"]);
        assert_eq!(segments[0].params, vec![Some("1"), None, None, None]);
        assert_eq!(segments[1].transform, Some(vec![TransformOp::Translate{tx:1., ty:0.}]));
        assert_eq!(segments[2].transform, None);
    }
    #[test]
    fn test_nothing_supported_is_none() {
        let doc = roxmltree::Document::parse(r#"<svg><g><text/><line x2="3"/></g></svg>"#).unwrap();
        assert_eq!(convert(&elements(&doc)).unwrap(), None);
        let empty: Vec<roxmltree::Node> = Vec::new();
        assert_eq!(convert(&empty).unwrap(), None);
        assert!(generate(&[], &Options::default()).unwrap().is_none());
    }
    #[test]
    fn test_only_empty_shapes_is_none() {
        let doc = roxmltree::Document::parse(r#"<svg><circle cx="1"/><rect width="0" height="3"/><path/></svg>"#).unwrap();
        assert_eq!(convert(&elements(&doc)).unwrap(), None);
    }
    #[test]
    fn test_empty_shapes_leave_no_gap() {
        let doc = roxmltree::Document::parse(r#"<svg><rect width="1" height="1"/><circle/>
            <polygon points="0 0 5 0 5 5"/></svg>"#).unwrap();
        let contours = convert(&elements(&doc)).unwrap().unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[1][1], ContourPoint::on(5., 0.));
    }
    #[test]
    fn test_circle_matches_oval_generator() {
        let doc = roxmltree::Document::parse(r#"<svg><circle cx="5" cy="5" r="3"/></svg>"#).unwrap();
        let contours = convert(&elements(&doc)).unwrap().unwrap();
        let direct = shapes::oval(&[Some("5"), Some("5"), Some("3")], &Options::default()).unwrap();
        assert_eq!(contours, vec![direct]);
    }
    #[test]
    fn test_multi_contour_path_expands_in_place() {
        let doc = roxmltree::Document::parse(r#"<svg><rect width="1" height="1"/>
            <path d="M0 0 L1 0 L1 1 Z M5 5 L6 5 L6 6 Z"/><rect x="9" width="1" height="1"/></svg>"#).unwrap();
        let contours = convert(&elements(&doc)).unwrap().unwrap();
        assert_eq!(contours.len(), 4);
        assert_eq!(contours[1][0], ContourPoint::on(0., 0.));
        assert_eq!(contours[2][0], ContourPoint::on(5., 5.));
        assert_eq!(contours[3][0], ContourPoint::on(9., 0.));
    }
    #[test]
    fn test_transform_is_applied() {
        let doc = roxmltree::Document::parse(r#"<svg><g transform="translate(10,0)">
            <rect transform="scale(2)" x="1" y="0" width="1" height="1"/></g></svg>"#).unwrap();
        let contours = convert(&elements(&doc)).unwrap().unwrap();
        assert_eq!(contours[0][0], ContourPoint::on(12., 0.));
        assert_eq!(contours[0][2], ContourPoint::on(14., 2.));
    }
    #[test]
    fn test_errors_propagate() {
        let doc = roxmltree::Document::parse(r#"<svg><rect width="1" height="1"/><path d="M0 0 L"/></svg>"#).unwrap();
        assert!(convert(&elements(&doc)).is_err());
        let doc = roxmltree::Document::parse(r#"<svg><rect width="1" height="1" transform="bogus"/></svg>"#).unwrap();
        assert!(convert(&elements(&doc)).is_err());
        // unsupported nodes are never looked at, bad transforms and all
        let doc = roxmltree::Document::parse(r#"<svg><text transform="bogus"/></svg>"#).unwrap();
        assert_eq!(convert(&elements(&doc)).unwrap(), None);
    }
    #[test]
    fn test_custom_root_tag() {
        let svg = r#"<glyph transform="translate(50)"><g transform="translate(5)"><rect width="1" height="1"/></g></glyph>"#;
        let default = convert_svg_str(svg, &Options::default()).unwrap().unwrap();
        assert_eq!(default[0][0], ContourPoint::on(55., 0.));
        let opts = Options{root_tag: "glyph".to_string(), ..Options::default()};
        let scoped = convert_svg_str(svg, &opts).unwrap().unwrap();
        assert_eq!(scoped[0][0], ContourPoint::on(5., 0.));
    }
    #[test]
    fn test_bad_xml() {
        assert!(convert_svg_str("<svg><rect></svg>", &Options::default()).is_err());
    }
}
