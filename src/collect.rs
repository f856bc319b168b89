use crate::error::Error;
use crate::node::SvgNode;
use crate::transform::{parse_transform, TransformOp};

/// The full transform chain that places `node`'s local coordinates in the
/// document: outermost ancestor's ops first, the node's own ops last.
/// Ancestors from `root_tag` upward are not included.
/// `None` means identity.
pub fn collect_transforms<N: SvgNode>(node: &N, root_tag: &str) -> Result<Option<Vec<TransformOp>>, Error> {
    let mut chain = parse_transform(node.attr("transform"))?;
    let mut current = node.parent_node();
    while let Some(ancestor) = current {
        if ancestor.tag() == root_tag {
            break
        }
        if let Some(raw) = ancestor.attr("transform") {
            // the whole list goes in front of everything nearer to the node, in its own order
            let mut outer = parse_transform(Some(raw))?;
            outer.append(&mut chain);
            chain = outer;
        }
        current = ancestor.parent_node();
    }
    Ok(if chain.is_empty() { None } else { Some(chain) })
}
