/// What the converter needs from a document node: its tag, its attributes,
/// and a way up to the enclosing element.
pub trait SvgNode: Sized {
    fn tag(&self) -> &str;
    fn attr(&self, name: &str) -> Option<&str>;
    /// The parent element, or `None` at the top of the document.
    fn parent_node(&self) -> Option<Self>;
}

impl<'a, 'input: 'a> SvgNode for roxmltree::Node<'a, 'input> {
    fn tag(&self) -> &str {
        self.tag_name().name()
    }
    fn attr(&self, name: &str) -> Option<&str> {
        self.attribute(name)
    }
    fn parent_node(&self) -> Option<Self> {
        self.parent_element()
    }
}

/// Attribute values in the order given; missing attributes stay `None` so
/// the generator decides what they default to.
pub fn extract_params<'n, N: SvgNode>(node: &'n N, names: &[&str]) -> Vec<Option<&'n str>> {
    names.iter().map(|name| node.attr(name)).collect()
}
