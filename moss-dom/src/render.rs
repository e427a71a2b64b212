use crate::backend::DomBackend;
use crate::vdom::VNode;
use tracing::trace;

/// Build a live subtree from a serialized node.
///
/// The output is structurally isomorphic to the input: attributes are
/// applied in sequence order and children are rendered and appended in
/// sequence order. Recursion depth equals tree depth; the input is
/// tree-shaped by construction, so there is no cycle detection.
pub fn render<B: DomBackend>(dom: &mut B, node: &VNode) -> Result<B::Node, B::Error> {
    match node {
        VNode::Text(content) => {
            trace!(len = content.len(), "creating text node");
            dom.create_text(content)
        }

        VNode::Element {
            tag,
            attr,
            children,
        } => {
            trace!(%tag, children = children.len(), "creating element");
            let element = dom.create_element(tag)?;

            if let Some(attr) = attr {
                for (name, value) in attr {
                    dom.set_attribute(&element, name, value)?;
                }
            }

            for child in children {
                let rendered = render(dom, child)?;
                dom.append_child(&element, &rendered)?;
            }

            Ok(element)
        }
    }
}
