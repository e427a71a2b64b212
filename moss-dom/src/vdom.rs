use serde::{Deserialize, Serialize};
use smartstring::{LazyCompact, SmartString};

/// A serialized element or text node.
///
/// The serde representation is the wire format: `{"Text": "..."}` or
/// `{"Element": {"tag": ..., "attr": null | [["name","value"], ...],
/// "children": [...]}}`. `attr` stays ternary through round-trips: absent
/// (`null`), empty, or a non-empty pair list applied in sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VNode {
    Element {
        tag: SmartString<LazyCompact>,
        attr: Option<Vec<(String, String)>>,
        children: Vec<VNode>,
    },
    Text(String),
}

impl VNode {
    pub fn text(content: impl Into<String>) -> VNode {
        VNode::Text(content.into())
    }

    pub fn with_child(tag: &str, child: VNode) -> VNode {
        VNode::Element {
            tag: tag.into(),
            attr: None,
            children: vec![child],
        }
    }

    pub fn with_children(tag: &str, children: Vec<VNode>) -> VNode {
        VNode::Element {
            tag: tag.into(),
            attr: None,
            children,
        }
    }

    pub fn with_child_attr(tag: &str, attr: Vec<(String, String)>, child: VNode) -> VNode {
        VNode::Element {
            tag: tag.into(),
            attr: Some(attr),
            children: vec![child],
        }
    }

    pub fn with_children_attr(
        tag: &str,
        attr: Vec<(String, String)>,
        children: Vec<VNode>,
    ) -> VNode {
        VNode::Element {
            tag: tag.into(),
            attr: Some(attr),
            children,
        }
    }

    pub fn with_text(tag: &str, text: impl Into<String>) -> VNode {
        VNode::Element {
            tag: tag.into(),
            attr: None,
            children: vec![VNode::Text(text.into())],
        }
    }

    pub fn with_text_attr(
        tag: &str,
        text: impl Into<String>,
        attr: Vec<(String, String)>,
    ) -> VNode {
        VNode::Element {
            tag: tag.into(),
            attr: Some(attr),
            children: vec![VNode::Text(text.into())],
        }
    }

    /// Serialize the tree to an HTML string. Text renders verbatim,
    /// attributes in sequence order.
    pub fn to_html(&self) -> String {
        match self {
            VNode::Element {
                tag,
                attr,
                children,
            } => {
                let children = children_to_html(children);

                let (space, attr_txt) = match attr {
                    Some(attr) if !attr.is_empty() => (" ", attr_to_html(attr)),
                    _ => ("", String::new()),
                };

                format!("<{tag}{space}{attr_txt}>{children}</{tag}>")
            }

            VNode::Text(t) => t.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<VNode, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn children_to_html(children: &[VNode]) -> String {
    children
        .iter()
        .map(VNode::to_html)
        .collect::<Vec<String>>()
        .join("")
}

fn attr_to_html(attr: &[(String, String)]) -> String {
    attr.iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect::<Vec<String>>()
        .join(" ")
}
