use moss_dom::DomBackend;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node};

/// The browser document as a [`DomBackend`]. Handles are `web_sys::Node`,
/// faults surface as the `JsValue` the platform call produced.
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        Ok(Self { document })
    }

    pub fn with_document(document: Document) -> Self {
        Self { document }
    }
}

impl DomBackend for WebDom {
    type Node = Node;
    type Error = JsValue;

    fn create_element(&mut self, tag: &str) -> Result<Node, JsValue> {
        Ok(self.document.create_element(tag)?.into())
    }

    fn create_text(&mut self, content: &str) -> Result<Node, JsValue> {
        Ok(self.document.create_text_node(content).into())
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) -> Result<(), JsValue> {
        let element: &Element = node
            .dyn_ref()
            .ok_or_else(|| JsValue::from_str("not an element"))?;
        element.set_attribute(name, value)
    }

    fn append_child(&mut self, parent: &Node, child: &Node) -> Result<(), JsValue> {
        parent.append_child(child).map(|_| ())
    }

    fn insert_before(&mut self, parent: &Node, new: &Node, reference: &Node) -> Result<(), JsValue> {
        parent.insert_before(new, Some(reference)).map(|_| ())
    }

    fn replace_child(&mut self, parent: &Node, new: &Node, old: &Node) -> Result<(), JsValue> {
        parent.replace_child(new, old).map(|_| ())
    }

    fn remove_child(&mut self, parent: &Node, child: &Node) -> Result<(), JsValue> {
        parent.remove_child(child).map(|_| ())
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Into::into)
    }
}
