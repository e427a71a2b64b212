use crate::backend::DomBackend;
use smartstring::{LazyCompact, SmartString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

#[derive(Debug, Clone)]
pub enum DomNode {
    Element {
        tag: SmartString<LazyCompact>,
        attrs: Vec<(SmartString<LazyCompact>, String)>,
    },
    Text(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    #[error("node {0:?} is not live")]
    Stale(NodeId),

    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("node {0:?} is not a child of {1:?}")]
    NotAChild(NodeId, NodeId),
}

/// In-memory document: slot storage with parent links, ordered child
/// lists, and a free list for disposed slots.
///
/// Every live node counts as part of the document for [`element_by_id`]
/// lookups; the first element in slot order with a matching `id`
/// attribute wins. Detaching a node disposes its whole subtree, so
/// handles into a removed or replaced subtree go stale.
///
/// [`element_by_id`]: DomBackend::element_by_id
pub struct DomArena {
    nodes: Vec<Option<DomNode>>,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    free_list: Vec<u32>,
}

impl DomArena {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub fn create(&mut self, node: DomNode) -> NodeId {
        let index = if let Some(idx) = self.free_list.pop() {
            idx as usize
        } else {
            self.nodes.len()
        };

        if index >= self.nodes.len() {
            self.nodes.push(Some(node));
            self.parents.push(None);
            self.children.push(Vec::new());
        } else {
            self.nodes[index] = Some(node);
            self.parents[index] = None;
            self.children[index] = Vec::new();
        }

        NodeId(index as u32)
    }

    pub fn get(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(id.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut DomNode> {
        self.nodes.get_mut(id.0 as usize)?.as_mut()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        *self.parents.get(id.0 as usize)?
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            DomNode::Element { tag, .. } => Some(tag),
            DomNode::Text(_) => None,
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.get(id)? {
            DomNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, value)| value.as_str()),
            DomNode::Text(_) => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            DomNode::Text(content) => Some(content),
            DomNode::Element { .. } => None,
        }
    }

    /// Free a node and its whole subtree. Slots go back on the free list.
    pub fn dispose(&mut self, id: NodeId) {
        let idx = id.0 as usize;
        if idx >= self.nodes.len() || self.nodes[idx].is_none() {
            return;
        }

        let kids = std::mem::take(&mut self.children[idx]);
        for child in kids {
            self.dispose(child);
        }

        self.nodes[idx] = None;
        self.parents[idx] = None;
        self.free_list.push(id.0);
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize a live subtree in the same format as
    /// [`crate::vdom::VNode::to_html`].
    pub fn outer_html(&self, id: NodeId) -> String {
        match self.get(id) {
            Some(DomNode::Text(content)) => content.clone(),

            Some(DomNode::Element { tag, attrs }) => {
                let (space, attr_txt) = if attrs.is_empty() {
                    ("", String::new())
                } else {
                    let joined = attrs
                        .iter()
                        .map(|(name, value)| format!("{name}=\"{value}\""))
                        .collect::<Vec<String>>()
                        .join(" ");
                    (" ", joined)
                };

                let children = self
                    .children(id)
                    .iter()
                    .map(|child| self.outer_html(*child))
                    .collect::<Vec<String>>()
                    .join("");

                format!("<{tag}{space}{attr_txt}>{children}</{tag}>")
            }

            None => String::new(),
        }
    }

    fn ensure_live(&self, id: NodeId) -> Result<(), ArenaError> {
        if self.get(id).is_some() {
            Ok(())
        } else {
            Err(ArenaError::Stale(id))
        }
    }

    fn ensure_element(&self, id: NodeId) -> Result<(), ArenaError> {
        match self.get(id) {
            Some(DomNode::Element { .. }) => Ok(()),
            Some(DomNode::Text(_)) => Err(ArenaError::NotAnElement(id)),
            None => Err(ArenaError::Stale(id)),
        }
    }

    fn child_index(&self, parent: NodeId, child: NodeId) -> Result<usize, ArenaError> {
        self.children(parent)
            .iter()
            .position(|c| *c == child)
            .ok_or(ArenaError::NotAChild(child, parent))
    }

    /// Unlink a node from its current parent, if any, without disposing it.
    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            self.children[parent.0 as usize].retain(|c| *c != id);
            self.parents[id.0 as usize] = None;
        }
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}

impl DomBackend for DomArena {
    type Node = NodeId;
    type Error = ArenaError;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, ArenaError> {
        Ok(self.create(DomNode::Element {
            tag: tag.into(),
            attrs: Vec::new(),
        }))
    }

    fn create_text(&mut self, content: &str) -> Result<NodeId, ArenaError> {
        Ok(self.create(DomNode::Text(content.to_owned())))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), ArenaError> {
        self.ensure_element(*node)?;
        match self.get_mut(*node) {
            Some(DomNode::Element { attrs, .. }) => {
                if let Some(slot) = attrs.iter_mut().find(|(n, _)| n == name) {
                    slot.1 = value.to_owned();
                } else {
                    attrs.push((name.into(), value.to_owned()));
                }
                Ok(())
            }
            _ => Err(ArenaError::Stale(*node)),
        }
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), ArenaError> {
        self.ensure_element(*parent)?;
        self.ensure_live(*child)?;

        self.detach(*child);
        self.children[parent.0 as usize].push(*child);
        self.parents[child.0 as usize] = Some(*parent);
        Ok(())
    }

    fn insert_before(
        &mut self,
        parent: &NodeId,
        new: &NodeId,
        reference: &NodeId,
    ) -> Result<(), ArenaError> {
        self.ensure_element(*parent)?;
        self.ensure_live(*new)?;
        let index = self.child_index(*parent, *reference)?;

        self.detach(*new);
        self.children[parent.0 as usize].insert(index, *new);
        self.parents[new.0 as usize] = Some(*parent);
        Ok(())
    }

    fn replace_child(
        &mut self,
        parent: &NodeId,
        new: &NodeId,
        old: &NodeId,
    ) -> Result<(), ArenaError> {
        self.ensure_element(*parent)?;
        self.ensure_live(*new)?;
        let index = self.child_index(*parent, *old)?;

        self.detach(*new);
        self.children[parent.0 as usize][index] = *new;
        self.parents[new.0 as usize] = Some(*parent);
        self.parents[old.0 as usize] = None;
        self.dispose(*old);
        Ok(())
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), ArenaError> {
        self.ensure_element(*parent)?;
        let index = self.child_index(*parent, *child)?;

        self.children[parent.0 as usize].remove(index);
        self.parents[child.0 as usize] = None;
        self.dispose(*child);
        Ok(())
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        DomArena::parent(self, *node)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().enumerate().find_map(|(index, slot)| {
            let node = NodeId(index as u32);
            match slot {
                Some(DomNode::Element { .. }) if self.attribute(node, "id") == Some(id) => {
                    Some(node)
                }
                _ => None,
            }
        })
    }
}
