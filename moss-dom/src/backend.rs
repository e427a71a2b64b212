/// Backend over a live node tree.
///
/// The document is an explicit dependency of the renderer and the patch
/// operations rather than an ambient singleton. `moss_web` implements this
/// over the browser document; [`crate::arena::DomArena`] implements it
/// in memory.
pub trait DomBackend {
    /// Handle to a live node. Cloning the handle does not clone the node.
    type Node: Clone;
    type Error;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, Self::Error>;

    fn create_text(&mut self, content: &str) -> Result<Self::Node, Self::Error>;

    fn set_attribute(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    fn append_child(
        &mut self,
        parent: &Self::Node,
        child: &Self::Node,
    ) -> Result<(), Self::Error>;

    /// Insert `new` into `parent` immediately before `reference`.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        new: &Self::Node,
        reference: &Self::Node,
    ) -> Result<(), Self::Error>;

    /// Replace `old` with `new` in `parent`, preserving position.
    fn replace_child(
        &mut self,
        parent: &Self::Node,
        new: &Self::Node,
        old: &Self::Node,
    ) -> Result<(), Self::Error>;

    fn remove_child(
        &mut self,
        parent: &Self::Node,
        child: &Self::Node,
    ) -> Result<(), Self::Error>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Direct id lookup, no traversal or fallback.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}
