use crate::backend::DomBackend;
use crate::render::render;
use crate::vdom::VNode;
use thiserror::Error;
use tracing::debug;

/// The one failure class of the patch surface: a referenced id does not
/// resolve to a usable element. There is no recovery; callers get the
/// error and the document is left untouched by the failed operation's
/// surgery step.
#[derive(Debug, Error)]
pub enum DomError<E> {
    #[error("no element with id `{0}`")]
    MissingId(String),

    #[error("element with id `{0}` has no parent")]
    Detached(String),

    #[error("backend operation failed")]
    Backend(E),
}

/// Render `node` and append it as the last child of the element named by
/// `id`. Prior children keep their order.
pub fn append_child<B: DomBackend>(
    dom: &mut B,
    id: &str,
    node: &VNode,
) -> Result<(), DomError<B::Error>> {
    let target = resolve(dom, id)?;
    let rendered = render(dom, node).map_err(DomError::Backend)?;

    debug!(id, "append_child");
    dom.append_child(&target, &rendered).map_err(DomError::Backend)
}

/// Render `node` and insert it into the parent of the element named by
/// `id`, immediately before that element.
pub fn insert_before<B: DomBackend>(
    dom: &mut B,
    id: &str,
    node: &VNode,
) -> Result<(), DomError<B::Error>> {
    let target = resolve(dom, id)?;
    let parent = parent_of(dom, &target, id)?;
    let rendered = render(dom, node).map_err(DomError::Backend)?;

    debug!(id, "insert_before");
    dom.insert_before(&parent, &rendered, &target)
        .map_err(DomError::Backend)
}

/// Render `node` and replace the element named by `id` with it, preserving
/// the element's position among its siblings. The old element is detached.
pub fn update<B: DomBackend>(
    dom: &mut B,
    id: &str,
    node: &VNode,
) -> Result<(), DomError<B::Error>> {
    let target = resolve(dom, id)?;
    let parent = parent_of(dom, &target, id)?;
    let rendered = render(dom, node).map_err(DomError::Backend)?;

    debug!(id, "update");
    dom.replace_child(&parent, &rendered, &target)
        .map_err(DomError::Backend)
}

/// Detach the element named by `id` from its parent.
pub fn remove<B: DomBackend>(dom: &mut B, id: &str) -> Result<(), DomError<B::Error>> {
    let target = resolve(dom, id)?;
    let parent = parent_of(dom, &target, id)?;

    debug!(id, "remove");
    dom.remove_child(&parent, &target).map_err(DomError::Backend)
}

fn resolve<B: DomBackend>(dom: &B, id: &str) -> Result<B::Node, DomError<B::Error>> {
    dom.element_by_id(id)
        .ok_or_else(|| DomError::MissingId(id.to_owned()))
}

fn parent_of<B: DomBackend>(
    dom: &B,
    target: &B::Node,
    id: &str,
) -> Result<B::Node, DomError<B::Error>> {
    dom.parent(target)
        .ok_or_else(|| DomError::Detached(id.to_owned()))
}
