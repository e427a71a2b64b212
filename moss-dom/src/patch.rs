use crate::backend::DomBackend;
use crate::ops::{self, DomError};
use crate::vdom::VNode;
use serde::{Deserialize, Serialize};

/// A patch operation in serialized form, for callers that ship batches of
/// document edits instead of invoking the operations directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Patch {
    AppendChild { id: String, node: VNode },
    InsertBefore { id: String, node: VNode },
    Update { id: String, node: VNode },
    Remove { id: String },
}

impl Patch {
    pub fn apply<B: DomBackend>(&self, dom: &mut B) -> Result<(), DomError<B::Error>> {
        match self {
            Patch::AppendChild { id, node } => ops::append_child(dom, id, node),
            Patch::InsertBefore { id, node } => ops::insert_before(dom, id, node),
            Patch::Update { id, node } => ops::update(dom, id, node),
            Patch::Remove { id } => ops::remove(dom, id),
        }
    }
}

/// Apply patches in order, stopping at the first failure. Patches applied
/// before the failure stay applied.
pub fn apply_all<B: DomBackend>(dom: &mut B, patches: &[Patch]) -> Result<(), DomError<B::Error>> {
    for patch in patches {
        patch.apply(dom)?;
    }
    Ok(())
}
