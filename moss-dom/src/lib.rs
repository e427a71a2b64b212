//! Renders serialized virtual node trees into a live document and patches
//! the document by element id. The document itself is behind [`DomBackend`],
//! so the same renderer drives a real browser DOM or the in-memory
//! [`arena::DomArena`].

pub mod arena;
pub mod backend;
pub mod ops;
pub mod patch;
pub mod render;
pub mod vdom;

pub use backend::DomBackend;
pub use ops::{append_child, insert_before, remove, update, DomError};
pub use patch::{apply_all, Patch};
pub use render::render;
pub use vdom::VNode;
