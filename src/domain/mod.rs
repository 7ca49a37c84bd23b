//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod inheritance;
pub mod presentation;

pub use arena::{NodeData, NodeKind, TreeArena, TreeNode};
pub use entities::*;
pub use error::DomainError;
pub use inheritance::{child_phenotypes, child_rh_signs, phenotypes_for, resolve, ChildSet};
pub use presentation::{Explanation, HierarchyDocument, PresentationTree, RevealStep};
