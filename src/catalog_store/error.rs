//! Typed failures returned by the catalog store.

use super::models::{EntityKind, Relation};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{kind} with id '{id}' already exists")]
    AlreadyExists { kind: EntityKind, id: String },

    #[error("{kind} with id '{id}' does not exist")]
    NotFound { kind: EntityKind, id: String },

    #[error(
        "{parent} '{parent_id}' does not contain any {child}s",
        parent = .relation.parent_kind(),
        child = .relation.child_kind()
    )]
    NoChildren {
        relation: Relation,
        parent_id: String,
    },

    #[error("'{child_id}' is already indexed under '{parent_id}' in {relation}")]
    DuplicateChild {
        relation: Relation,
        parent_id: String,
        child_id: String,
    },

    #[error("no bucket for '{parent_id}' in {relation}")]
    ParentNotFound {
        relation: Relation,
        parent_id: String,
    },

    #[error("'{child_id}' is not indexed under '{parent_id}' in {relation}")]
    ChildNotFound {
        relation: Relation,
        parent_id: String,
        child_id: String,
    },
}

impl CatalogError {
    /// Reverse-index faults only happen when a table and its indices have
    /// already drifted apart.
    pub fn is_consistency_fault(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateChild { .. }
                | CatalogError::ParentNotFound { .. }
                | CatalogError::ChildNotFound { .. }
        )
    }

    /// Short label used for metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::AlreadyExists { .. } => "already_exists",
            CatalogError::NotFound { .. } => "not_found",
            CatalogError::NoChildren { .. } => "no_children",
            CatalogError::DuplicateChild { .. } => "duplicate_child",
            CatalogError::ParentNotFound { .. } => "parent_not_found",
            CatalogError::ChildNotFound { .. } => "child_not_found",
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
