//! Reverse indices from a parent id to the ids of its children.
//!
//! An index is derived data: the entity store keeps it in step with the
//! foreign keys of the records in its table. Buckets that become empty are
//! pruned, so "never had children" and "no longer has children" look the
//! same to readers.

use super::error::{CatalogError, CatalogResult};
use super::models::Relation;
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
pub struct ReverseIndex {
    relation: Relation,
    buckets: HashMap<String, HashSet<String>>,
}

impl ReverseIndex {
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            buckets: HashMap::new(),
        }
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Adds `child_id` under `parent_id`, creating the bucket on first use.
    pub fn insert(&mut self, parent_id: &str, child_id: &str) -> CatalogResult<()> {
        self.ensure_insertable(parent_id, child_id)?;
        self.buckets
            .entry(parent_id.to_owned())
            .or_default()
            .insert(child_id.to_owned());
        Ok(())
    }

    pub fn remove(&mut self, parent_id: &str, child_id: &str) -> CatalogResult<()> {
        self.ensure_removable(parent_id, child_id)?;
        if let Some(bucket) = self.buckets.get_mut(parent_id) {
            bucket.remove(child_id);
            if bucket.is_empty() {
                self.buckets.remove(parent_id);
            }
        }
        Ok(())
    }

    /// Children of `parent_id`, in no particular order.
    pub fn list_children(&self, parent_id: &str) -> CatalogResult<Vec<String>> {
        match self.buckets.get(parent_id) {
            Some(bucket) if !bucket.is_empty() => Ok(bucket.iter().cloned().collect()),
            _ => Err(CatalogError::NoChildren {
                relation: self.relation,
                parent_id: parent_id.to_owned(),
            }),
        }
    }

    pub fn contains(&self, parent_id: &str, child_id: &str) -> bool {
        self.buckets
            .get(parent_id)
            .is_some_and(|bucket| bucket.contains(child_id))
    }

    /// Fails exactly when `insert` would, without touching the index.
    pub fn ensure_insertable(&self, parent_id: &str, child_id: &str) -> CatalogResult<()> {
        if self.contains(parent_id, child_id) {
            return Err(CatalogError::DuplicateChild {
                relation: self.relation,
                parent_id: parent_id.to_owned(),
                child_id: child_id.to_owned(),
            });
        }
        Ok(())
    }

    /// Fails exactly when `remove` would, without touching the index.
    pub fn ensure_removable(&self, parent_id: &str, child_id: &str) -> CatalogResult<()> {
        let bucket = self
            .buckets
            .get(parent_id)
            .ok_or_else(|| CatalogError::ParentNotFound {
                relation: self.relation,
                parent_id: parent_id.to_owned(),
            })?;
        if !bucket.contains(child_id) {
            return Err(CatalogError::ChildNotFound {
                relation: self.relation,
                parent_id: parent_id.to_owned(),
                child_id: child_id.to_owned(),
            });
        }
        Ok(())
    }

    /// Every (parent, child) pair currently indexed.
    pub(super) fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets.iter().flat_map(|(parent, children)| {
            children
                .iter()
                .map(move |child| (parent.as_str(), child.as_str()))
        })
    }
}
