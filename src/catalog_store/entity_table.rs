//! Keyed storage for one kind of catalog record.

use super::error::{CatalogError, CatalogResult};
use super::models::CatalogEntity;
use std::collections::HashMap;

/// Records of a single kind, keyed by id.
///
/// The table owns its records: `add` and `update` take the record by value,
/// reads hand out clones.
#[derive(Debug)]
pub struct EntityTable<T: CatalogEntity> {
    records: HashMap<String, T>,
}

impl<T: CatalogEntity> Default for EntityTable<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<T: CatalogEntity> EntityTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: T) -> CatalogResult<()> {
        self.ensure_absent(entity.id())?;
        self.records.insert(entity.id().to_owned(), entity);
        Ok(())
    }

    pub fn get(&self, id: &str) -> CatalogResult<T> {
        self.record(id).cloned()
    }

    /// Replaces the whole stored record, fields are never merged.
    pub fn update(&mut self, entity: T) -> CatalogResult<()> {
        match self.records.get_mut(entity.id()) {
            Some(stored) => {
                *stored = entity;
                Ok(())
            }
            None => Err(not_found::<T>(entity.id())),
        }
    }

    /// Removes the record and returns it.
    pub fn delete(&mut self, id: &str) -> CatalogResult<T> {
        self.records.remove(id).ok_or_else(|| not_found::<T>(id))
    }

    pub fn list_all(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Borrow of the stored record, for callers that hold the owning lock.
    pub(super) fn record(&self, id: &str) -> CatalogResult<&T> {
        self.records.get(id).ok_or_else(|| not_found::<T>(id))
    }

    pub(super) fn ensure_absent(&self, id: &str) -> CatalogResult<()> {
        if self.records.contains_key(id) {
            return Err(CatalogError::AlreadyExists {
                kind: T::KIND,
                id: id.to_owned(),
            });
        }
        Ok(())
    }

    pub(super) fn records(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

fn not_found<T: CatalogEntity>(id: &str) -> CatalogError {
    CatalogError::NotFound {
        kind: T::KIND,
        id: id.to_owned(),
    }
}
