//! One entity table plus the reverse indices fed by its foreign keys.
//!
//! Every operation holds the store lock from the first check to the last
//! write. Mutations validate every table and index step before applying any
//! of them, so a failed call leaves the store exactly as it found it.

use super::entity_table::EntityTable;
use super::error::{CatalogError, CatalogResult};
use super::models::{CatalogEntity, Relation};
use super::reverse_index::ReverseIndex;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

struct Indexed<T: CatalogEntity> {
    table: EntityTable<T>,
    indices: Vec<ReverseIndex>,
}

pub struct EntityStore<T: CatalogEntity> {
    inner: RwLock<Indexed<T>>,
}

/// A disagreement between a table and one of its reverse indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityProblem {
    /// The index lists a child whose record is gone or points elsewhere.
    DanglingChild {
        relation: Relation,
        parent_id: String,
        child_id: String,
    },
    /// A stored record is missing from the bucket of its parent.
    UnindexedRecord {
        relation: Relation,
        parent_id: String,
        child_id: String,
    },
}

impl fmt::Display for IntegrityProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityProblem::DanglingChild {
                relation,
                parent_id,
                child_id,
            } => write!(
                f,
                "{} index lists '{}' under '{}' but the record disagrees",
                relation, child_id, parent_id
            ),
            IntegrityProblem::UnindexedRecord {
                relation,
                parent_id,
                child_id,
            } => write!(
                f,
                "'{}' references '{}' but is missing from the {} index",
                child_id, parent_id, relation
            ),
        }
    }
}

fn parent_key<T: CatalogEntity>(entity: &T, relation: Relation) -> &str {
    entity.parent_id(relation).unwrap_or_default()
}

impl<T: CatalogEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity> EntityStore<T> {
    pub fn new() -> Self {
        let indices = T::RELATIONS
            .iter()
            .map(|relation| ReverseIndex::new(*relation))
            .collect();
        Self {
            inner: RwLock::new(Indexed {
                table: EntityTable::new(),
                indices,
            }),
        }
    }

    // Mutations never write before every check passed, so a poisoned lock
    // still guards a consistent state.
    fn read(&self) -> RwLockReadGuard<'_, Indexed<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Indexed<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, entity: T) -> CatalogResult<()> {
        let mut guard = self.write();
        let indexed = &mut *guard;

        indexed.table.ensure_absent(entity.id())?;
        for index in &indexed.indices {
            index.ensure_insertable(parent_key(&entity, index.relation()), entity.id())?;
        }

        for index in &mut indexed.indices {
            let relation = index.relation();
            index.insert(parent_key(&entity, relation), entity.id())?;
        }
        debug!("Stored {} '{}'", T::KIND, entity.id());
        indexed.table.add(entity)
    }

    pub fn get(&self, id: &str) -> CatalogResult<T> {
        self.read().table.get(id)
    }

    /// Replaces the stored record, moving it between buckets for every
    /// foreign key that changed.
    pub fn update(&self, entity: T) -> CatalogResult<()> {
        let mut guard = self.write();
        let indexed = &mut *guard;

        let stored = indexed.table.record(entity.id())?;
        let moves: Vec<(usize, String)> = indexed
            .indices
            .iter()
            .enumerate()
            .filter_map(|(position, index)| {
                let old_parent = parent_key(stored, index.relation());
                let new_parent = parent_key(&entity, index.relation());
                (old_parent != new_parent).then(|| (position, old_parent.to_owned()))
            })
            .collect();

        for (position, old_parent) in &moves {
            let index = &indexed.indices[*position];
            index.ensure_removable(old_parent, entity.id())?;
            index.ensure_insertable(parent_key(&entity, index.relation()), entity.id())?;
        }

        for (position, old_parent) in &moves {
            let index = &mut indexed.indices[*position];
            let relation = index.relation();
            let new_parent = parent_key(&entity, relation);
            index.remove(old_parent, entity.id())?;
            index.insert(new_parent, entity.id())?;
            debug!(
                "Moved {} '{}' from '{}' to '{}' in {}",
                T::KIND,
                entity.id(),
                old_parent,
                new_parent,
                relation
            );
        }
        indexed.table.update(entity)
    }

    pub fn delete(&self, id: &str) -> CatalogResult<()> {
        let mut guard = self.write();
        let indexed = &mut *guard;

        let stored = indexed.table.record(id)?;
        let parents: Vec<String> = indexed
            .indices
            .iter()
            .map(|index| parent_key(stored, index.relation()).to_owned())
            .collect();

        for (index, parent_id) in indexed.indices.iter().zip(&parents) {
            index.ensure_removable(parent_id, id)?;
        }

        for (index, parent_id) in indexed.indices.iter_mut().zip(&parents) {
            index.remove(parent_id, id)?;
        }
        indexed.table.delete(id)?;
        debug!("Deleted {} '{}'", T::KIND, id);
        Ok(())
    }

    pub fn list_all(&self) -> Vec<String> {
        self.read().table.list_all()
    }

    pub fn list_children(&self, relation: Relation, parent_id: &str) -> CatalogResult<Vec<String>> {
        let indexed = self.read();
        match indexed
            .indices
            .iter()
            .find(|index| index.relation() == relation)
        {
            Some(index) => index.list_children(parent_id),
            None => {
                debug_assert!(false, "{} is not indexed by {} records", relation, T::KIND);
                Err(CatalogError::NoChildren {
                    relation,
                    parent_id: parent_id.to_owned(),
                })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.read().table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().table.is_empty()
    }

    /// Cross-checks every index against the table, both directions.
    pub fn check_integrity(&self) -> Vec<IntegrityProblem> {
        let indexed = self.read();
        let mut problems = Vec::new();

        for index in &indexed.indices {
            let relation = index.relation();
            for (parent_id, child_id) in index.entries() {
                let agrees = indexed
                    .table
                    .record(child_id)
                    .map(|record| parent_key(record, relation) == parent_id)
                    .unwrap_or(false);
                if !agrees {
                    problems.push(IntegrityProblem::DanglingChild {
                        relation,
                        parent_id: parent_id.to_owned(),
                        child_id: child_id.to_owned(),
                    });
                }
            }
            for record in indexed.table.records() {
                let parent_id = parent_key(record, relation);
                if !index.contains(parent_id, record.id()) {
                    problems.push(IntegrityProblem::UnindexedRecord {
                        relation,
                        parent_id: parent_id.to_owned(),
                        child_id: record.id().to_owned(),
                    });
                }
            }
        }
        problems
    }

    #[cfg(test)]
    fn with_indices(&self, f: impl FnOnce(&mut Vec<ReverseIndex>)) {
        f(&mut self.write().indices)
    }
}
