mod entity_store;
mod entity_table;
mod error;
mod models;
mod reverse_index;
mod store;
mod trait_def;

pub use entity_store::{EntityStore, IntegrityProblem};
pub use entity_table::EntityTable;
pub use error::{CatalogError, CatalogResult};
pub use models::*;
pub use reverse_index::ReverseIndex;
pub use store::InMemoryCatalogStore;
pub use trait_def::CatalogStore;
