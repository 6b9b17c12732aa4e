pub mod errors;
pub mod impls;
pub mod types;

pub use errors::StoreError;
pub use types::{DomainEntry, DomainMap, DomainStatus, RecordStore};
