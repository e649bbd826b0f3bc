//! Persistence backends for the video store.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use minitube_core::repository::{ReadRepository, Repository, Result};
pub use minitube_core::StorageError;
pub use mysql::MySqlRepository;
