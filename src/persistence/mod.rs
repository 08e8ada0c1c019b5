pub mod files;
pub mod migration;
pub mod store;

pub use files::{atomic_write, home_store_file, local_store_file, read_file, STORE_FILE_NAME};
pub use migration::{migrate, migrate_all, RawTask};
pub use store::{JsonStore, TaskStore};

#[cfg(test)]
pub use store::MemoryStore;
