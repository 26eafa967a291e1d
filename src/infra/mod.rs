pub mod storage;

pub use storage::{load_json, save_json, FileStore, KeyValueStore, MemoryStore, StorageError};
