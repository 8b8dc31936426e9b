pub mod memory_slice_storage;
pub mod storage_hub;

pub use memory_slice_storage::MemorySliceStorage;
pub use storage_hub::{HubContext, StorageHub};
