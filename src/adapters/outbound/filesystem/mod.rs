pub mod file_slice_storage;

pub use file_slice_storage::FileSliceStorage;
