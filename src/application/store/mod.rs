/// The persisted client store: named, independently persisted slices of
/// state that survive reloads and propagate mutations across contexts.
pub mod client_store;
pub mod slice;

pub use client_store::{
    ClientStore, BOOKMARKS_SLICE_KEY, COMPARE_SLICE_KEY, QUOTE_CART_SLICE_KEY, SEARCH_SLICE_KEY,
};
pub use slice::{Slice, SliceValue};
