pub mod filter_engine;
pub mod search;

pub use filter_engine::{
    FilterBounds, FilterCriteria, FilterEngine, FilterStats, RangeFilter, SelectFilter,
};
pub use search::{search_products, SearchState};
