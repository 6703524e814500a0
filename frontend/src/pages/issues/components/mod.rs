pub mod active_filters;
pub mod filter_bar;

pub use active_filters::ActiveFilters;
pub use filter_bar::FilterBar;
