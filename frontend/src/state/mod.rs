pub mod filters;
pub mod navigation;
pub mod viewport;
