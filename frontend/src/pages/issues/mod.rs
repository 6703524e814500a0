pub mod components;
pub mod layout;
pub mod panel;
pub mod types;
pub mod utils;
pub mod view_model;

pub use panel::IssuesPage;
