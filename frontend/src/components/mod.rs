pub mod layout;
pub mod select;
pub mod text_input;
