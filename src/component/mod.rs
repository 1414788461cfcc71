pub mod form;
pub mod text;
