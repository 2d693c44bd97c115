pub mod catalog;
pub mod module;
