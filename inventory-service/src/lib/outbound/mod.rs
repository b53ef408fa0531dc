pub mod catalog;
pub mod repositories;
