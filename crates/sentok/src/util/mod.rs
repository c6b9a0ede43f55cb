//! # Utilities

pub mod lookup_list;
pub mod validators;

pub use lookup_list::LookupList;
