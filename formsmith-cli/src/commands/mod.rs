//! Command implementations

pub mod fields;
pub mod generate;
pub mod label;
