//! Data handed to the presentation layer.

pub mod list;
