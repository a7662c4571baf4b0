//! Domain types shared by the query engine and the outer layers.

pub mod filter;
pub mod query;
pub mod record;
pub mod types;
