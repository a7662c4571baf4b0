//! Client-side list management for HR/ERP administrative screens.
//!
//! Screens fetch a record collection (employees, branches, transfers, ...)
//! from a backend and then narrow it locally: free-text search over declared
//! fields, discrete field filters, and pagination. The [`engine`] module holds
//! the pure query functions; [`screen::ListScreen`] keeps one screen's state
//! between interactions.
//!
//! With the `server` feature the crate also parses query strings into
//! [`domain::query::QueryState`], imports CSV uploads, loads paging settings
//! and wires these together in [`services`].

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod engine;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod screen;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod services;

/// Page size used when a screen does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest page size a request may ask for.
pub const MAX_PAGE_SIZE: usize = 500;

#[cfg(feature = "data")]
pub use engine::{ListQueryEngine, apply_filters, apply_search, paginate, query};
