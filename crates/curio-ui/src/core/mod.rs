//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod listing;
pub mod pagination;
pub mod query;
