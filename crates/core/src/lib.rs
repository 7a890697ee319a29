//! Core domain types and storage contract for the todoman project.
//!
//! This crate is pure: domain entities, request payloads, the `ListStore`
//! trait and its error taxonomy, and the key-schema helpers that map lists
//! and items onto a flat key-value namespace. No I/O happens here; backends
//! live in the `todoman` crate.

pub mod storage;
pub mod todo;
