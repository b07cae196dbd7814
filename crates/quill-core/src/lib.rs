//! Core types and trait definitions for the Quill note store.
//!
//! This crate is deliberately free of database dependencies. The storage
//! backend and the presentation layer both depend on it.

pub mod error;
pub mod note;
pub mod store;

pub use error::{Error, Result, ValidationError};
