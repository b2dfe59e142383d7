//! Core types and utilities shared by the creator-boost crates.
//!
//! This crate provides the error handling foundation and the typed
//! identifiers used to tag remote invocations.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::InvocationId;
