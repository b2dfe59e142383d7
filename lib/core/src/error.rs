//! Error handling foundation for creator-boost.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own error contexts in its own error module and
//! uses rootcause's `.context()` to add layer-appropriate context as errors
//! propagate from the remote backend up to the caller.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
///
/// `C` is the context type of the outermost layer. Each layer adds its own
/// context via `.context()` as errors propagate.
pub type Result<T, C> = std::result::Result<T, Report<C>>;
