//! Language abstraction layer.
//!
//! Provides a unified interface over the supported tree-sitter grammars via
//! the [`Language`] trait. The scoring engine dispatches on C-family node
//! kinds, so only the C and C++ grammars are registered.

pub mod registry;
pub mod traits;

// Language implementations
pub mod c;
pub mod cpp;

// Re-exports for the crate's public API (used by lib.rs)
pub use registry::LanguageRegistry;
pub use traits::{BoxedLanguage, Language};
