//! The [`Language`] trait implemented by each supported grammar.

use tree_sitter::Parser;

use crate::error::{CogError, Result};

/// A supported source language backed by a tree-sitter grammar.
pub trait Language: Send + Sync {
    /// Canonical language name (e.g. "c").
    fn name(&self) -> &'static str;

    /// File extensions claimed by this language, dot included (e.g. ".c").
    fn extensions(&self) -> &'static [&'static str];

    /// The tree-sitter grammar for this language.
    fn grammar(&self) -> tree_sitter::Language;

    /// Build a parser configured for this language.
    fn parser(&self) -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.grammar())
            .map_err(|e| CogError::TreeSitter(e.to_string()))?;
        Ok(parser)
    }
}

/// Boxed trait object stored in the registry.
pub type BoxedLanguage = Box<dyn Language>;
