//! C++ language support.
//!
//! The C++ grammar shares the C statement node kinds the scoring engine
//! dispatches on, and adds `catch_clause` for exception handlers.

use crate::lang::traits::Language;

/// C++ language implementation.
pub struct Cpp;

impl Language for Cpp {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_cpp::LANGUAGE.into()
    }
}
