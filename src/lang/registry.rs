//! Language registry for extension-to-language mapping.
//!
//! Provides a singleton registry that maps file extensions and names to
//! their corresponding [`Language`] implementations.
//!
//! # Aliases
//!
//! The registry supports language name aliases for CLI convenience, so
//! callers using `get_by_name("c++")` get the C++ handler.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::lang::traits::{BoxedLanguage, Language};
use crate::lang::{c, cpp};

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

/// Registry mapping file extensions to language implementations.
///
/// The registry maintains three mappings:
/// - `by_name`: Language name to implementation (e.g., "cpp" -> Cpp)
/// - `by_ext`: File extension to language name (e.g., ".cc" -> "cpp")
/// - `aliases`: Alternative names to canonical names (e.g., "c++" -> "cpp")
pub struct LanguageRegistry {
    by_name: HashMap<&'static str, BoxedLanguage>,
    by_ext: HashMap<&'static str, &'static str>,
    aliases: HashMap<&'static str, &'static str>,
}

impl LanguageRegistry {
    /// Get the global language registry singleton.
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::new)
    }

    /// Create a new registry with all supported languages.
    fn new() -> Self {
        let mut registry = Self {
            by_name: HashMap::new(),
            by_ext: HashMap::new(),
            aliases: HashMap::new(),
        };

        registry.register(Box::new(c::C));
        registry.register(Box::new(cpp::Cpp));

        registry.register_alias("c++", "cpp");
        registry.register_alias("cxx", "cpp");

        registry
    }

    /// Register an alias for a language name.
    fn register_alias(&mut self, alias: &'static str, target: &'static str) {
        self.aliases.insert(alias, target);
    }

    /// Register a language implementation.
    fn register(&mut self, lang: BoxedLanguage) {
        let name = lang.name();
        for ext in lang.extensions() {
            self.by_ext.insert(*ext, name);
        }
        self.by_name.insert(name, lang);
    }

    /// Get a language by name (e.g., "c").
    ///
    /// Aliases are resolved first, so `get_by_name("c++")` returns the
    /// C++ handler.
    pub fn get_by_name(&self, name: &str) -> Option<&dyn Language> {
        let canonical_name = self.aliases.get(name).copied().unwrap_or(name);
        self.by_name.get(canonical_name).map(|b| b.as_ref())
    }

    /// Get a language by file extension (e.g., ".c").
    pub fn get_by_extension(&self, ext: &str) -> Option<&dyn Language> {
        self.by_ext.get(ext).and_then(|name| self.get_by_name(name))
    }

    /// Auto-detect language from file path extension.
    pub fn detect_language(&self, path: &Path) -> Option<&dyn Language> {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| format!(".{}", ext))
            .and_then(|ext| self.get_by_extension(&ext))
    }

    /// List all canonical language names (excludes aliases).
    pub fn supported_languages(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Check if a language name is supported (including aliases).
    pub fn is_supported(&self, name: &str) -> bool {
        self.by_name.contains_key(name) || self.aliases.contains_key(name)
    }
}
