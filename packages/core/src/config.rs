//! Evaluation configuration
//!
//! An immutable set of named options plus the provider handles, passed
//! by reference through every evaluation. Built once via the builder;
//! never mutated mid-evaluation.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::provider::{
    DocumentProvider, MappingProvider, SerdeDocumentProvider, SerdeMappingProvider,
};

/// Named evaluation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigOption {
    /// Return a list even when the path is definite
    AlwaysReturnList,
    /// Read operations return canonical paths instead of values
    AsPathList,
    /// Downgrade recoverable not-found failures to empty results
    SuppressExceptions,
    /// Fail when a property referenced by the path is missing
    RequireProperties,
    /// A missing optional leaf property resolves to null instead of no result
    DefaultPathLeafToNull,
}

/// Immutable evaluation configuration
#[derive(Clone)]
pub struct Configuration {
    options: HashSet<ConfigOption>,
    document_provider: Arc<dyn DocumentProvider>,
    mapping_provider: Arc<dyn MappingProvider>,
}

impl Configuration {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Whether an option is active
    #[inline]
    #[must_use]
    pub fn contains(&self, option: ConfigOption) -> bool {
        self.options.contains(&option)
    }

    /// The active document provider
    #[inline]
    #[must_use]
    pub fn document_provider(&self) -> &dyn DocumentProvider {
        self.document_provider.as_ref()
    }

    /// The active mapping provider
    #[inline]
    #[must_use]
    pub fn mapping_provider(&self) -> &dyn MappingProvider {
        self.mapping_provider.as_ref()
    }

    /// Copy of this configuration with one extra option enabled
    #[must_use]
    pub fn with_option(&self, option: ConfigOption) -> Self {
        let mut options = self.options.clone();
        options.insert(option);
        Self {
            options,
            document_provider: Arc::clone(&self.document_provider),
            mapping_provider: Arc::clone(&self.mapping_provider),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        ConfigurationBuilder::new().build()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for `Configuration`
pub struct ConfigurationBuilder {
    options: HashSet<ConfigOption>,
    document_provider: Arc<dyn DocumentProvider>,
    mapping_provider: Arc<dyn MappingProvider>,
}

impl ConfigurationBuilder {
    /// New builder with default providers and no options
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: HashSet::new(),
            document_provider: Arc::new(SerdeDocumentProvider),
            mapping_provider: Arc::new(SerdeMappingProvider),
        }
    }

    /// Enable one option
    #[must_use]
    pub fn option(mut self, option: ConfigOption) -> Self {
        self.options.insert(option);
        self
    }

    /// Enable several options
    #[must_use]
    pub fn options<I: IntoIterator<Item = ConfigOption>>(mut self, options: I) -> Self {
        self.options.extend(options);
        self
    }

    /// Use a custom document provider
    #[must_use]
    pub fn document_provider(mut self, provider: Arc<dyn DocumentProvider>) -> Self {
        self.document_provider = provider;
        self
    }

    /// Use a custom mapping provider
    #[must_use]
    pub fn mapping_provider(mut self, provider: Arc<dyn MappingProvider>) -> Self {
        self.mapping_provider = provider;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Configuration {
        Configuration {
            options: self.options,
            document_provider: self.document_provider,
            mapping_provider: self.mapping_provider,
        }
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
