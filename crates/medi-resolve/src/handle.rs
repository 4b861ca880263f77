//! Shared catalog handle with atomic snapshot swap.
//!
//! The request path never holds a lock across a scan: it takes an `Arc`
//! snapshot up front and resolves against that. `reload` swaps the pointer,
//! so in-flight requests finish on the catalog they started with.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Process-wide handle to the current instruction catalog.
#[derive(Debug)]
pub struct CatalogHandle {
    inner: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    /// Wrap a loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Take a consistent snapshot for one pipeline invocation.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a replacement catalog. In-flight snapshots are unaffected.
    pub fn reload(&self, catalog: Catalog) {
        let entries = catalog.len();
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(catalog);
        tracing::info!(entries, "instruction catalog reloaded");
    }

    /// Reload from an operator-supplied catalog file.
    ///
    /// The current catalog stays in place if loading fails.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] from reading, parsing, or validating the
    /// file; the swap only happens on success.
    pub fn reload_from(&self, path: &Path) -> Result<(), CatalogError> {
        let catalog = Catalog::load(path)?;
        self.reload(catalog);
        Ok(())
    }
}
