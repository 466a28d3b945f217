//! Device-tree nodes and the provider link.
//!
//! A facade sits below the peripheral that owns it. The edge up to that
//! parent is a `Weak` reference: the facade never keeps its owner alive, and
//! the owner may be torn down at any time by the lifecycle code.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::debug;

/// Type-erasure hook so a tree node can be checked against a concrete type.
///
/// Implemented for every `Send + Sync + 'static` type; never implement it
/// by hand.
pub trait AsAny: Any + Send + Sync {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A node in the device tree.
pub trait Service: AsAny {
    /// Short node name used in diagnostics.
    fn name(&self) -> &str;
}

/// Non-owning edge from a facade to its provider.
///
/// Written only by the lifecycle collaborator (`attach` during start,
/// `detach` during teardown). Readers use [`ProviderLink::provider`], which
/// never blocks.
#[derive(Default)]
pub struct ProviderLink {
    parent: RwLock<Option<Weak<dyn Service>>>,
}

impl ProviderLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the link at `provider`, replacing any previous parent.
    pub fn attach(&self, provider: &Arc<dyn Service>) {
        debug!(provider = provider.name(), "provider link attached");
        *self.parent.write() = Some(Arc::downgrade(provider));
    }

    /// Clear the link. Subsequent lookups see no provider.
    pub fn detach(&self) {
        if self.parent.write().take().is_some() {
            debug!("provider link detached");
        }
    }

    /// Current provider, if one is attached and still alive.
    ///
    /// Returns `None` instead of waiting when the link is being rewritten.
    pub fn provider(&self) -> Option<Arc<dyn Service>> {
        let guard = self.parent.try_read()?;
        guard.as_ref()?.upgrade()
    }

    /// Whether a parent has been recorded, alive or not.
    ///
    /// Like [`provider`](Self::provider) this never waits: while a writer
    /// holds the link it reports `false`.
    pub fn is_linked(&self) -> bool {
        self.parent.try_read().is_some_and(|guard| guard.is_some())
    }
}

impl fmt::Debug for ProviderLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let provider = self.provider();
        f.debug_struct("ProviderLink")
            .field("provider", &provider.as_ref().map(|p| p.name()))
            .finish()
    }
}
