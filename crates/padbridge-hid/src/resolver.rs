//! Owner lookup.
//!
//! The owner is resolved fresh on every call: follow the provider link,
//! upgrade it, and check that the parent really is the expected peripheral
//! type. Any failure along the way reads as "no owner".

use std::any::Any;
use std::sync::Arc;

use crate::tree::{ProviderLink, Service};

/// Resolve the link's provider as a `P`.
///
/// Returns `None` when nothing is attached, the provider has been dropped,
/// the link is being rewritten, or the provider is some other node type.
pub fn resolve_owner<P>(link: &ProviderLink) -> Option<Arc<P>>
where
    P: Any + Send + Sync,
{
    link.provider()?.into_any().downcast::<P>().ok()
}

/// Whether `provider` is a `P`.
pub fn provider_is<P>(provider: &Arc<dyn Service>) -> bool
where
    P: Any + Send + Sync,
{
    Arc::clone(provider).into_any().is::<P>()
}
