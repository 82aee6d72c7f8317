//! VmContext trait — the VM-environment boundary
//!
//! Instantiation strategies receive a `&dyn VmContext` as their runtime
//! handle. The surrounding VM environment (class table, bootstrapping,
//! embedder entry points) stays behind this trait; strategies never depend
//! on its internals.

use std::sync::Arc;

use crate::class::ClassDescriptor;

/// Abstract handle to the VM environment.
///
/// The concrete implementation lives in the runtime crate; the core only
/// routes this handle into instantiation strategies verbatim.
pub trait VmContext: Send + Sync {
    /// Resolve a class descriptor by its binary name
    /// (e.g. `"java/lang/Object"`).
    fn find_class(&self, name: &str) -> Option<Arc<ClassDescriptor>>;
}

/// A context that resolves nothing.
///
/// For strategies that need no environment, and for tests.
pub struct NullVmContext;

impl VmContext for NullVmContext {
    fn find_class(&self, _name: &str) -> Option<Arc<ClassDescriptor>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_context_resolves_nothing() {
        let ctx = NullVmContext;
        assert!(ctx.find_class("java/lang/Object").is_none());
    }
}
