//! Method and field descriptors
//!
//! Immutable-after-construction values describing one member of a class.
//! Names and signatures are opaque strings following the foreign
//! interface's own textual encoding; the core compares them by exact byte
//! equality and never interprets them.

/// Whether a method descriptor names an instance method or a static/free
/// function.
///
/// Instance methods require a constructible class: they cannot exist on an
/// arbitrary (metadata-only) descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Dispatched on an object instance
    Instance,
    /// Static or free function — no receiver
    Static,
}

/// Descriptor for one method: name, signature, and dispatch kind.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: String,
    signature: String,
    kind: MethodKind,
}

impl MethodDescriptor {
    /// Create a method descriptor
    pub fn new(kind: MethodKind, name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            kind,
        }
    }

    /// Create an instance-method descriptor
    pub fn instance(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::new(MethodKind::Instance, name, signature)
    }

    /// Create a static/free-function descriptor
    pub fn static_method(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::new(MethodKind::Static, name, signature)
    }

    /// Get the method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the signature string
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Get the dispatch kind
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Duplicate-classification predicate: compares descriptor kind only,
    /// not name or signature. Registration combines this with exact name
    /// and signature equality to decide whether a candidate collides with
    /// an existing entry.
    pub fn kind_eq(&self, other: &MethodDescriptor) -> bool {
        self.kind == other.kind
    }
}

/// Descriptor for one field: name and signature.
///
/// Fields carry no kind tag, so their duplicate classification is
/// name+signature only.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    signature: String,
}

impl FieldDescriptor {
    /// Create a field descriptor
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }

    /// Get the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the signature string
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_descriptor_accessors() {
        let m = MethodDescriptor::instance("toString", "()Ljava/lang/String;");
        assert_eq!(m.name(), "toString");
        assert_eq!(m.signature(), "()Ljava/lang/String;");
        assert_eq!(m.kind(), MethodKind::Instance);
    }

    #[test]
    fn test_kind_eq_ignores_name_and_signature() {
        let a = MethodDescriptor::static_method("a", "()V");
        let b = MethodDescriptor::static_method("b", "(I)I");
        let c = MethodDescriptor::instance("a", "()V");

        assert!(a.kind_eq(&b));
        assert!(!a.kind_eq(&c));
    }

    #[test]
    fn test_field_descriptor_accessors() {
        let f = FieldDescriptor::new("count", "I");
        assert_eq!(f.name(), "count");
        assert_eq!(f.signature(), "I");
    }
}
