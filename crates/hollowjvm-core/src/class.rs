//! Class descriptors: member registries and instantiation dispatch
//!
//! A `ClassDescriptor` models one runtime class: its binary name, modifier
//! bitmask, superclass, the registries of method and field descriptors
//! attached to it, and the dispatch path that turns a constructor
//! signature plus arguments into a live object.
//!
//! Descriptors come in two shapes. Native-backed descriptors carry real
//! instantiation strategies supplied by the binding layer. Arbitrary
//! descriptors model classes known only by metadata — no native backing
//! exists, so they support reflection-shaped queries and can serve as
//! superclass targets, but instantiating one (or registering an instance
//! method on one) is a structural contract violation and aborts with a
//! panic.

use std::any::Any;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::context::VmContext;
use crate::member::{FieldDescriptor, MethodDescriptor, MethodKind};
use crate::object::{class_class, object_class, RuntimeObject};
use crate::table::MemberTable;
use crate::value::{JValue, VaArgs};

/// JVM-style access-flag constants.
///
/// The bitmask is opaque to this core beyond storage; these are the
/// conventional values for callers that want them.
pub mod modifiers {
    /// Accessible outside its package
    pub const PUBLIC: u32 = 0x0001;
    /// Accessible only within its class
    pub const PRIVATE: u32 = 0x0002;
    /// Accessible within its package and subclasses
    pub const PROTECTED: u32 = 0x0004;
    /// Class-level, not instance-level
    pub const STATIC: u32 = 0x0008;
    /// No subclasses permitted
    pub const FINAL: u32 = 0x0010;
    /// Declared abstract
    pub const ABSTRACT: u32 = 0x0400;
}

/// Variadic-list instantiation strategy.
///
/// Receives the VM-environment handle, the requested constructor signature
/// verbatim, and a sequential argument cursor. Runs to completion or
/// raises a fatal failure (panic) on the calling thread.
pub type ConstructVaFn =
    Arc<dyn Fn(&dyn VmContext, &str, &mut VaArgs) -> Arc<dyn RuntimeObject> + Send + Sync>;

/// Tagged-union-array instantiation strategy.
///
/// Same contract as [`ConstructVaFn`], with a fixed-layout argument slice
/// instead of a cursor.
pub type ConstructValuesFn =
    Arc<dyn Fn(&dyn VmContext, &str, &[JValue]) -> Arc<dyn RuntimeObject> + Send + Sync>;

/// Constructibility of a class, as a type-level fact.
///
/// Arbitrary classes are `Unbacked` at construction time and can never
/// gain strategies afterwards.
enum Constructor {
    /// Metadata-only class; instantiation is a contract violation
    Unbacked,
    /// Native-backed class with its two installed strategies
    Backed {
        variadic: ConstructVaFn,
        values: ConstructValuesFn,
    },
}

/// Descriptor for one runtime class.
///
/// # Thread safety
///
/// The member registries are internally synchronized: registration,
/// unregistration and lookup all take `&self` and may be interleaved
/// freely across threads. Registration order is the order `register_*`
/// calls complete.
pub struct ClassDescriptor {
    name: String,
    modifiers: u32,
    /// `None` means "the root object descriptor" — the accessor
    /// substitutes the singleton, so the superclass is never absent at
    /// the API.
    superclass: Option<Arc<ClassDescriptor>>,
    constructor: Constructor,
    methods: RwLock<MemberTable<MethodDescriptor>>,
    fields: RwLock<MemberTable<FieldDescriptor>>,
}

impl ClassDescriptor {
    fn build(
        name: impl Into<String>,
        modifiers: u32,
        superclass: Option<Arc<ClassDescriptor>>,
        constructor: Constructor,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            modifiers,
            superclass,
            constructor,
            methods: RwLock::new(MemberTable::new()),
            fields: RwLock::new(MemberTable::new()),
        })
    }

    /// Create an arbitrary descriptor: a class known only by name and
    /// modifiers, with no native backing.
    ///
    /// The superclass defaults to the root object descriptor and both
    /// instantiation entry points fail fatally, permanently.
    pub fn arbitrary(name: impl Into<String>, modifiers: u32) -> Arc<Self> {
        Self::build(name, modifiers, None, Constructor::Unbacked)
    }

    /// Create a native-backed descriptor with the root object descriptor
    /// as superclass.
    pub fn native(
        name: impl Into<String>,
        modifiers: u32,
        variadic: ConstructVaFn,
        values: ConstructValuesFn,
    ) -> Arc<Self> {
        Self::build(name, modifiers, None, Constructor::Backed { variadic, values })
    }

    /// Create a native-backed descriptor with an explicit superclass.
    pub fn native_with_superclass(
        name: impl Into<String>,
        modifiers: u32,
        variadic: ConstructVaFn,
        values: ConstructValuesFn,
        superclass: Arc<ClassDescriptor>,
    ) -> Arc<Self> {
        Self::build(
            name,
            modifiers,
            Some(superclass),
            Constructor::Backed { variadic, values },
        )
    }

    /// Get the immutable binary name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the modifier bitmask
    pub fn modifiers(&self) -> u32 {
        self.modifiers
    }

    /// Whether this class exists only as metadata, with no native backing
    pub fn is_arbitrary(&self) -> bool {
        matches!(self.constructor, Constructor::Unbacked)
    }

    /// Get the superclass descriptor.
    ///
    /// Defaults to the root object descriptor when none was supplied at
    /// construction; the root object descriptor is its own superclass.
    pub fn superclass(&self) -> Arc<ClassDescriptor> {
        match &self.superclass {
            Some(superclass) => Arc::clone(superclass),
            None => object_class(),
        }
    }

    // ========================================================================
    // Method registry
    // ========================================================================

    /// Register a method descriptor, taking shared ownership.
    ///
    /// Returns `false` without mutating the registry if an existing entry
    /// collides — same kind classification, same name, and same signature.
    /// Identical pairs must resolve to one unambiguous member; silently
    /// overwriting would hide an API mistake, so registration rejects
    /// rather than replaces.
    ///
    /// # Panics
    ///
    /// If this class is arbitrary and `method` is instance-kind: instance
    /// state cannot exist without a constructible class. This is a
    /// misconfigured binding layer, not an expected runtime condition.
    pub fn register_method(&self, method: Arc<MethodDescriptor>) -> bool {
        if self.is_arbitrary() && method.kind() == MethodKind::Instance {
            panic!(
                "cannot register instance method `{}` on arbitrary class `{}`: \
                 the class cannot be instantiated",
                method.name(),
                self.name
            );
        }
        let mut methods = self.methods.write();
        let duplicate = methods.iter().any(|existing| {
            existing.kind_eq(&method)
                && existing.name() == method.name()
                && existing.signature() == method.signature()
        });
        if duplicate {
            return false;
        }
        methods.push(method);
        true
    }

    /// Remove a method by pointer identity, not by name/signature.
    ///
    /// Returns whether an entry was found; absence is an expected outcome.
    pub fn unregister_method(&self, method: &Arc<MethodDescriptor>) -> bool {
        self.methods.write().remove_by_identity(method)
    }

    /// Look up a method by exact signature and name.
    ///
    /// Linear scan in registration order. Duplicates are rejected at
    /// registration, so at most one entry can ever match.
    pub fn method(&self, signature: &str, name: &str) -> Option<Arc<MethodDescriptor>> {
        self.methods
            .read()
            .iter()
            .find(|m| m.name() == name && m.signature() == signature)
            .cloned()
    }

    /// Enumerate registered methods, in registration order
    pub fn methods(&self) -> Vec<Arc<MethodDescriptor>> {
        self.methods.read().snapshot()
    }

    // ========================================================================
    // Field registry
    // ========================================================================

    /// Register a field descriptor, taking shared ownership.
    ///
    /// Duplicate classification is name+signature only (fields carry no
    /// kind tag), and there is no arbitrary-class restriction: instance
    /// fields are permitted even on non-constructible descriptors, to
    /// model statically-known layouts.
    pub fn register_field(&self, field: Arc<FieldDescriptor>) -> bool {
        let mut fields = self.fields.write();
        let duplicate = fields.iter().any(|existing| {
            existing.name() == field.name() && existing.signature() == field.signature()
        });
        if duplicate {
            return false;
        }
        fields.push(field);
        true
    }

    /// Remove a field by pointer identity; returns whether one was found
    pub fn unregister_field(&self, field: &Arc<FieldDescriptor>) -> bool {
        self.fields.write().remove_by_identity(field)
    }

    /// Look up a field by name alone, ignoring signature.
    ///
    /// Returns the first entry in registration order whose name matches —
    /// for callers that expect a unique-by-name field and have no
    /// signature available. When several fields share a name this can
    /// return a different, earlier-registered entry than
    /// [`ClassDescriptor::field`].
    pub fn field_by_name(&self, name: &str) -> Option<Arc<FieldDescriptor>> {
        self.fields
            .read()
            .iter()
            .find(|f| f.name() == name)
            .cloned()
    }

    /// Look up a field by exact signature and name.
    ///
    /// Disambiguates fields whose name alone is not unique across
    /// redeclaration in subclassing scenarios.
    pub fn field(&self, signature: &str, name: &str) -> Option<Arc<FieldDescriptor>> {
        self.fields
            .read()
            .iter()
            .find(|f| f.signature() == signature && f.name() == name)
            .cloned()
    }

    /// Enumerate registered fields, in registration order
    pub fn fields(&self) -> Vec<Arc<FieldDescriptor>> {
        self.fields.read().snapshot()
    }

    // ========================================================================
    // Instantiation dispatch
    // ========================================================================

    /// Create an instance via the variadic-list strategy.
    ///
    /// The signature string is passed to the strategy verbatim; the
    /// strategy interprets it to select among overloaded constructors.
    ///
    /// # Panics
    ///
    /// If this class is arbitrary — it has no native backing.
    pub fn new_instance_va(
        &self,
        ctx: &dyn VmContext,
        signature: &str,
        args: &mut VaArgs,
    ) -> Arc<dyn RuntimeObject> {
        match &self.constructor {
            Constructor::Backed { variadic, .. } => variadic(ctx, signature, args),
            Constructor::Unbacked => self.panic_unbacked(),
        }
    }

    /// Create an instance via the tagged-union-array strategy.
    ///
    /// # Panics
    ///
    /// If this class is arbitrary — it has no native backing.
    pub fn new_instance(
        &self,
        ctx: &dyn VmContext,
        signature: &str,
        args: &[JValue],
    ) -> Arc<dyn RuntimeObject> {
        match &self.constructor {
            Constructor::Backed { values, .. } => values(ctx, signature, args),
            Constructor::Unbacked => self.panic_unbacked(),
        }
    }

    fn panic_unbacked(&self) -> ! {
        panic!(
            "cannot construct arbitrary class `{}`: it has no native backing",
            self.name
        )
    }
}

impl std::fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .field("modifiers", &self.modifiers)
            .field("arbitrary", &self.is_arbitrary())
            .field("methods", &self.methods.read().len())
            .field("fields", &self.fields.read().len())
            .finish()
    }
}

/// Descriptors are themselves runtime objects; their class is the
/// canonical `java/lang/Class` descriptor.
impl RuntimeObject for ClassDescriptor {
    fn class(&self) -> Arc<ClassDescriptor> {
        class_class()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NullVmContext;
    use crate::object::PlainObject;

    fn plain_strategy_va() -> ConstructVaFn {
        Arc::new(|_ctx, _sig, _args| Arc::new(PlainObject::new()) as Arc<dyn RuntimeObject>)
    }

    fn plain_strategy_values() -> ConstructValuesFn {
        Arc::new(|_ctx, _sig, _args| Arc::new(PlainObject::new()) as Arc<dyn RuntimeObject>)
    }

    fn native_class(name: &str) -> Arc<ClassDescriptor> {
        ClassDescriptor::native(
            name,
            modifiers::PUBLIC,
            plain_strategy_va(),
            plain_strategy_values(),
        )
    }

    #[test]
    fn test_duplicate_method_rejected() {
        let class = native_class("com/example/Widget");
        let m1 = Arc::new(MethodDescriptor::instance("frob", "(I)V"));
        let m2 = Arc::new(MethodDescriptor::instance("frob", "(I)V"));

        assert!(class.register_method(m1.clone()));
        assert!(!class.register_method(m2));

        // Registry retains only the first registration
        let methods = class.methods();
        assert_eq!(methods.len(), 1);
        assert!(Arc::ptr_eq(&methods[0], &m1));
    }

    #[test]
    fn test_same_name_signature_different_kind_both_register() {
        // The duplicate check is kind-equality AND name AND signature;
        // diverging on kind alone is not a collision.
        let class = native_class("com/example/Widget");
        let inst = Arc::new(MethodDescriptor::instance("of", "()V"));
        let stat = Arc::new(MethodDescriptor::static_method("of", "()V"));

        assert!(class.register_method(inst));
        assert!(class.register_method(stat));
        assert_eq!(class.methods().len(), 2);
    }

    #[test]
    #[should_panic(expected = "cannot register instance method")]
    fn test_instance_method_on_arbitrary_class_is_fatal() {
        let class = ClassDescriptor::arbitrary("com/example/Ghost", modifiers::PUBLIC);
        class.register_method(Arc::new(MethodDescriptor::instance("haunt", "()V")));
    }

    #[test]
    fn test_static_method_on_arbitrary_class_is_allowed() {
        let class = ClassDescriptor::arbitrary("com/example/Ghost", modifiers::PUBLIC);
        let m = Arc::new(MethodDescriptor::static_method("summon", "()V"));
        assert!(class.register_method(m.clone()));
        assert!(class.method("()V", "summon").is_some());
    }

    #[test]
    #[should_panic(expected = "no native backing")]
    fn test_arbitrary_class_variadic_instantiation_is_fatal() {
        let class = ClassDescriptor::arbitrary("com/example/Ghost", modifiers::PUBLIC);
        class.new_instance_va(&NullVmContext, "()V", &mut VaArgs::new(Vec::new()));
    }

    #[test]
    #[should_panic(expected = "no native backing")]
    fn test_arbitrary_class_values_instantiation_is_fatal() {
        let class = ClassDescriptor::arbitrary("com/example/Ghost", modifiers::PUBLIC);
        class.new_instance(&NullVmContext, "(I)V", &[JValue::Int(1)]);
    }

    #[test]
    fn test_method_lookup_and_identity_unregistration() {
        let class = native_class("com/example/Widget");
        let m = Arc::new(MethodDescriptor::instance("frob", "(I)V"));
        class.register_method(m.clone());

        // Exact registered handle comes back
        let found = class.method("(I)V", "frob").unwrap();
        assert!(Arc::ptr_eq(&found, &m));

        // Misses yield None, not errors
        assert!(class.method("(J)V", "frob").is_none());
        assert!(class.method("(I)V", "defrob").is_none());

        assert!(class.unregister_method(&m));
        assert!(class.method("(I)V", "frob").is_none());
        assert!(!class.unregister_method(&m));
    }

    #[test]
    fn test_field_lookup_policies_diverge() {
        let class = native_class("com/example/Widget");
        let f1 = Arc::new(FieldDescriptor::new("x", "I"));
        let f2 = Arc::new(FieldDescriptor::new("x", "J"));
        assert!(class.register_field(f1.clone()));
        assert!(class.register_field(f2.clone()));

        // Name-only lookup returns the earlier registration
        assert!(Arc::ptr_eq(&class.field_by_name("x").unwrap(), &f1));
        // Signature+name lookup disambiguates
        assert!(Arc::ptr_eq(&class.field("J", "x").unwrap(), &f2));
        assert!(Arc::ptr_eq(&class.field("I", "x").unwrap(), &f1));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let class = native_class("com/example/Widget");
        let f1 = Arc::new(FieldDescriptor::new("count", "I"));
        let f2 = Arc::new(FieldDescriptor::new("count", "I"));

        assert!(class.register_field(f1.clone()));
        assert!(!class.register_field(f2));
        assert_eq!(class.fields().len(), 1);

        // Same name under a different signature is not a duplicate
        assert!(class.register_field(Arc::new(FieldDescriptor::new("count", "J"))));
        assert_eq!(class.fields().len(), 2);
    }

    #[test]
    fn test_fields_allowed_on_arbitrary_class() {
        let class = ClassDescriptor::arbitrary("com/example/Ghost", modifiers::PUBLIC);
        let f = Arc::new(FieldDescriptor::new("ectoplasm", "D"));
        assert!(class.register_field(f.clone()));
        assert!(Arc::ptr_eq(&class.field_by_name("ectoplasm").unwrap(), &f));
    }

    #[test]
    fn test_enumeration_reflects_registration_order() {
        let class = native_class("com/example/Widget");
        let m1 = Arc::new(MethodDescriptor::instance("a", "()V"));
        let m2 = Arc::new(MethodDescriptor::instance("b", "()V"));
        let m3 = Arc::new(MethodDescriptor::instance("c", "()V"));

        class.register_method(m1.clone());
        class.register_method(m2.clone());
        class.register_method(m3.clone());
        // Duplicate does not count toward the length
        assert!(!class.register_method(Arc::new(MethodDescriptor::instance("b", "()V"))));

        let methods = class.methods();
        assert_eq!(methods.len(), 3);
        assert!(Arc::ptr_eq(&methods[0], &m1));
        assert!(Arc::ptr_eq(&methods[1], &m2));
        assert!(Arc::ptr_eq(&methods[2], &m3));

        assert!(class.unregister_method(&m2));
        let methods = class.methods();
        assert_eq!(methods.len(), 2);
        assert!(Arc::ptr_eq(&methods[0], &m1));
        assert!(Arc::ptr_eq(&methods[1], &m3));
    }

    #[test]
    fn test_default_superclass_is_root() {
        let class = native_class("com/example/Widget");
        assert!(Arc::ptr_eq(&class.superclass(), &object_class()));

        let arbitrary = ClassDescriptor::arbitrary("com/example/Ghost", modifiers::PUBLIC);
        assert!(Arc::ptr_eq(&arbitrary.superclass(), &object_class()));
    }

    #[test]
    fn test_explicit_superclass_is_reported() {
        let base = native_class("com/example/Base");
        let derived = ClassDescriptor::native_with_superclass(
            "com/example/Derived",
            modifiers::PUBLIC | modifiers::FINAL,
            plain_strategy_va(),
            plain_strategy_values(),
            base.clone(),
        );
        assert!(Arc::ptr_eq(&derived.superclass(), &base));
        assert_eq!(derived.modifiers(), modifiers::PUBLIC | modifiers::FINAL);
    }

    #[test]
    fn test_instantiation_routes_signature_and_args_verbatim() {
        let variadic: ConstructVaFn = Arc::new(|_ctx, sig, args| {
            assert_eq!(sig, "(IJ)V");
            assert_eq!(args.next().unwrap().as_int(), Some(4));
            assert_eq!(args.next().unwrap().as_long(), Some(5));
            assert!(args.next().is_none());
            Arc::new(PlainObject::new()) as Arc<dyn RuntimeObject>
        });
        let values: ConstructValuesFn = Arc::new(|_ctx, sig, args| {
            assert_eq!(sig, "(D)V");
            assert_eq!(args.len(), 1);
            assert!((args[0].as_double().unwrap() - 1.5).abs() < 1e-12);
            Arc::new(PlainObject::new()) as Arc<dyn RuntimeObject>
        });
        let class = ClassDescriptor::native("com/example/Widget", modifiers::PUBLIC, variadic, values);

        let ctx = NullVmContext;
        let mut va = VaArgs::from(vec![JValue::Int(4), JValue::Long(5)]);
        class.new_instance_va(&ctx, "(IJ)V", &mut va);
        class.new_instance(&ctx, "(D)V", &[JValue::Double(1.5)]);
    }

    #[test]
    fn test_descriptor_is_itself_a_runtime_object() {
        let class = native_class("com/example/Widget");
        assert!(Arc::ptr_eq(&RuntimeObject::class(&*class), &class_class()));
    }

    #[test]
    fn test_name_and_arbitrary_flag() {
        let class = ClassDescriptor::arbitrary("com/example/Ghost", modifiers::PUBLIC);
        assert_eq!(class.name(), "com/example/Ghost");
        assert!(class.is_arbitrary());
        assert!(!native_class("com/example/Widget").is_arbitrary());
    }
}
