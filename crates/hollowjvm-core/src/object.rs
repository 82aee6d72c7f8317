//! Runtime object root and canonical descriptors
//!
//! Every emulated object — class descriptors included — derives from the
//! `RuntimeObject` root and carries a back-reference to the descriptor
//! that describes it. The reflective loop is one level deep and fixed:
//! descriptors are objects whose class is the canonical `java/lang/Class`
//! descriptor, and the root object descriptor is its own superclass. No
//! general circular object graph exists.

use std::any::Any;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::class::{modifiers, ClassDescriptor, ConstructValuesFn, ConstructVaFn};

/// The polymorphic base every emulated object derives from.
///
/// Every instance knows the class descriptor that produced it.
pub trait RuntimeObject: Any + Send + Sync {
    /// The descriptor describing this object's class
    fn class(&self) -> Arc<ClassDescriptor>;

    /// Upcast for downcasting to the concrete native type
    fn as_any(&self) -> &dyn Any;
}

/// Fieldless base instance — what `java/lang/Object` constructs.
#[derive(Debug, Default)]
pub struct PlainObject;

impl PlainObject {
    /// Create a plain base object
    pub fn new() -> Self {
        Self
    }
}

impl RuntimeObject for PlainObject {
    fn class(&self) -> Arc<ClassDescriptor> {
        object_class()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Canonical descriptor for `java/lang/Object`.
///
/// Its superclass is itself: the accessor substitutes the root singleton
/// whenever a descriptor was built without an explicit superclass, and the
/// root is no exception.
static OBJECT_CLASS: Lazy<Arc<ClassDescriptor>> = Lazy::new(|| {
    let variadic: ConstructVaFn =
        Arc::new(|_ctx, _sig, _args| Arc::new(PlainObject::new()) as Arc<dyn RuntimeObject>);
    let values: ConstructValuesFn =
        Arc::new(|_ctx, _sig, _args| Arc::new(PlainObject::new()) as Arc<dyn RuntimeObject>);
    ClassDescriptor::native("java/lang/Object", modifiers::PUBLIC, variadic, values)
});

/// Canonical descriptor for `java/lang/Class`.
///
/// Native-backed (descriptors are real objects in this emulation) but not
/// constructible through the foreign interface: the runtime alone creates
/// descriptor instances, so both strategies fail fatally.
static CLASS_CLASS: Lazy<Arc<ClassDescriptor>> = Lazy::new(|| {
    let variadic: ConstructVaFn = Arc::new(|_ctx, _sig, _args| {
        panic!("java/lang/Class instances are created by the runtime, not by constructor")
    });
    let values: ConstructValuesFn = Arc::new(|_ctx, _sig, _args| {
        panic!("java/lang/Class instances are created by the runtime, not by constructor")
    });
    ClassDescriptor::native(
        "java/lang/Class",
        modifiers::PUBLIC | modifiers::FINAL,
        variadic,
        values,
    )
});

/// The process-lifetime descriptor for `java/lang/Object` — the default
/// superclass of every class built without an explicit one.
pub fn object_class() -> Arc<ClassDescriptor> {
    Arc::clone(&OBJECT_CLASS)
}

/// The process-lifetime descriptor for `java/lang/Class` — the class every
/// class descriptor reports as its own.
pub fn class_class() -> Arc<ClassDescriptor> {
    Arc::clone(&CLASS_CLASS)
}
