//! HollowJVM core — class descriptors, member registries, and
//! instantiation dispatch
//!
//! A drop-in emulation of the contract a JVM exposes to natively-compiled
//! extensions, without the JVM existing: native code creates objects,
//! looks up methods and fields, and dispatches constructors against a
//! lightweight standalone class model.
//!
//! The center of the crate is [`ClassDescriptor`]: one runtime class, its
//! ordered method and field registries, and the two instantiation entry
//! points that delegate to whichever strategies the binding layer
//! installed. Classes known only by metadata ("arbitrary" classes) are
//! first-class citizens of lookup and reflection-shaped queries but are
//! permanently non-constructible.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hollowjvm_core::{ClassDescriptor, MethodDescriptor, modifiers};
//!
//! let class = ClassDescriptor::arbitrary("com/acme/Remote", modifiers::PUBLIC);
//! class.register_method(Arc::new(MethodDescriptor::static_method("ping", "()Z")));
//! assert!(class.method("()Z", "ping").is_some());
//! ```

mod class;
mod context;
mod error;
mod member;
mod object;
mod register;
mod table;
mod value;

pub use class::{modifiers, ClassDescriptor, ConstructValuesFn, ConstructVaFn};
pub use context::{NullVmContext, VmContext};
pub use error::{VmError, VmResult};
pub use member::{FieldDescriptor, MethodDescriptor, MethodKind};
pub use object::{class_class, object_class, PlainObject, RuntimeObject};
pub use register::NativeClass;
pub use table::MemberTable;
pub use value::{FromJValue, JValue, VaArgs};
