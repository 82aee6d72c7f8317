//! Static registration of native-backed classes
//!
//! Binds a natively-implemented Rust type to exactly one canonical class
//! descriptor, exposed through the well-known [`NativeClass::descriptor`]
//! accessor, so that every object of that type reports the same
//! descriptor instance.

use std::sync::Arc;

use crate::class::ClassDescriptor;
use crate::object::RuntimeObject;

/// A native type bound to a canonical class descriptor.
///
/// Implement via the [`native_class!`](crate::native_class) macro rather
/// than by hand: the macro guarantees the one-descriptor-per-type
/// invariant with a per-type singleton.
pub trait NativeClass: RuntimeObject {
    /// The single, process-lifetime descriptor shared by every instance
    /// of this type.
    fn descriptor() -> Arc<ClassDescriptor>;
}

/// Bind a native type to its canonical class descriptor.
///
/// Generates the [`NativeClass`] and [`RuntimeObject`] impls for the type,
/// backed by a per-type singleton: the descriptor is built once, on first
/// access, and every instance reports it.
///
/// ```ignore
/// native_class! {
///     Widget,
///     name: "com/example/Widget",
///     modifiers: modifiers::PUBLIC,
///     construct_va: Arc::new(|_ctx, _sig, _args| Arc::new(Widget::default()) as _),
///     construct_values: Arc::new(|_ctx, _sig, _args| Arc::new(Widget::default()) as _),
/// }
/// ```
///
/// An optional trailing `extends: <expr>` installs an explicit superclass
/// descriptor; without it the superclass defaults to `java/lang/Object`.
#[macro_export]
macro_rules! native_class {
    (
        $ty:ty,
        name: $name:expr,
        modifiers: $mods:expr,
        construct_va: $va:expr,
        construct_values: $values:expr $(,)?
    ) => {
        $crate::native_class!(@impl $ty, $crate::ClassDescriptor::native($name, $mods, $va, $values));
    };
    (
        $ty:ty,
        name: $name:expr,
        modifiers: $mods:expr,
        construct_va: $va:expr,
        construct_values: $values:expr,
        extends: $superclass:expr $(,)?
    ) => {
        $crate::native_class!(@impl $ty, $crate::ClassDescriptor::native_with_superclass(
            $name, $mods, $va, $values, $superclass,
        ));
    };
    (@impl $ty:ty, $init:expr) => {
        impl $crate::NativeClass for $ty {
            fn descriptor() -> ::std::sync::Arc<$crate::ClassDescriptor> {
                static DESCRIPTOR: ::std::sync::OnceLock<
                    ::std::sync::Arc<$crate::ClassDescriptor>,
                > = ::std::sync::OnceLock::new();
                ::std::sync::Arc::clone(DESCRIPTOR.get_or_init(|| $init))
            }
        }

        impl $crate::RuntimeObject for $ty {
            fn class(&self) -> ::std::sync::Arc<$crate::ClassDescriptor> {
                <$ty as $crate::NativeClass>::descriptor()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}
