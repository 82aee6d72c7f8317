//! Tagged-union argument values
//!
//! `JValue` is the foreign interface's standard representation of a typed
//! argument slot — one discriminated value per argument. `VaArgs` is the
//! in-process stand-in for a native variadic argument list: a cursor that
//! yields values in order, once each.
//!
//! The dispatch core never inspects argument contents; it only routes them
//! to the installed instantiation strategy. The accessors and conversions
//! here are for strategy implementors.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::VmError;
use crate::object::RuntimeObject;

/// One typed argument slot, tagged by a discriminant.
#[derive(Clone)]
pub enum JValue {
    /// Boolean
    Bool(bool),
    /// Signed 8-bit integer
    Byte(i8),
    /// UTF-16 code unit
    Char(u16),
    /// Signed 16-bit integer
    Short(i16),
    /// Signed 32-bit integer
    Int(i32),
    /// Signed 64-bit integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// Object reference, possibly null
    Object(Option<Arc<dyn RuntimeObject>>),
}

impl JValue {
    /// Get as bool if this is a Bool slot
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i8 if this is a Byte slot
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            JValue::Byte(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as u16 if this is a Char slot
    pub fn as_char(&self) -> Option<u16> {
        match self {
            JValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Get as i16 if this is a Short slot
    pub fn as_short(&self) -> Option<i16> {
        match self {
            JValue::Short(s) => Some(*s),
            _ => None,
        }
    }

    /// Get as i32 if this is an Int slot
    pub fn as_int(&self) -> Option<i32> {
        match self {
            JValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as i64 if this is a Long slot
    pub fn as_long(&self) -> Option<i64> {
        match self {
            JValue::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Get as f32 if this is a Float slot
    pub fn as_float(&self) -> Option<f32> {
        match self {
            JValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as f64 if this is a Double slot
    pub fn as_double(&self) -> Option<f64> {
        match self {
            JValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the object reference if this is an Object slot
    pub fn as_object(&self) -> Option<Option<Arc<dyn RuntimeObject>>> {
        match self {
            JValue::Object(o) => Some(o.clone()),
            _ => None,
        }
    }

    /// Discriminant name, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            JValue::Bool(_) => "bool",
            JValue::Byte(_) => "byte",
            JValue::Char(_) => "char",
            JValue::Short(_) => "short",
            JValue::Int(_) => "int",
            JValue::Long(_) => "long",
            JValue::Float(_) => "float",
            JValue::Double(_) => "double",
            JValue::Object(_) => "object",
        }
    }
}

impl std::fmt::Debug for JValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JValue::Bool(b) => write!(f, "JValue::Bool({})", b),
            JValue::Byte(b) => write!(f, "JValue::Byte({})", b),
            JValue::Char(c) => write!(f, "JValue::Char({})", c),
            JValue::Short(s) => write!(f, "JValue::Short({})", s),
            JValue::Int(i) => write!(f, "JValue::Int({})", i),
            JValue::Long(l) => write!(f, "JValue::Long({})", l),
            JValue::Float(v) => write!(f, "JValue::Float({})", v),
            JValue::Double(d) => write!(f, "JValue::Double({})", d),
            JValue::Object(Some(o)) => write!(f, "JValue::Object({})", o.class().name()),
            JValue::Object(None) => write!(f, "JValue::Object(null)"),
        }
    }
}

/// Variadic argument cursor.
///
/// Stands in for the platform `va_list`: values are consumed sequentially,
/// once each, in the order the caller supplied them. Random access is not
/// offered — strategies needing it take the `&[JValue]` entry point.
#[derive(Debug)]
pub struct VaArgs {
    values: VecDeque<JValue>,
}

impl VaArgs {
    /// Create a cursor over the given arguments
    pub fn new(values: Vec<JValue>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Consume and return the next argument, if any
    pub fn next(&mut self) -> Option<JValue> {
        self.values.pop_front()
    }

    /// Number of arguments not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl From<Vec<JValue>> for VaArgs {
    fn from(values: Vec<JValue>) -> Self {
        Self::new(values)
    }
}

/// Convert from a `JValue` slot to a Rust type.
///
/// Implemented for the primitive slot types; strategy implementors use it
/// to unpack constructor arguments with a typed error on mismatch.
pub trait FromJValue: Sized {
    /// Convert from a value slot, returning `TypeMismatch` if the
    /// discriminant does not match.
    fn from_jvalue(value: &JValue) -> Result<Self, VmError>;
}

macro_rules! impl_from_jvalue {
    ($ty:ty, $accessor:ident, $expected:literal) => {
        impl FromJValue for $ty {
            fn from_jvalue(value: &JValue) -> Result<Self, VmError> {
                value.$accessor().ok_or_else(|| VmError::TypeMismatch {
                    expected: $expected.to_string(),
                    got: value.type_name().to_string(),
                })
            }
        }
    };
}

impl_from_jvalue!(bool, as_bool, "bool");
impl_from_jvalue!(i8, as_byte, "byte");
impl_from_jvalue!(u16, as_char, "char");
impl_from_jvalue!(i16, as_short, "short");
impl_from_jvalue!(i32, as_int, "int");
impl_from_jvalue!(i64, as_long, "long");
impl_from_jvalue!(f32, as_float, "float");
impl_from_jvalue!(f64, as_double, "double");

impl FromJValue for Option<Arc<dyn RuntimeObject>> {
    fn from_jvalue(value: &JValue) -> Result<Self, VmError> {
        value.as_object().ok_or_else(|| VmError::TypeMismatch {
            expected: "object".to_string(),
            got: value.type_name().to_string(),
        })
    }
}
