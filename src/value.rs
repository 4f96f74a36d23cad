//! The foreign value representation.
//!
//! Every argument passed across the runtime boundary is first converted into a
//! [`Value`]. Runtimes translate [`Value`]s into their own objects and back.
use core::fmt;
use std::any::Any;
use std::rc::Rc;

use glam::{DVec2, DVec3};

/// An opaque object living inside the foreign runtime (a module, a buffer,
/// an axes instance, ...).
///
/// Cloning shares the same underlying object. Two handles can be compared for
/// identity with [`ForeignObject::ptr_eq`].
#[derive(Clone)]
pub struct ForeignObject(Rc<dyn Any>);

impl ForeignObject {
    /// Wrap a runtime-specific object.
    pub fn new<T: Any>(inner: T) -> Self {
        Self(Rc::new(inner))
    }

    /// Access the runtime-specific object, if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let inner: &dyn Any = &*self.0;
        inner.downcast_ref::<T>()
    }

    /// Whether both handles refer to the same foreign object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ForeignObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForeignObject({:p})", Rc::as_ptr(&self.0))
    }
}

/// A value in the foreign runtime's calling convention.
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Object(ForeignObject),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ForeignObject> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Elements of a list or tuple.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::Tuple(_) => "tuple",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Tuple(a), Self::Tuple(b)) | (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Python-style rendering, handy for call logs.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Self::Bytes(b) => write!(f, "b'{}'", b.escape_ascii()),
            Self::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Self::Object(_) => f.write_str("<object>"),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Conversion of host values into the foreign representation.
///
/// Conversions are pure and total.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! int_to_value {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Int(*self as i64)
            }
        })*
    };
}

int_to_value!(u8, u16, u32, i32, i64);

/// Saturates at `i64::MAX`.
impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::Int(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(*self as f64)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<A: ToValue, B: ToValue> ToValue for (A, B) {
    fn to_value(&self) -> Value {
        Value::Tuple(vec![self.0.to_value(), self.1.to_value()])
    }
}

impl<A: ToValue, B: ToValue, C: ToValue> ToValue for (A, B, C) {
    fn to_value(&self) -> Value {
        Value::Tuple(vec![self.0.to_value(), self.1.to_value(), self.2.to_value()])
    }
}

impl ToValue for DVec2 {
    fn to_value(&self) -> Value {
        (self.x, self.y).to_value()
    }
}

impl ToValue for DVec3 {
    fn to_value(&self) -> Value {
        (self.x, self.y, self.z).to_value()
    }
}

impl ToValue for ForeignObject {
    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn usize_saturates_instead_of_wrapping() {
        assert_eq!(7usize.to_value(), Value::Int(7));
        assert_eq!(usize::MAX.to_value(), Value::Int(i64::MAX));
        assert_eq!(crate::Bins::Count(usize::MAX).to_value().to_string(), i64::MAX.to_string());
    }

    #[test]
    fn display_matches_python_repr() {
        let v = Value::List(vec![
            Value::Int(1),
            Value::Float(2.5),
            Value::Str("upper right".into()),
            Value::Tuple(vec![Value::Bool(true)]),
            Value::None,
        ]);
        assert_eq!(v.to_string(), "[1, 2.5, 'upper right', (True,), None]");
    }

    #[test]
    fn objects_compare_by_identity() {
        let a = ForeignObject::new(1u32);
        let b = ForeignObject::new(1u32);
        assert_eq!(Value::Object(a.clone()), Value::Object(a.clone()));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn downcast_recovers_inner_object() {
        let obj = ForeignObject::new(String::from("pyplot"));
        assert_eq!(obj.downcast_ref::<String>().map(String::as_str), Some("pyplot"));
        assert!(obj.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn points_become_tuples() {
        assert_eq!(
            DVec3::new(1.0, 2.0, 3.0).to_value().to_string(),
            "(1.0, 2.0, 3.0)"
        );
        assert_eq!((2.0, 4.0).to_value().to_string(), "(2.0, 4.0)");
    }
}
