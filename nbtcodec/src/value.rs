use crate::{Compound, List, TagType};

/// A named NBT tag: one node of the tree.
///
/// The type of the tag is not stored separately, it is the type of
/// [`value`][Tag::value]. An empty name is a valid name and is distinct from a
/// name that is not written at all (see [`Naming`][crate::Naming]).
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub value: Value,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn tag_type(&self) -> TagType {
        self.value.tag_type()
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

/// The payload of a tag. Compounds and lists own their children.
///
/// There is no variant for the `End` tag, it only exists on the wire as the
/// terminator of a compound.
///
/// Equality compares floats by their bits, matching what goes over the wire:
/// a NaN equals the same NaN, and `0.0` does not equal `-0.0`.
#[derive(Debug, Clone)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::ByteArray(a), Value::ByteArray(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Compound(a), Value::Compound(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn tag_type(&self) -> TagType {
        match self {
            Value::Byte(_) => TagType::Byte,
            Value::Short(_) => TagType::Short,
            Value::Int(_) => TagType::Int,
            Value::Long(_) => TagType::Long,
            Value::Float(_) => TagType::Float,
            Value::Double(_) => TagType::Double,
            Value::ByteArray(_) => TagType::ByteArray,
            Value::String(_) => TagType::String,
            Value::List(_) => TagType::List,
            Value::Compound(_) => TagType::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
