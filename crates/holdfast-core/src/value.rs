//! Boxed scalar objects.
//!
//! Scalars are what resource files bottom out in. Each type forwards to its
//! own [`DataVisitor`] callback so serializers can tell them apart without
//! downcasting.

use std::fmt;
use std::rc::Rc;

use crate::object::Object;
use crate::visitor::DataVisitor;

/// A boxed boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoolValue(pub bool);

/// A boxed signed integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntValue(pub i64);

/// A boxed double-precision float.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DoubleValue(pub f64);

/// A boxed, owned string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringValue(pub String);

impl BoolValue {
    /// Allocate a shared boolean object.
    pub fn shared(value: bool) -> Rc<Self> {
        Rc::new(Self(value))
    }
}

impl IntValue {
    /// Allocate a shared integer object.
    pub fn shared(value: i64) -> Rc<Self> {
        Rc::new(Self(value))
    }
}

impl DoubleValue {
    /// Allocate a shared float object.
    pub fn shared(value: f64) -> Rc<Self> {
        Rc::new(Self(value))
    }
}

impl StringValue {
    /// Allocate a shared string object.
    pub fn shared(value: impl Into<String>) -> Rc<Self> {
        Rc::new(Self(value.into()))
    }

    /// The string contents.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Object for BoolValue {
    fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        visitor.visit_bool(self);
    }
}

impl Object for IntValue {
    fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        visitor.visit_integer(self);
    }
}

impl Object for DoubleValue {
    fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        visitor.visit_double(self);
    }
}

impl Object for StringValue {
    fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        visitor.visit_string(self);
    }
}

impl fmt::Display for BoolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DoubleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StringValue {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for StringValue {
    fn from(v: String) -> Self {
        Self(v)
    }
}
