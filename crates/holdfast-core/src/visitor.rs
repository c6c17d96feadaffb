//! Generic traversal of object graphs.
//!
//! [`DataVisitor`] is the double-dispatch half of [`Object::accept_visitor`]:
//! an object calls back into the visitor method for its kind, and the visitor
//! decides how (and whether) to descend into children. Containers hand their
//! children over as iterators so this crate never depends on a concrete
//! container type.
//!
//! [`PrettyPrinter`] is the stock visitor. It renders any visitable graph as
//! indented text, which is what debug overlays and test failures want.

use crate::object::Object;
use crate::value::{BoolValue, DoubleValue, IntValue, StringValue};

/// Visitor over [`Object`] graphs.
///
/// Only [`visit_object`](DataVisitor::visit_object) is required; every other
/// callback falls back to it. Sequence and dictionary callbacks receive their
/// children as iterators and, by default, visit each child value with
/// `visit_object` (they do not recurse through `accept_visitor`).
pub trait DataVisitor {
    /// Fallback for objects with no dedicated callback.
    fn visit_object(&mut self, object: &dyn Object);

    /// A boxed boolean.
    fn visit_bool(&mut self, value: &BoolValue) {
        self.visit_object(value);
    }

    /// A boxed integer.
    fn visit_integer(&mut self, value: &IntValue) {
        self.visit_object(value);
    }

    /// A boxed float.
    fn visit_double(&mut self, value: &DoubleValue) {
        self.visit_object(value);
    }

    /// A boxed string.
    fn visit_string(&mut self, value: &StringValue) {
        self.visit_object(value);
    }

    /// An ordered sequence, children in container order.
    fn visit_sequence<'a>(&mut self, items: &mut dyn Iterator<Item = &'a dyn Object>) {
        for item in items {
            self.visit_object(item);
        }
    }

    /// A keyed collection, entries in the dictionary's iteration order.
    fn visit_dictionary<'a>(
        &mut self,
        entries: &mut dyn Iterator<Item = (&'a str, &'a dyn Object)>,
    ) {
        for (_, value) in entries {
            self.visit_object(value);
        }
    }
}

/// Renders an object graph as indented text.
///
/// ```
/// use holdfast_core::{Object, PrettyPrinter, IntValue};
///
/// let mut printer = PrettyPrinter::new();
/// IntValue(42).accept_visitor(&mut printer);
/// assert_eq!(printer.result(), "42");
/// ```
#[derive(Clone, Debug)]
pub struct PrettyPrinter {
    out: String,
    indent: usize,
    indent_step: usize,
}

impl PrettyPrinter {
    /// Default number of spaces per nesting level.
    pub const DEFAULT_INDENT_STEP: usize = 4;

    /// Create a printer with the default indent step.
    pub fn new() -> Self {
        Self::with_indent_step(Self::DEFAULT_INDENT_STEP)
    }

    /// Create a printer that indents nested blocks by `step` spaces.
    pub fn with_indent_step(step: usize) -> Self {
        Self {
            out: String::new(),
            indent: 0,
            indent_step: step,
        }
    }

    /// The text rendered so far.
    pub fn result(&self) -> &str {
        &self.out
    }

    /// Discard rendered text, keeping the indent configuration.
    pub fn clear(&mut self) {
        self.out.clear();
    }

    fn child(&self) -> Self {
        Self {
            out: String::new(),
            indent: self.indent + self.indent_step,
            indent_step: self.indent_step,
        }
    }

    /// Append `label: <child output>` on its own line at the child's indent.
    fn push_entry(&mut self, label: &str, child: &Self) {
        self.pad(child.indent);
        self.out.push_str(label);
        self.out.push_str(": ");
        self.out.push_str(&child.out);
        self.out.push('\n');
    }

    fn pad(&mut self, width: usize) {
        self.out.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl DataVisitor for PrettyPrinter {
    fn visit_object(&mut self, object: &dyn Object) {
        self.out.push('<');
        self.out.push_str(object.type_name());
        self.out.push('>');
    }

    fn visit_bool(&mut self, value: &BoolValue) {
        self.out.push_str(&value.to_string());
    }

    fn visit_integer(&mut self, value: &IntValue) {
        self.out.push_str(&value.to_string());
    }

    fn visit_double(&mut self, value: &DoubleValue) {
        self.out.push_str(&value.to_string());
    }

    fn visit_string(&mut self, value: &StringValue) {
        self.out.push_str(value.as_str());
    }

    fn visit_sequence<'a>(&mut self, items: &mut dyn Iterator<Item = &'a dyn Object>) {
        self.out.push_str("<sequence>\n");
        for (i, item) in items.enumerate() {
            let mut child = self.child();
            item.accept_visitor(&mut child);
            self.push_entry(&i.to_string(), &child);
        }
        self.pad(self.indent);
        self.out.push_str("</sequence>");
    }

    fn visit_dictionary<'a>(
        &mut self,
        entries: &mut dyn Iterator<Item = (&'a str, &'a dyn Object)>,
    ) {
        self.out.push_str("<dictionary>\n");
        for (key, value) in entries {
            let mut child = self.child();
            value.accept_visitor(&mut child);
            self.push_entry(key, &child);
        }
        self.pad(self.indent);
        self.out.push_str("</dictionary>");
    }
}
