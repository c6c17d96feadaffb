//! The polymorphic object protocol.
//!
//! Every value stored in a holdfast container is an `Rc<T>` where `T`
//! implements [`Object`]. Reference counting is delegated entirely to
//! [`Rc`](std::rc::Rc):
//!
//! | protocol            | Rust                 |
//! |---------------------|----------------------|
//! | retain              | `Rc::clone`          |
//! | release             | drop an `Rc`         |
//! | reference count     | `Rc::strong_count`   |
//! | identity comparison | `Rc::ptr_eq`         |

use std::any::Any;

use crate::visitor::DataVisitor;

/// Upcasts for [`Object`] implementors.
///
/// Blanket-implemented for every sized `Object`; never implement it by hand.
/// Lets code that only holds a `&T` with `T: ?Sized + Object` (for example
/// `&dyn Object` or a user trait object) reach `&dyn Object` and `&dyn Any`.
pub trait AsObject {
    /// View this value as a trait object.
    fn as_object(&self) -> &dyn Object;

    /// View this value as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Object> AsObject for T {
    fn as_object(&self) -> &dyn Object {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A heap object that may be stored in a holdfast container.
///
/// The only required behaviour is visitor dispatch, which defaults to
/// [`DataVisitor::visit_object`]. Types with a dedicated visitor callback
/// (scalars, sequences, dictionaries) override [`accept_visitor`].
///
/// [`accept_visitor`]: Object::accept_visitor
pub trait Object: AsObject + 'static {
    /// Dispatch to the visitor callback matching this object's kind.
    fn accept_visitor(&self, visitor: &mut dyn DataVisitor) {
        visitor.visit_object(self.as_object());
    }

    /// Name of the concrete type, used in diagnostics and pretty-printing.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Object {
    /// Whether the concrete type behind this object is `U`.
    pub fn is<U: Object>(&self) -> bool {
        self.as_any().is::<U>()
    }

    /// Borrow this object as a `U`, if that is its concrete type.
    pub fn downcast_ref<U: Object>(&self) -> Option<&U> {
        self.as_any().downcast_ref::<U>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Sprite {
        tag: u32,
    }

    impl Object for Sprite {}

    struct Label;

    impl Object for Label {}

    #[test]
    fn downcast_finds_concrete_type() {
        let obj: Rc<dyn Object> = Rc::new(Sprite { tag: 7 });
        assert!(obj.is::<Sprite>());
        assert!(!obj.is::<Label>());
        assert_eq!(obj.downcast_ref::<Sprite>().map(|s| s.tag), Some(7));
        assert!(obj.downcast_ref::<Label>().is_none());
    }

    #[test]
    fn type_name_reports_concrete_type() {
        let obj: Rc<dyn Object> = Rc::new(Label);
        assert!(obj.type_name().ends_with("Label"));
    }

    #[test]
    fn as_object_preserves_identity() {
        let obj: Rc<dyn Object> = Rc::new(Label);
        let a = obj.as_object() as *const dyn Object as *const u8;
        let b = Rc::as_ptr(&obj) as *const u8;
        assert_eq!(a, b);
    }
}
