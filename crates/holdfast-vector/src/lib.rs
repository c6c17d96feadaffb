//! Owning, reference-counted object vectors.
//!
//! [`ObjectVector`] is an ordered sequence of `Rc` handles in which every
//! slot owns exactly one strong reference to its object. It is the
//! foundational container of the runtime: scene children, action lists and
//! loaded resources all live in one.
//!
//! # Ownership contract
//!
//! - The reference count an object gets from a vector equals the number of
//!   slots holding it.
//! - Removing or overwriting a slot releases exactly the reference that slot
//!   owned, exactly once, or hands it back to the caller.
//! - Indices are contiguous in `[0, count)`.
//!
//! The only operation that steps outside this contract is
//! [`ObjectVector::fast_set_at`], an `unsafe fn` that writes raw handles into
//! a slot. The "fast" removals ([`ObjectVector::fast_remove_at`],
//! [`ObjectVector::fast_remove_object`]) keep the ownership contract but do
//! not preserve element order.
//!
//! # Threading
//!
//! `Rc` makes every vector `!Send` and `!Sync`. Mutation is single-threaded
//! and every operation runs to completion on the caller's thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod apply;
pub mod iter;
mod raw;
pub mod vector;

pub use holdfast_core::Object;
pub use iter::Cursor;
pub use vector::ObjectVector;

/// Build an [`ObjectVector`] from a list of handles, in argument order.
///
/// Every argument must already have the vector's element type; upcast with
/// `as Rc<dyn Object>` when building a heterogeneous vector.
///
/// ```
/// use std::rc::Rc;
/// use holdfast_core::{IntValue, Object, StringValue};
/// use holdfast_vector::{object_vector, ObjectVector};
///
/// let ints = object_vector![IntValue::shared(1), IntValue::shared(2)];
/// assert_eq!(ints.count(), 2);
///
/// let mixed: ObjectVector = object_vector![
///     IntValue::shared(1) as Rc<dyn Object>,
///     StringValue::shared("two") as Rc<dyn Object>,
/// ];
/// assert_eq!(mixed.count(), 2);
///
/// let empty: ObjectVector = object_vector![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! object_vector {
    () => {
        $crate::ObjectVector::new()
    };
    ($($object:expr),+ $(,)?) => {
        $crate::ObjectVector::from_objects([$($object),+])
    };
}
